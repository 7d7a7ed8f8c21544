//! Route data: handler references, resolution targets and registered route descriptors.

use axum::http::Method;
use std::collections::BTreeSet;
use std::fmt;

/// Method name reported for single-action (invokable) handlers.
pub const INVOKE_METHOD: &str = "invoke";

/// Code that serves a route.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandlerRef {
    /// A named method on a controller, e.g. `UserController::show`.
    ClassMethod { class: String, method: String },
    /// A controller with a single entry point.
    Invokable { class: String },
    /// An anonymous handler, identified by an opaque id.
    Closure { id: String },
}

impl HandlerRef {
    pub fn method(class: impl Into<String>, method: impl Into<String>) -> Self {
        HandlerRef::ClassMethod {
            class: class.into(),
            method: method.into(),
        }
    }

    pub fn invokable(class: impl Into<String>) -> Self {
        HandlerRef::Invokable { class: class.into() }
    }

    pub fn closure(id: impl Into<String>) -> Self {
        HandlerRef::Closure { id: id.into() }
    }

    /// Owning class; closures have none.
    pub fn class(&self) -> Option<&str> {
        match self {
            HandlerRef::ClassMethod { class, .. } | HandlerRef::Invokable { class } => Some(class),
            HandlerRef::Closure { .. } => None,
        }
    }

    /// Operation name used as the default endpoint key.
    pub fn method_name(&self) -> &str {
        match self {
            HandlerRef::ClassMethod { method, .. } => method,
            HandlerRef::Invokable { .. } => INVOKE_METHOD,
            HandlerRef::Closure { id } => id,
        }
    }
}

impl fmt::Display for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerRef::ClassMethod { class, method } => write!(f, "{}@{}", class, method),
            HandlerRef::Invokable { class } => write!(f, "{}", class),
            HandlerRef::Closure { id } => write!(f, "closure:{}", id),
        }
    }
}

/// What a handler type resolves routes for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandlerTarget {
    /// Every route served by the class: its methods and its invokable entry point.
    Controller(String),
    /// Exactly one handler.
    Action(HandlerRef),
}

impl HandlerTarget {
    pub fn matches(&self, handler: &HandlerRef) -> bool {
        match self {
            HandlerTarget::Controller(class) => handler.class() == Some(class.as_str()),
            HandlerTarget::Action(action) => action == handler,
        }
    }

    /// Class backing the target, or the closure id for closure actions.
    pub fn base_name(&self) -> &str {
        match self {
            HandlerTarget::Controller(class) => class,
            HandlerTarget::Action(action) => action.class().unwrap_or_else(|| action.method_name()),
        }
    }
}

impl From<HandlerRef> for HandlerTarget {
    fn from(handler: HandlerRef) -> Self {
        HandlerTarget::Action(handler)
    }
}

/// One registered route matched to its handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub method: Method,
    /// Path template as registered, e.g. `users/{user}/posts/{post?}`.
    pub uri: String,
    /// Every parameter in the template, required or optional.
    pub parameter_names: BTreeSet<String>,
    pub optional_parameters: BTreeSet<String>,
    pub handler: HandlerRef,
}

impl RouteDescriptor {
    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameter_names.contains(name)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.has_parameter(name) && !self.optional_parameters.contains(name)
    }

    pub fn method_name(&self) -> &str {
        self.handler.method_name()
    }
}
