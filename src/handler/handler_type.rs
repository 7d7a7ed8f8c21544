//! A single handler's endpoints: route classification, whitelist, renaming and prefixing.
//!
//! Routes are split into local routes (a path parameter names the entity) and collection
//! routes (nothing to bind). Controllers without an explicit method list resolve local
//! routes for an entity and parameter-free routes for a collection. An explicit method
//! list, or a single action, resolves every listed route for an entity: local ones get the
//! entity bound, the rest render unbound.

use crate::case::{short_type_name, to_snake_case};
use crate::endpoint::{EndpointDescriptor, EndpointMap};
use crate::entity::{Entity, EntityBinder};
use crate::error::EndpointError;
use crate::formatter::{namespace_from_prefix, FormatterKind};
use crate::route::{HandlerRef, HandlerTarget, RouteDescriptor, RouteRegistry};
use std::collections::HashMap;

/// Configuration for one controller or action. Setters mutate in place; a configured
/// value belongs to a single resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandlerType {
    target: HandlerTarget,
    methods: Option<Vec<String>>,
    names: HashMap<String, String>,
    prefix: String,
    name: Option<String>,
    formatter: Option<FormatterKind>,
}

impl HandlerType {
    /// All routes of a controller class.
    pub fn make(class: impl Into<String>) -> Self {
        Self::controller(class)
    }

    pub fn controller(class: impl Into<String>) -> Self {
        Self::new(HandlerTarget::Controller(class.into()))
    }

    /// Exactly one handler, e.g. `HandlerRef::method("PostController", "index")`.
    pub fn action(handler: HandlerRef) -> Self {
        Self::new(HandlerTarget::Action(handler))
    }

    fn new(target: HandlerTarget) -> Self {
        HandlerType {
            target,
            methods: None,
            names: HashMap::new(),
            prefix: String::new(),
            name: None,
            formatter: None,
        }
    }

    /// Restrict to these operation names, in this order.
    pub fn methods<I, S>(&mut self, methods: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    /// Rename output keys: operation name -> key.
    pub fn names<I, K, V>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.names
            .extend(names.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.prefix = prefix.into();
        self
    }

    /// Key of a single-operation endpoint (action or invokable route); namespace in layered output.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn formatter(&mut self, formatter: FormatterKind) -> &mut Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn target(&self) -> &HandlerTarget {
        &self.target
    }

    pub fn formatter_kind(&self) -> Option<FormatterKind> {
        self.formatter
    }

    /// Key a layered formatter wraps this handler's endpoints under.
    pub fn namespace(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        if let Some(key) = namespace_from_prefix(&self.prefix) {
            return key.to_string();
        }
        to_snake_case(short_type_name(self.target.base_name()))
    }

    /// Endpoints reachable for one entity.
    pub fn get_endpoints(
        &self,
        registry: &dyn RouteRegistry,
        entity: &dyn Entity,
    ) -> Result<EndpointMap, EndpointError> {
        self.resolve(registry, Some(entity), FormatterKind::default())
    }

    /// Endpoints that need no entity.
    pub fn get_collection_endpoints(
        &self,
        registry: &dyn RouteRegistry,
    ) -> Result<EndpointMap, EndpointError> {
        self.resolve(registry, None, FormatterKind::default())
    }

    /// Resolve with `fallback` as formatter unless one was configured.
    pub(crate) fn resolve(
        &self,
        registry: &dyn RouteRegistry,
        entity: Option<&dyn Entity>,
        fallback: FormatterKind,
    ) -> Result<EndpointMap, EndpointError> {
        let formatter = self.formatter.unwrap_or(fallback);
        let routes = registry.routes_for(&self.target);
        let explicit = self.is_explicit();

        let mut endpoints = EndpointMap::new();
        for route in self.whitelisted(&routes) {
            let parameters = match entity {
                Some(entity) if EntityBinder::is_local(route, entity) => {
                    EntityBinder::parameters(route, entity)
                }
                Some(_) if explicit => HashMap::new(),
                Some(_) => continue,
                None if is_collection_route(route) => HashMap::new(),
                None => continue,
            };
            let action = registry.url_for(route, &parameters)?;
            endpoints.insert_endpoint(
                self.endpoint_name(route, formatter),
                EndpointDescriptor::new(route.method.as_str(), action),
            );
        }

        let scope = if entity.is_some() { "local" } else { "collection" };
        tracing::debug!(
            target_handler = ?self.target,
            scope = scope,
            count = endpoints.len(),
            "resolved endpoints"
        );
        Ok(formatter.apply(endpoints, &self.namespace()))
    }

    fn is_explicit(&self) -> bool {
        self.methods.is_some() || matches!(self.target, HandlerTarget::Action(_))
    }

    /// Routes surviving the whitelist, in whitelist order; registry order otherwise.
    fn whitelisted<'r>(&self, routes: &'r [RouteDescriptor]) -> Vec<&'r RouteDescriptor> {
        let Some(methods) = &self.methods else {
            return routes.iter().collect();
        };
        let mut selected = Vec::with_capacity(methods.len());
        for method in methods {
            let before = selected.len();
            selected.extend(routes.iter().filter(|route| route.method_name() == method.as_str()));
            if selected.len() == before {
                tracing::debug!(method = %method, target_handler = ?self.target, "no route registered for method");
            }
        }
        selected
    }

    fn endpoint_name(&self, route: &RouteDescriptor, formatter: FormatterKind) -> String {
        let method = route.method_name();
        let single = matches!(self.target, HandlerTarget::Action(_))
            || matches!(route.handler, HandlerRef::Invokable { .. });
        let name = match (&self.name, single) {
            (Some(name), true) => name.clone(),
            _ => self
                .names
                .get(method)
                .cloned()
                .unwrap_or_else(|| method.to_string()),
        };
        if formatter.prefixes_names() {
            format!("{}{}", self.prefix, name)
        } else {
            name
        }
    }
}

impl From<HandlerRef> for HandlerType {
    fn from(handler: HandlerRef) -> Self {
        HandlerType::action(handler)
    }
}

/// Without an entity only parameter-free routes can be materialized.
fn is_collection_route(route: &RouteDescriptor) -> bool {
    route
        .parameter_names
        .iter()
        .all(|name| !route.is_required(name))
}
