//! Route registry contract and an in-memory route table.
//! Templates accept `{param}`, optional `{param?}` and axum-style `:param` segments.
//! A colon inside a segment (`items/{item}:archive`) is literal.

use crate::error::EndpointError;
use crate::route::descriptor::{HandlerRef, HandlerTarget, RouteDescriptor};
use axum::http::Method;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

/// Read-only view of the registered routes.
pub trait RouteRegistry: Send + Sync {
    /// All routes whose handler the target matches, in registration order.
    fn routes_for(&self, target: &HandlerTarget) -> Vec<RouteDescriptor>;

    /// Materialize a concrete URL. Fails when a required parameter is not in `parameters`.
    fn url_for(
        &self,
        route: &RouteDescriptor,
        parameters: &HashMap<String, String>,
    ) -> Result<String, EndpointError>;
}

/// Characters escaped in a bound path-segment value.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `{name}` / `{name?}` anywhere, `:name` only at the start of a segment.
fn parameter_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{(\w+)(\?)?\}|(?:^|/):(\w+)").expect("route parameter pattern is valid")
    })
}

/// One parameter occurrence: byte span of the placeholder, name, optional flag.
fn placeholders(uri: &str) -> impl Iterator<Item = (std::ops::Range<usize>, &str, bool)> {
    parameter_pattern().captures_iter(uri).filter_map(|caps| {
        if let Some(name) = caps.get(1) {
            let whole = caps.get(0)?;
            Some((whole.range(), name.as_str(), caps.get(2).is_some()))
        } else {
            // the span starts at the colon, leaving a leading slash in place
            let name = caps.get(3)?;
            Some((name.start() - 1..name.end(), name.as_str(), false))
        }
    })
}

/// Parameter names in a path template: (all, optional).
pub fn parse_parameters(uri: &str) -> (BTreeSet<String>, BTreeSet<String>) {
    let mut all = BTreeSet::new();
    let mut optional = BTreeSet::new();
    for (_, name, is_optional) in placeholders(uri) {
        all.insert(name.to_string());
        if is_optional {
            optional.insert(name.to_string());
        }
    }
    (all, optional)
}

/// Substitute percent-encoded parameters into a path template.
/// Unbound or empty optional segments are dropped; an unbound or empty required one fails.
pub fn fill_template(
    uri: &str,
    parameters: &HashMap<String, String>,
) -> Result<String, EndpointError> {
    let mut out = String::with_capacity(uri.len());
    let mut last = 0;
    for (span, name, optional) in placeholders(uri) {
        out.push_str(&uri[last..span.start]);
        last = span.end;
        match parameters.get(name).filter(|value| !value.is_empty()) {
            Some(value) => out.extend(utf8_percent_encode(value, SEGMENT)),
            None if optional => {}
            None => {
                return Err(EndpointError::UnresolvableRoute {
                    uri: uri.to_string(),
                    parameter: name.to_string(),
                })
            }
        }
    }
    out.push_str(&uri[last..]);
    Ok(out
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/"))
}

/// In-memory route registry. Routes keep registration order.
#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    base_url: String,
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn new(base_url: impl Into<String>) -> Self {
        RouteTable {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            routes: Vec::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn route(&mut self, method: Method, uri: &str, handler: HandlerRef) -> &mut Self {
        let (parameter_names, optional_parameters) = parse_parameters(uri);
        tracing::debug!(method = %method, uri = %uri, handler = %handler, "route registered");
        self.routes.push(RouteDescriptor {
            method,
            uri: uri.trim_start_matches('/').to_string(),
            parameter_names,
            optional_parameters,
            handler,
        });
        self
    }

    pub fn get(&mut self, uri: &str, handler: HandlerRef) -> &mut Self {
        self.route(Method::GET, uri, handler)
    }

    pub fn post(&mut self, uri: &str, handler: HandlerRef) -> &mut Self {
        self.route(Method::POST, uri, handler)
    }

    pub fn put(&mut self, uri: &str, handler: HandlerRef) -> &mut Self {
        self.route(Method::PUT, uri, handler)
    }

    pub fn patch(&mut self, uri: &str, handler: HandlerRef) -> &mut Self {
        self.route(Method::PATCH, uri, handler)
    }

    pub fn delete(&mut self, uri: &str, handler: HandlerRef) -> &mut Self {
        self.route(Method::DELETE, uri, handler)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteRegistry for RouteTable {
    fn routes_for(&self, target: &HandlerTarget) -> Vec<RouteDescriptor> {
        self.routes
            .iter()
            .filter(|route| target.matches(&route.handler))
            .cloned()
            .collect()
    }

    fn url_for(
        &self,
        route: &RouteDescriptor,
        parameters: &HashMap<String, String>,
    ) -> Result<String, EndpointError> {
        let path = fill_template(&route.uri, parameters)?;
        Ok(if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        })
    }
}
