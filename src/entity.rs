//! Entity binding: which route parameter denotes "this entity" and what value it takes.

use crate::case::{short_type_name, to_camel_case};
use crate::route::RouteDescriptor;
use std::collections::HashMap;
use std::fmt;

/// Route-binding value of an entity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RouteKey {
    Int(i64),
    Uuid(uuid::Uuid),
    Text(String),
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteKey::Int(n) => write!(f, "{}", n),
            RouteKey::Uuid(u) => write!(f, "{}", u),
            RouteKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RouteKey {
    fn from(n: i64) -> Self {
        RouteKey::Int(n)
    }
}

impl From<i32> for RouteKey {
    fn from(n: i32) -> Self {
        RouteKey::Int(n.into())
    }
}

impl From<uuid::Uuid> for RouteKey {
    fn from(u: uuid::Uuid) -> Self {
        RouteKey::Uuid(u)
    }
}

impl From<String> for RouteKey {
    fn from(s: String) -> Self {
        RouteKey::Text(s)
    }
}

impl From<&str> for RouteKey {
    fn from(s: &str) -> Self {
        RouteKey::Text(s.to_string())
    }
}

/// A data entity endpoints can be resolved for.
pub trait Entity {
    /// Value bound into the entity's route parameter (conventionally its id).
    fn route_key(&self) -> RouteKey;

    /// Name of the key column; routes such as `/posts/{id}` bind through it.
    fn route_key_name(&self) -> &str {
        "id"
    }

    /// Parameter name derived from the type, e.g. `BlogPost` -> `blogPost`.
    fn route_parameter_name(&self) -> String {
        to_camel_case(short_type_name(std::any::type_name::<Self>()))
    }
}

/// Glue between routes and entities.
pub struct EntityBinder;

impl EntityBinder {
    /// The route parameter that denotes the entity: its type-derived name, else its key name.
    pub fn binding_parameter<E: Entity + ?Sized>(route: &RouteDescriptor, entity: &E) -> Option<String> {
        let parameter = entity.route_parameter_name();
        if route.has_parameter(&parameter) {
            return Some(parameter);
        }
        let key_name = entity.route_key_name();
        route.has_parameter(key_name).then(|| key_name.to_string())
    }

    /// A route is local to the entity when one of its parameters names the entity.
    pub fn is_local<E: Entity + ?Sized>(route: &RouteDescriptor, entity: &E) -> bool {
        Self::binding_parameter(route, entity).is_some()
    }

    /// Bound parameters for the route: the entity's key under the parameter that names it.
    /// In `{post}/comments/{id}` the `id` belongs to the nested record and stays unbound.
    pub fn parameters<E: Entity + ?Sized>(route: &RouteDescriptor, entity: &E) -> HashMap<String, String> {
        Self::binding_parameter(route, entity)
            .map(|name| (name, entity.route_key().to_string()))
            .into_iter()
            .collect()
    }
}
