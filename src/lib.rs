//! Endpoint resources: discover which routes are reachable for an entity or a collection
//! and render them as `{name: {method, action}}` maps for API payloads.

pub mod case;
pub mod config;
pub mod endpoint;
pub mod entity;
pub mod error;
pub mod formatter;
pub mod handler;
pub mod resolver;
pub mod resource;
pub mod route;

pub use config::{validate, EndpointsConfig};
pub use endpoint::{EndpointDescriptor, EndpointEntry, EndpointMap};
pub use entity::{Entity, EntityBinder, RouteKey};
pub use error::{ConfigError, EndpointError};
pub use formatter::FormatterKind;
pub use handler::{HandlerGroup, HandlerType};
pub use resolver::{EndpointCollection, EndpointSource, Resolver};
pub use resource::{resource_many, resource_one, resource_one_merged, EndpointResource, ResourceBody};
pub use route::{HandlerRef, HandlerTarget, RouteDescriptor, RouteRegistry, RouteTable};
