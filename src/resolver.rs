//! Entry point for serialization code: endpoints for one entity or for a collection.

use crate::config::EndpointsConfig;
use crate::endpoint::EndpointMap;
use crate::entity::Entity;
use crate::error::EndpointError;
use crate::formatter::FormatterKind;
use crate::handler::{HandlerGroup, HandlerType};
use crate::route::{HandlerRef, RouteRegistry};
use std::cell::OnceCell;
use std::sync::Arc;

/// What to resolve: one handler or a whole group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EndpointSource {
    Handler(HandlerType),
    Group(HandlerGroup),
}

impl EndpointSource {
    fn into_group(self) -> HandlerGroup {
        match self {
            EndpointSource::Handler(handler) => HandlerGroup::from(handler),
            EndpointSource::Group(group) => group,
        }
    }
}

impl From<&str> for EndpointSource {
    fn from(class: &str) -> Self {
        EndpointSource::Handler(HandlerType::controller(class))
    }
}

impl From<String> for EndpointSource {
    fn from(class: String) -> Self {
        EndpointSource::Handler(HandlerType::controller(class))
    }
}

impl From<HandlerRef> for EndpointSource {
    fn from(handler: HandlerRef) -> Self {
        EndpointSource::Handler(HandlerType::action(handler))
    }
}

impl From<HandlerType> for EndpointSource {
    fn from(handler: HandlerType) -> Self {
        EndpointSource::Handler(handler)
    }
}

impl From<&mut HandlerType> for EndpointSource {
    fn from(handler: &mut HandlerType) -> Self {
        EndpointSource::Handler(handler.clone())
    }
}

impl From<HandlerGroup> for EndpointSource {
    fn from(group: HandlerGroup) -> Self {
        EndpointSource::Group(group)
    }
}

/// Resolves endpoint maps against an injected route registry. Cheap to clone.
#[derive(Clone)]
pub struct Resolver {
    registry: Arc<dyn RouteRegistry>,
    formatter: FormatterKind,
}

impl Resolver {
    pub fn new(registry: impl RouteRegistry + 'static) -> Self {
        Self::from_arc(Arc::new(registry))
    }

    pub fn from_arc(registry: Arc<dyn RouteRegistry>) -> Self {
        Resolver {
            registry,
            formatter: FormatterKind::default(),
        }
    }

    /// Resolver whose handlers default to the configured formatter.
    pub fn from_config(config: &EndpointsConfig, registry: impl RouteRegistry + 'static) -> Self {
        Self::new(registry).with_formatter(config.formatter)
    }

    pub fn with_formatter(mut self, formatter: FormatterKind) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn registry(&self) -> &dyn RouteRegistry {
        self.registry.as_ref()
    }

    /// Local endpoints for `entity`, resolved on first read.
    pub fn endpoints<'a>(
        &'a self,
        source: impl Into<EndpointSource>,
        entity: &'a dyn Entity,
    ) -> EndpointCollection<'a> {
        EndpointCollection {
            resolver: self,
            group: self.group(source.into()),
            entity,
            local: OnceCell::new(),
        }
    }

    /// Like [`endpoints`](Self::endpoints), with handlers declared on a fresh group.
    pub fn endpoints_with<'a, F>(&'a self, declare: F, entity: &'a dyn Entity) -> EndpointCollection<'a>
    where
        F: FnOnce(&mut HandlerGroup),
    {
        self.endpoints(declared(declare), entity)
    }

    /// Endpoints that need no entity (index, store, ...).
    pub fn collection_endpoints(
        &self,
        source: impl Into<EndpointSource>,
    ) -> Result<EndpointMap, EndpointError> {
        self.group(source.into())
            .get_collection_endpoints(self.registry())
    }

    pub fn collection_endpoints_with<F>(&self, declare: F) -> Result<EndpointMap, EndpointError>
    where
        F: FnOnce(&mut HandlerGroup),
    {
        self.collection_endpoints(declared(declare))
    }

    fn group(&self, source: EndpointSource) -> HandlerGroup {
        source.into_group().or_formatter(self.formatter)
    }
}

fn declared<F: FnOnce(&mut HandlerGroup)>(declare: F) -> HandlerGroup {
    let mut group = HandlerGroup::new();
    declare(&mut group);
    group
}

/// Endpoints bound to one entity.
pub struct EndpointCollection<'a> {
    resolver: &'a Resolver,
    group: HandlerGroup,
    entity: &'a dyn Entity,
    local: OnceCell<EndpointMap>,
}

impl<'a> EndpointCollection<'a> {
    pub fn group(&self) -> &HandlerGroup {
        &self.group
    }

    /// Local endpoints; resolved once, then served from this collection.
    pub fn get_endpoints(&self) -> Result<&EndpointMap, EndpointError> {
        if let Some(local) = self.local.get() {
            return Ok(local);
        }
        let local = self
            .group
            .get_endpoints(self.resolver.registry(), self.entity)?;
        Ok(self.local.get_or_init(|| local))
    }

    pub fn get_collection_endpoints(&self) -> Result<EndpointMap, EndpointError> {
        self.group.get_collection_endpoints(self.resolver.registry())
    }

    /// Collection endpoints overlaid with local ones; local wins on name collision.
    pub fn merge_collection_endpoints(&self) -> Result<EndpointMap, EndpointError> {
        let local = self.get_endpoints()?.clone();
        Ok(self.get_collection_endpoints()?.merged(local))
    }

    /// Consume into the local endpoint map.
    pub fn into_map(self) -> Result<EndpointMap, EndpointError> {
        self.get_endpoints()?;
        Ok(self.local.into_inner().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::RouteKey;
    use crate::route::RouteTable;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    struct Comment {
        id: i64,
    }

    impl Entity for Comment {
        fn route_key(&self) -> RouteKey {
            self.id.into()
        }
    }

    fn resolver() -> Resolver {
        let mut table = RouteTable::new("http://localhost");
        table
            .get("comments", HandlerRef::method("CommentController", "index"))
            .get("comments/{comment}", HandlerRef::method("CommentController", "show"));
        Resolver::new(table)
    }

    #[test]
    fn single_class_source_is_an_implicit_group() {
        let resolver = resolver();
        let comment = Comment { id: 1 };
        let collection = resolver.endpoints("CommentController", &comment);
        assert_eq!(collection.group().len(), 1);
        assert_eq!(
            collection.get_endpoints().unwrap().to_json(),
            json!({"show": {"method": "GET", "action": "http://localhost/comments/1"}})
        );
    }

    #[test]
    fn resolver_formatter_reaches_implicit_groups() {
        let resolver = resolver().with_formatter(FormatterKind::Layered);
        let endpoints = resolver.collection_endpoints("CommentController").unwrap();
        assert_eq!(
            endpoints.to_json(),
            json!({"comment_controller": {"index": {"method": "GET", "action": "http://localhost/comments"}}})
        );
    }

    #[test]
    fn into_map_returns_local_endpoints() {
        let resolver = resolver();
        let comment = Comment { id: 4 };
        let map = resolver
            .endpoints_with(|group| {
                group.controller("CommentController").names([("show", "view")]);
            }, &comment)
            .into_map()
            .unwrap();
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["view"]);
    }
}
