//! Ordered handler groups. Later members override earlier ones on name collision.

use crate::endpoint::EndpointMap;
use crate::entity::Entity;
use crate::error::EndpointError;
use crate::formatter::FormatterKind;
use crate::handler::HandlerType;
use crate::route::{HandlerRef, RouteRegistry};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HandlerGroup {
    handlers: Vec<HandlerType>,
    formatter: Option<FormatterKind>,
}

impl HandlerGroup {
    pub fn new() -> Self {
        HandlerGroup::default()
    }

    /// Formatter for members that did not pick one.
    pub fn with_formatter(mut self, formatter: FormatterKind) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Like [`with_formatter`](Self::with_formatter) but keeps an existing choice.
    pub(crate) fn or_formatter(mut self, formatter: FormatterKind) -> Self {
        self.formatter.get_or_insert(formatter);
        self
    }

    pub fn controller(&mut self, class: impl Into<String>) -> &mut HandlerType {
        self.push(HandlerType::controller(class))
    }

    pub fn action(&mut self, handler: HandlerRef) -> &mut HandlerType {
        self.push(HandlerType::action(handler))
    }

    pub fn push(&mut self, handler: HandlerType) -> &mut HandlerType {
        let index = self.handlers.len();
        self.handlers.push(handler);
        &mut self.handlers[index]
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HandlerType> {
        self.handlers.iter()
    }

    pub fn get_endpoints(
        &self,
        registry: &dyn RouteRegistry,
        entity: &dyn Entity,
    ) -> Result<EndpointMap, EndpointError> {
        self.resolve(registry, Some(entity))
    }

    pub fn get_collection_endpoints(
        &self,
        registry: &dyn RouteRegistry,
    ) -> Result<EndpointMap, EndpointError> {
        self.resolve(registry, None)
    }

    fn resolve(
        &self,
        registry: &dyn RouteRegistry,
        entity: Option<&dyn Entity>,
    ) -> Result<EndpointMap, EndpointError> {
        let fallback = self.formatter.unwrap_or_default();
        let mut merged = EndpointMap::new();
        for handler in &self.handlers {
            merged.merge(handler.resolve(registry, entity, fallback)?);
        }
        Ok(merged)
    }
}

impl From<HandlerType> for HandlerGroup {
    fn from(handler: HandlerType) -> Self {
        HandlerGroup {
            handlers: vec![handler],
            formatter: None,
        }
    }
}

impl<'a> IntoIterator for &'a HandlerGroup {
    type Item = &'a HandlerType;
    type IntoIter = std::slice::Iter<'a, HandlerType>;

    fn into_iter(self) -> Self::IntoIter {
        self.handlers.iter()
    }
}
