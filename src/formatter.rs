//! Output shapes for a handler's endpoints.

use crate::endpoint::{EndpointEntry, EndpointMap};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Characters stripped from the end of a prefix when it becomes a namespace key.
pub const PREFIX_CONNECTORS: &[char] = &['-', '_', '.', '/', ':'];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    /// `{name: {method, action}}`
    #[default]
    Flat,
    /// `{namespace: {name: {method, action}}}`
    Layered,
}

impl FormatterKind {
    /// A layered handler always contributes exactly one key, even with no endpoints.
    pub fn apply(self, endpoints: EndpointMap, namespace: &str) -> EndpointMap {
        match self {
            FormatterKind::Flat => endpoints,
            FormatterKind::Layered => {
                let mut layered = EndpointMap::new();
                layered.insert(namespace, EndpointEntry::Layer(endpoints));
                layered
            }
        }
    }

    /// Whether handler-level prefixes are applied to individual endpoint names.
    pub fn prefixes_names(self) -> bool {
        matches!(self, FormatterKind::Flat)
    }
}

impl std::str::FromStr for FormatterKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" | "default" => Ok(FormatterKind::Flat),
            "layered" => Ok(FormatterKind::Layered),
            _ => Err(ConfigError::InvalidFormatter(s.to_string())),
        }
    }
}

/// Namespace key from a prefix: trailing connectors removed. None when nothing is left.
pub fn namespace_from_prefix(prefix: &str) -> Option<&str> {
    let key = prefix.trim_end_matches(PREFIX_CONNECTORS);
    (!key.is_empty()).then_some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::EndpointDescriptor;
    use serde_json::json;

    fn sample() -> EndpointMap {
        let mut map = EndpointMap::new();
        map.insert_endpoint("show", EndpointDescriptor::new("GET", "http://localhost/1"));
        map
    }

    #[test]
    fn flat_is_identity() {
        assert_eq!(FormatterKind::Flat.apply(sample(), "ignored"), sample());
    }

    #[test]
    fn layered_wraps_under_one_key() {
        let layered = FormatterKind::Layered.apply(sample(), "posts");
        assert_eq!(
            layered.to_json(),
            json!({"posts": {"show": {"method": "GET", "action": "http://localhost/1"}}})
        );
    }

    #[test]
    fn layered_empty_keeps_its_namespace() {
        let layered = FormatterKind::Layered.apply(EndpointMap::new(), "posts");
        assert_eq!(layered.len(), 1);
        assert_eq!(layered.to_json(), json!({"posts": {}}));
        assert!(FormatterKind::Flat.apply(EndpointMap::new(), "posts").is_empty());
    }

    #[test]
    fn namespace_strips_trailing_connectors() {
        assert_eq!(namespace_from_prefix("admin-"), Some("admin"));
        assert_eq!(namespace_from_prefix("filter"), Some("filter"));
        assert_eq!(namespace_from_prefix("admin._"), Some("admin"));
        assert_eq!(namespace_from_prefix("-"), None);
    }

    #[test]
    fn parses_from_config_strings() {
        assert_eq!("Layered".parse::<FormatterKind>().unwrap(), FormatterKind::Layered);
        assert_eq!("flat".parse::<FormatterKind>().unwrap(), FormatterKind::Flat);
        assert!("nested".parse::<FormatterKind>().is_err());
    }
}
