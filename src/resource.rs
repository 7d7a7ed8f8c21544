//! Resource envelope helpers: entity payloads with their endpoints attached.
//!
//! Single entities render as `{"data": {...fields, "endpoints": {...}}, "meta": {"endpoints": {...}}}`
//! where `meta.endpoints` holds the collection endpoints. Collections render `data` as an array.

use crate::endpoint::EndpointMap;
use crate::entity::Entity;
use crate::error::EndpointError;
use crate::handler::HandlerGroup;
use crate::resolver::Resolver;
use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::{Map, Value};

pub const ENDPOINTS_KEY: &str = "endpoints";

/// An entity that declares which handlers serve it.
pub trait EndpointResource: Entity + Serialize {
    fn declare_endpoints(group: &mut HandlerGroup);
}

#[derive(Serialize, Debug)]
pub struct ResourceBody {
    pub data: Value,
    pub meta: Map<String, Value>,
}

fn with_endpoints<T: Serialize>(item: &T, endpoints: &EndpointMap) -> Result<Value, EndpointError> {
    let mut object = match serde_json::to_value(item)? {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("value".into(), other);
            map
        }
    };
    object.insert(ENDPOINTS_KEY.into(), serde_json::to_value(endpoints)?);
    Ok(Value::Object(object))
}

fn endpoints_meta(endpoints: &EndpointMap) -> Result<Map<String, Value>, EndpointError> {
    let mut meta = Map::new();
    meta.insert(ENDPOINTS_KEY.into(), serde_json::to_value(endpoints)?);
    Ok(meta)
}

/// One entity with local endpoints in `data` and collection endpoints in `meta`.
pub fn resource_one<T: EndpointResource>(
    resolver: &Resolver,
    item: &T,
) -> Result<(StatusCode, Json<ResourceBody>), EndpointError> {
    let endpoints = resolver.endpoints_with(T::declare_endpoints, item);
    let data = with_endpoints(item, endpoints.get_endpoints()?)?;
    let meta = endpoints_meta(&endpoints.get_collection_endpoints()?)?;
    Ok((StatusCode::OK, Json(ResourceBody { data, meta })))
}

/// One entity with local and collection endpoints merged into `data`.
pub fn resource_one_merged<T: EndpointResource>(
    resolver: &Resolver,
    item: &T,
) -> Result<(StatusCode, Json<ResourceBody>), EndpointError> {
    let endpoints = resolver
        .endpoints_with(T::declare_endpoints, item)
        .merge_collection_endpoints()?;
    let data = with_endpoints(item, &endpoints)?;
    Ok((
        StatusCode::OK,
        Json(ResourceBody {
            data,
            meta: Map::new(),
        }),
    ))
}

/// Every entity with its local endpoints; collection endpoints once in `meta`.
pub fn resource_many<T: EndpointResource>(
    resolver: &Resolver,
    items: &[T],
) -> Result<(StatusCode, Json<ResourceBody>), EndpointError> {
    let data = items
        .iter()
        .map(|item| {
            let endpoints = resolver.endpoints_with(T::declare_endpoints, item);
            with_endpoints(item, endpoints.get_endpoints()?)
        })
        .collect::<Result<Vec<_>, EndpointError>>()?;
    let meta = endpoints_meta(&resolver.collection_endpoints_with(T::declare_endpoints)?)?;
    Ok((
        StatusCode::OK,
        Json(ResourceBody {
            data: Value::Array(data),
            meta,
        }),
    ))
}
