//! Shared fixtures: a test model, controller handler references and a route table.

#![allow(dead_code)]

use endpoint_resources::{Entity, HandlerRef, RouteKey, RouteTable};
use serde::Serialize;

pub const BASE_URL: &str = "http://localhost";
pub const TEST_CONTROLLER: &str = "TestController";
pub const TEST_INVOKABLE_CONTROLLER: &str = "TestInvokableController";

#[derive(Clone, Debug, Serialize)]
pub struct TestModel {
    pub id: i64,
    pub name: String,
}

impl TestModel {
    pub fn new(id: i64, name: &str) -> Self {
        TestModel {
            id,
            name: name.to_string(),
        }
    }
}

impl Entity for TestModel {
    fn route_key(&self) -> RouteKey {
        self.id.into()
    }
}

pub fn action(method: &str) -> HandlerRef {
    HandlerRef::method(TEST_CONTROLLER, method)
}

pub fn invokable() -> HandlerRef {
    HandlerRef::invokable(TEST_INVOKABLE_CONTROLLER)
}

pub fn router() -> RouteTable {
    RouteTable::new(BASE_URL)
}

pub fn url(path: &str) -> String {
    if path.is_empty() {
        BASE_URL.to_string()
    } else {
        format!("{}/{}", BASE_URL, path)
    }
}
