mod common;

use axum::response::IntoResponse;
use common::{action, invokable, router, url, TestModel, TEST_CONTROLLER, TEST_INVOKABLE_CONTROLLER};
use endpoint_resources::{
    resource_many, resource_one, resource_one_merged, EndpointError, EndpointResource, Entity,
    HandlerGroup, Resolver, RouteKey,
};
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::{json, Value};

impl EndpointResource for TestModel {
    fn declare_endpoints(group: &mut HandlerGroup) {
        group.controller(TEST_CONTROLLER);
    }
}

#[derive(Serialize)]
struct InvokableModel {
    id: i64,
}

impl Entity for InvokableModel {
    fn route_key(&self) -> RouteKey {
        self.id.into()
    }

    fn route_parameter_name(&self) -> String {
        "testModel".into()
    }
}

impl EndpointResource for InvokableModel {
    fn declare_endpoints(group: &mut HandlerGroup) {
        group.controller(TEST_INVOKABLE_CONTROLLER);
    }
}

fn resolver() -> Resolver {
    let mut routes = router();
    routes.get("/index", action("index")).get("/show/{id}", action("show"));
    Resolver::new(routes)
}

fn body_json<T: Serialize>(body: &T) -> Value {
    serde_json::to_value(body).unwrap()
}

#[test]
fn it_will_generate_endpoints_when_making_a_resource() {
    let model = TestModel::new(1, "testModel");
    let (_, body) = resource_one(&resolver(), &model).unwrap();

    assert_eq!(
        body_json(&body.0),
        json!({
            "data": {
                "id": 1,
                "name": "testModel",
                "endpoints": {
                    "show": {"method": "GET", "action": url("show/1")}
                }
            },
            "meta": {
                "endpoints": {
                    "index": {"method": "GET", "action": url("index")}
                }
            }
        })
    );
}

#[test]
fn it_will_generate_endpoints_when_collecting_a_resource() {
    let models = vec![TestModel::new(1, "testModel")];
    let (_, body) = resource_many(&resolver(), &models).unwrap();

    assert_eq!(
        body_json(&body.0),
        json!({
            "data": [{
                "id": 1,
                "name": "testModel",
                "endpoints": {
                    "show": {"method": "GET", "action": url("show/1")}
                }
            }],
            "meta": {
                "endpoints": {
                    "index": {"method": "GET", "action": url("index")}
                }
            }
        })
    );
}

#[test]
fn it_can_merge_collection_endpoints_with_item_endpoints() {
    let model = TestModel::new(1, "testModel");
    let (_, body) = resource_one_merged(&resolver(), &model).unwrap();

    assert_eq!(
        body_json(&body.0),
        json!({
            "data": {
                "id": 1,
                "name": "testModel",
                "endpoints": {
                    "show": {"method": "GET", "action": url("show/1")},
                    "index": {"method": "GET", "action": url("index")}
                }
            },
            "meta": {}
        })
    );
}

#[test]
fn it_can_use_invokable_controllers_when_creating_endpoints() {
    let mut routes = router();
    routes.get("/show/{testModel}", invokable());
    let resolver = Resolver::new(routes);

    let (_, body) = resource_one(&resolver, &InvokableModel { id: 1 }).unwrap();

    assert_eq!(
        body_json(&body.0),
        json!({
            "data": {
                "id": 1,
                "endpoints": {
                    "invoke": {"method": "GET", "action": url("show/1")}
                }
            },
            "meta": {"endpoints": {}}
        })
    );
}

#[test]
fn it_will_generate_endpoints_using_endpoint_groups() {
    let mut routes = router();
    routes
        .get("/index", action("index"))
        .get("/show/{id}", action("show"))
        .get("/invoke/{testModel}", invokable());
    let resolver = Resolver::new(routes);
    let model = TestModel::new(1, "testModel");

    let local = resolver
        .endpoints_with(
            |endpoints| {
                endpoints.controller(TEST_CONTROLLER);
                endpoints.controller(TEST_INVOKABLE_CONTROLLER).name("invoke");
            },
            &model,
        )
        .into_map()
        .unwrap();
    let collection = resolver
        .collection_endpoints_with(|endpoints| {
            endpoints.controller(TEST_CONTROLLER);
            endpoints.action(action("index")).name("action");
        })
        .unwrap();

    assert_eq!(
        local.to_json(),
        json!({
            "show": {"method": "GET", "action": url("show/1")},
            "invoke": {"method": "GET", "action": url("invoke/1")}
        })
    );
    assert_eq!(
        collection.to_json(),
        json!({
            "index": {"method": "GET", "action": url("index")},
            "action": {"method": "GET", "action": url("index")}
        })
    );
}

#[tokio::test]
async fn resource_renders_as_json_response() {
    let model = TestModel::new(1, "testModel");
    let response = resource_one(&resolver(), &model).unwrap().into_response();
    assert_eq!(response.status(), axum::http::StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"]["endpoints"]["show"]["action"], json!(url("show/1")));
}

#[tokio::test]
async fn unresolvable_route_renders_error_body() {
    let mut routes = router();
    routes.get("/show/{id}/{revision}", action("show"));
    let resolver = Resolver::new(routes);

    let err = resource_one(&resolver, &TestModel::new(1, "testModel")).unwrap_err();
    assert!(matches!(err, EndpointError::UnresolvableRoute { .. }));

    let response = err.into_response();
    assert_eq!(response.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], json!("unresolvable_route"));
    assert_eq!(body["error"]["details"]["parameter"], json!("revision"));
}
