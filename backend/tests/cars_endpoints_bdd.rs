//! Behavioural tests for the cars endpoints.
//!
//! Each request builds the full route set over the scenario's shared state,
//! so state persists across steps while the service is rebuilt per call.

use std::cell::RefCell;
use std::sync::Arc;

use actix_web::http::header::{self, HeaderMap};
use actix_web::http::Method;
use actix_web::{App, test as actix_test, web};
use async_trait::async_trait;
use cars_backend::Trace;
use cars_backend::domain::ports::{ConnectionTestError, ConnectionTester};
use cars_backend::domain::{CarsService, StatusService, TRACE_ID_HEADER};
use cars_backend::inbound::http::configure;
use cars_backend::inbound::http::state::HttpState;
use cars_backend::outbound::memory::{InMemoryCarRepository, fixture_cars};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

struct DownProbe;

#[async_trait]
impl ConnectionTester for DownProbe {
    fn name(&self) -> &'static str {
        "database"
    }

    async fn test_connection(&self) -> Result<(), ConnectionTestError> {
        Err(ConnectionTestError::unreachable("connection refused"))
    }
}

struct Snapshot {
    status: u16,
    headers: HeaderMap,
    body: Option<Value>,
}

struct CarsWorld {
    runtime: Runtime,
    local: LocalSet,
    state: RefCell<HttpState>,
    last: RefCell<Option<Snapshot>>,
}

fn state_over(repository: InMemoryCarRepository) -> HttpState {
    let service = Arc::new(CarsService::new(Arc::new(repository)));
    HttpState::new(service.clone(), service, Arc::new(StatusService::default()))
}

impl CarsWorld {
    fn new() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        Self {
            runtime,
            local: LocalSet::new(),
            state: RefCell::new(state_over(InMemoryCarRepository::default())),
            last: RefCell::new(None),
        }
    }

    fn use_repository(&self, repository: InMemoryCarRepository) {
        *self.state.borrow_mut() = state_over(repository);
    }

    fn send(&self, request: actix_test::TestRequest) {
        let state = self.state.borrow().clone();
        let snapshot = self.local.block_on(&self.runtime, async move {
            let app = actix_test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .wrap(Trace)
                    .configure(configure),
            )
            .await;
            let res = actix_test::call_service(&app, request.to_request()).await;
            let status = res.status().as_u16();
            let headers = res.headers().clone();
            let bytes = actix_test::read_body(res).await;
            let body = (!bytes.is_empty())
                .then(|| serde_json::from_slice(&bytes).expect("JSON body"));
            Snapshot {
                status,
                headers,
                body,
            }
        });
        *self.last.borrow_mut() = Some(snapshot);
    }

    fn with_last<R>(&self, f: impl FnOnce(&Snapshot) -> R) -> R {
        let last = self.last.borrow();
        f(last.as_ref().expect("a request was sent"))
    }

    fn body_field(&self, field: &str) -> Value {
        self.with_last(|snapshot| {
            snapshot
                .body
                .as_ref()
                .and_then(|body| body.get(field))
                .cloned()
                .unwrap_or(Value::Null)
        })
    }
}

#[fixture]
fn world() -> CarsWorld {
    CarsWorld::new()
}

#[given("a car store seeded with the sample cars")]
fn a_car_store_seeded_with_the_sample_cars(world: &CarsWorld) {
    world.use_repository(InMemoryCarRepository::with_cars(fixture_cars()));
}

#[given("an empty car store")]
fn an_empty_car_store(world: &CarsWorld) {
    world.use_repository(InMemoryCarRepository::default());
}

#[given("the database probe is failing")]
fn the_database_probe_is_failing(world: &CarsWorld) {
    let probe: Arc<dyn ConnectionTester> = Arc::new(DownProbe);
    world.state.borrow_mut().status = Arc::new(StatusService::new(vec![probe]));
}

#[when("the client requests \"{path}\"")]
fn the_client_requests(world: &CarsWorld, path: String) {
    world.send(actix_test::TestRequest::get().uri(&path));
}

#[when("the client asks which methods \"{path}\" allows")]
fn the_client_asks_which_methods_are_allowed(world: &CarsWorld, path: String) {
    world.send(
        actix_test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri(&path),
    );
}

#[when("the client posts a car with {cylinders} cylinders made by \"{make}\" named \"{model}\"")]
fn the_client_posts_a_car(world: &CarsWorld, cylinders: i64, make: String, model: String) {
    world.send(
        actix_test::TestRequest::post()
            .uri("/cars")
            .set_json(json!({"cylinders": cylinders, "make": make, "model": model})),
    );
}

#[when("the client patches car {id} replacing the model with \"{model}\"")]
fn the_client_patches_the_model(world: &CarsWorld, id: i32, model: String) {
    let patch = json!([{"op": "replace", "path": "/model", "value": model}]);
    world.send(
        actix_test::TestRequest::patch()
            .uri(&format!("/cars/{id}"))
            .insert_header((header::CONTENT_TYPE, "application/json-patch+json"))
            .set_payload(patch.to_string()),
    );
}

#[when("the client deletes car {id}")]
fn the_client_deletes_car(world: &CarsWorld, id: i32) {
    world.send(actix_test::TestRequest::delete().uri(&format!("/cars/{id}")));
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &CarsWorld, status: u16) {
    world.with_last(|snapshot| assert_eq!(snapshot.status, status));
}

#[then("the response field \"{field}\" is \"{value}\"")]
fn the_response_field_is(world: &CarsWorld, field: String, value: String) {
    assert_eq!(world.body_field(&field), Value::String(value));
}

#[then("the error code is \"{code}\"")]
fn the_error_code_is(world: &CarsWorld, code: String) {
    assert_eq!(world.body_field("code"), Value::String(code));
}

#[then("the response header \"{name}\" is \"{value}\"")]
fn the_response_header_is(world: &CarsWorld, name: String, value: String) {
    world.with_last(|snapshot| {
        let actual = snapshot
            .headers
            .get(name.as_str())
            .and_then(|header| header.to_str().ok());
        assert_eq!(actual, Some(value.as_str()));
    });
}

#[then("the response carries a trace id")]
fn the_response_carries_a_trace_id(world: &CarsWorld) {
    world.with_last(|snapshot| {
        assert!(snapshot.headers.contains_key(TRACE_ID_HEADER));
    });
}

#[then("the page lists {count} cars")]
fn the_page_lists_cars(world: &CarsWorld, count: usize) {
    let items = world.body_field("items");
    assert_eq!(items.as_array().map(Vec::len), Some(count));
}

#[scenario(path = "tests/features/cars_endpoints.feature", name = "Fetching a stored car")]
fn fetching_a_stored_car(world: CarsWorld) {
    drop(world);
}

#[scenario(path = "tests/features/cars_endpoints.feature", name = "Fetching an unknown car")]
fn fetching_an_unknown_car(world: CarsWorld) {
    drop(world);
}

#[scenario(path = "tests/features/cars_endpoints.feature", name = "Creating a car")]
fn creating_a_car(world: CarsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/cars_endpoints.feature",
    name = "Rejecting a car with too many cylinders"
)]
fn rejecting_a_car_with_too_many_cylinders(world: CarsWorld) {
    drop(world);
}

#[scenario(path = "tests/features/cars_endpoints.feature", name = "Patching a car's model")]
fn patching_a_cars_model(world: CarsWorld) {
    drop(world);
}

#[scenario(path = "tests/features/cars_endpoints.feature", name = "Deleting a car twice")]
fn deleting_a_car_twice(world: CarsWorld) {
    drop(world);
}

#[scenario(path = "tests/features/cars_endpoints.feature", name = "Listing a page of cars")]
fn listing_a_page_of_cars(world: CarsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/cars_endpoints.feature",
    name = "Requesting a page past the end"
)]
fn requesting_a_page_past_the_end(world: CarsWorld) {
    drop(world);
}

#[scenario(path = "tests/features/cars_endpoints.feature", name = "Listing an empty store")]
fn listing_an_empty_store(world: CarsWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/cars_endpoints.feature",
    name = "Discovering collection methods"
)]
fn discovering_collection_methods(world: CarsWorld) {
    drop(world);
}

#[scenario(path = "tests/features/cars_endpoints.feature", name = "Healthy dependencies")]
fn healthy_dependencies(world: CarsWorld) {
    drop(world);
}

#[scenario(path = "tests/features/cars_endpoints.feature", name = "Failing dependency")]
fn failing_dependency(world: CarsWorld) {
    drop(world);
}
