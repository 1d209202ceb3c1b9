//! Dependency status endpoint.

use actix_web::{HttpResponse, get, http::header, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Report whether every registered dependency answers.
#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = 204, description = "All dependencies reachable"),
        (status = 503, description = "A dependency is unreachable", body = ErrorSchema)
    ),
    tags = ["status"],
    operation_id = "status"
)]
#[get("/status")]
pub async fn status(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    state.status.check().await?;
    Ok(HttpResponse::NoContent()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{ConnectionTestError, ConnectionTester, MockConnectionTester};
    use crate::domain::{CarsService, StatusService};
    use crate::outbound::memory::InMemoryCarRepository;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;

    fn probe(name: &'static str, healthy: bool) -> Arc<dyn ConnectionTester> {
        let mut tester = MockConnectionTester::new();
        tester.expect_name().return_const(name);
        tester.expect_test_connection().returning(move || {
            if healthy {
                Ok(())
            } else {
                Err(ConnectionTestError::unreachable("refused"))
            }
        });
        Arc::new(tester)
    }

    fn state(testers: Vec<Arc<dyn ConnectionTester>>) -> HttpState {
        let cars = Arc::new(CarsService::new(Arc::new(InMemoryCarRepository::default())));
        HttpState::new(cars.clone(), cars, Arc::new(StatusService::new(testers)))
    }

    #[rstest]
    #[case(vec![true, true, true], StatusCode::NO_CONTENT)]
    #[case(vec![true, false, true], StatusCode::SERVICE_UNAVAILABLE)]
    #[actix_web::test]
    async fn status_reflects_probes(#[case] health: Vec<bool>, #[case] expected: StatusCode) {
        let names = ["postgres", "cache", "queue"];
        let testers = names
            .into_iter()
            .zip(health)
            .map(|(name, healthy)| probe(name, healthy))
            .collect();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(testers)))
                .service(status),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/status").to_request())
            .await;
        assert_eq!(res.status(), expected);
    }
}
