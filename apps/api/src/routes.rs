use axum::{middleware, routing::get, Json, Router};
use axum_helpers::errors::not_found;
use axum_helpers::health_router;
use observability::track_requests;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;

use crate::state::AppState;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(domain_tasks::handlers::ApiDoc::openapi())
}

/// Compose the full application router.
///
/// The task routes arrive with their state already applied; this function
/// adds the cross-cutting surface: liveness, metrics exposition, the OpenAPI
/// document, the 404 fallback, and the request-tracking middleware that wraps
/// every route.
pub fn app(state: AppState, task_routes: Router) -> Router {
    let metrics_routes = Router::new()
        .route("/metrics", get(observability::metrics_handler))
        .with_state(state.metrics.clone());

    Router::new()
        .nest("/tasks", task_routes)
        .merge(health_router())
        .merge(metrics_routes)
        .route("/api-docs/openapi.json", get(openapi))
        .fallback(not_found)
        .layer(middleware::from_fn(track_requests))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use domain_tasks::{handlers, InMemoryTaskRepository, TaskService};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = AppState {
            metrics: observability::init_metrics().clone(),
        };
        let service = TaskService::new(InMemoryTaskRepository::new());
        app(state, handlers::router(service))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    /// Sum the rendered counter value across every series labeled with the
    /// /tasks endpoint and the POST method.
    fn post_tasks_counter(exposition: &str) -> f64 {
        exposition
            .lines()
            .filter(|line| {
                line.starts_with(observability::REQUEST_COUNTER)
                    && line.contains(r#"endpoint="/tasks"#)
                    && line.contains(r#"method="POST""#)
            })
            .filter_map(|line| line.rsplit(' ').next())
            .filter_map(|value| value.parse::<f64>().ok())
            .sum()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let response = test_app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_metrics_counter_increases_by_one_per_task_request() {
        let app = test_app();

        // The recorder is process-global and shared across tests, so assert
        // on the delta rather than an absolute value
        let before = post_tasks_counter(&observability::init_metrics().render());

        for i in 0..5 {
            let request = Request::builder()
                .method("POST")
                .uri("/tasks")
                .header("content-type", "application/json")
                .body(Body::from(format!(
                    r#"{{"title":"task-{i}","start_date":"2024-01-01"}}"#
                )))
                .unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let exposition = body_string(response).await;
        let after = post_tasks_counter(&exposition);
        assert_eq!(after - before, 5.0);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("\"openapi\""));
    }
}
