use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{ErrorResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TaskResult;
use crate::models::{CreateTask, Task};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// OpenAPI documentation for the Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(list_tasks, create_task),
    components(schemas(Task, CreateTask, ErrorResponse)),
    tags(
        (name = "tasks", description = "Task tracking endpoints")
    )
)]
pub struct ApiDoc;

/// Create the task router with all HTTP endpoints
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .with_state(shared_service)
}

/// List all tasks
#[utoipa::path(
    get,
    path = "",
    tag = "tasks",
    responses(
        (status = 200, description = "All tasks, ordered by id", body = Vec<Task>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
) -> TaskResult<Json<Vec<Task>>> {
    let tasks = service.list_tasks().await?;
    Ok(Json(tasks))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "",
    tag = "tasks",
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created successfully", body = Task),
        (status = 422, description = "Validation failure", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> TaskResult<impl IntoResponse> {
    let task = service.create_task(input).await?;

    Ok((StatusCode::CREATED, Json(task)))
}
