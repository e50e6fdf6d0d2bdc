use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Task entity - a single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier, assigned by the storage layer at insertion
    pub id: i32,
    /// Task title
    pub title: String,
    /// Date the task starts
    pub start_date: Option<NaiveDate>,
    /// Date the task is due to end
    pub end_date: Option<NaiveDate>,
    /// Whether the task is done
    pub completed: bool,
}

/// DTO for creating a new task
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    #[validate(length(min = 1))]
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
}
