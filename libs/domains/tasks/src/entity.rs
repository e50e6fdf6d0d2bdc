use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the tasks table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Task
impl From<Model> for crate::models::Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            start_date: model.start_date,
            end_date: model.end_date,
            completed: model.completed,
        }
    }
}

// Explicit field-by-field mapping from the validated input to the storage
// row; the id stays NotSet so the database assigns it on insert.
impl From<crate::models::CreateTask> for ActiveModel {
    fn from(input: crate::models::CreateTask) -> Self {
        ActiveModel {
            id: NotSet,
            title: Set(input.title),
            start_date: Set(Some(input.start_date)),
            end_date: Set(input.end_date),
            completed: Set(input.completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::ActiveValue;

    #[test]
    fn test_create_task_maps_to_active_model() {
        let input = crate::models::CreateTask {
            title: "Write report".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            completed: false,
        };

        let active: ActiveModel = input.into();

        assert!(matches!(active.id, ActiveValue::NotSet));
        assert_eq!(active.title, Set("Write report".to_string()));
        assert_eq!(
            active.start_date,
            Set(NaiveDate::from_ymd_opt(2024, 1, 1))
        );
        assert_eq!(active.end_date, Set(None));
        assert_eq!(active.completed, Set(false));
    }
}
