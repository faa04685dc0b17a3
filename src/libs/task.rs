use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub user_id: i64,
    pub created_at: Option<String>,
}

/// Fields supplied when creating a task; the store assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub user_id: i64,
}

impl NewTask {
    pub fn new(title: &str, description: &str, due_date: &str, user_id: i64) -> Self {
        NewTask {
            title: title.to_string(),
            description: description.to_string(),
            due_date: due_date.to_string(),
            user_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TaskFilter {
    #[default]
    All,
    Today,
    Upcoming,
    Overdue,
}
