//! Task repository.
//!
//! Every operation is a single statement, so a failure never leaves partial
//! state behind. Listings are ordered by due date, then id; stored due dates
//! share one fixed-width UTC encoding, which makes the text order chronological.

use super::db::Db;
use crate::libs::error::{constraint_of, Constraint, Error, Result};
use crate::libs::task::{NewTask, Task};
use rusqlite::{params, Row};
use tracing::debug;

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, dueDate, userId) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TASKS: &str = "SELECT id, title, description, dueDate, userId, createdAt FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_USER: &str = "WHERE userId = ?1";
const ORDER_BY_DUE: &str = "ORDER BY dueDate ASC, id ASC";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, dueDate = ?4, userId = ?5 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        due_date: row.get(3)?,
        user_id: row.get(4)?,
        created_at: row.get(5)?,
    })
}

/// Maps a failed write against an owner id onto the error taxonomy.
fn owner_error(e: rusqlite::Error, user_id: i64) -> Error {
    match constraint_of(&e) {
        Some(Constraint::ForeignKey) => Error::ForeignKeyViolation(user_id),
        _ => Error::Store(e),
    }
}

pub struct Tasks<'a> {
    db: &'a Db,
}

impl<'a> Tasks<'a> {
    pub fn new(db: &'a Db) -> Self {
        Tasks { db }
    }

    /// Inserts a task and returns its id.
    ///
    /// Fails with [`Error::MissingOwner`] before touching the store when
    /// `user_id` is not positive.
    pub fn create(&self, task: &NewTask) -> Result<i64> {
        if task.user_id <= 0 {
            return Err(Error::MissingOwner);
        }

        let executed = self
            .db
            .execute(INSERT_TASK, params![task.title, task.description, task.due_date, task.user_id])
            .map_err(|e| owner_error(e, task.user_id))?;

        debug!(task_id = executed.inserted_id, user_id = task.user_id, due = %task.due_date, "task created");
        Ok(executed.inserted_id)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        let sql = format!("{} {}", SELECT_TASKS, WHERE_ID);
        Ok(self.db.query_row(&sql, params![id], task_from_row)?)
    }

    /// Tasks ordered by due date, limited to one owner when `user_id` is given.
    pub fn list(&self, user_id: Option<i64>) -> Result<Vec<Task>> {
        let tasks = match user_id {
            Some(user_id) => {
                let sql = format!("{} {} {}", SELECT_TASKS, WHERE_USER, ORDER_BY_DUE);
                self.db.query(&sql, params![user_id], task_from_row)?
            }
            None => {
                let sql = format!("{} {}", SELECT_TASKS, ORDER_BY_DUE);
                self.db.query(&sql, [], task_from_row)?
            }
        };

        Ok(tasks)
    }

    /// Replaces title, description, due date and owner. Returns whether a row matched.
    pub fn update(&self, task: &Task) -> Result<bool> {
        if task.user_id <= 0 {
            return Err(Error::MissingOwner);
        }

        let executed = self
            .db
            .execute(UPDATE_TASK, params![task.id, task.title, task.description, task.due_date, task.user_id])
            .map_err(|e| owner_error(e, task.user_id))?;

        debug!(task_id = task.id, changed = executed.rows_affected, "task update");
        Ok(executed.rows_affected > 0)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let executed = self.db.execute(DELETE_TASK, params![id])?;
        debug!(task_id = id, removed = executed.rows_affected, "task delete");
        Ok(executed.rows_affected > 0)
    }
}
