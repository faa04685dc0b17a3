//! Persistence layer on top of SQLite.
//!
//! - [`db`]: connection handle and the execute/query primitives
//! - [`migrations`]: versioned, idempotent schema setup
//! - [`users`]: account rows
//! - [`tasks`]: task rows owned by users
//!
//! Repositories borrow a [`db::Db`], so several of them share one connection:
//!
//! ```rust
//! use taskdesk::db::{db::Db, tasks::Tasks, users::Users};
//! use taskdesk::libs::{task::NewTask, user::Role};
//!
//! let db = Db::open_in_memory().unwrap();
//! let alice = Users::new(&db).create("Alice", "a@x.com", "secret1", Role::Student).unwrap();
//! Tasks::new(&db).create(&NewTask::new("Essay", "", "2026-10-17T09:00:00.000Z", alice)).unwrap();
//! assert_eq!(Tasks::new(&db).list(Some(alice)).unwrap().len(), 1);
//! ```

pub mod db;
pub mod migrations;
pub mod tasks;
pub mod users;
