//! Domain types, validation, session handling and console rendering.
//!
//! ```rust,no_run
//! use taskdesk::db::{db::Db, tasks::Tasks, users::Users};
//! use taskdesk::libs::{task::NewTask, user::Role};
//!
//! let db = Db::open_in_memory()?;
//! let owner = Users::new(&db).create("Ana", "ana@school.edu", "secret1", Role::Student)?;
//! Tasks::new(&db).create(&NewTask::new("Essay", "", "2026-10-20T09:00:00.000Z", owner))?;
//! # Ok::<(), taskdesk::libs::error::Error>(())
//! ```

pub mod classifier;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod secret;
pub mod session;
pub mod task;
pub mod user;
pub mod validation;
pub mod view;
