//! # Taskdesk
//!
//! A command-line task tracker for a school: students, teachers and admins
//! register, log in, and manage tasks bucketed by due date into today,
//! upcoming and overdue.
//!
//! Data lives in a local SQLite file. The logged-in user is kept in an
//! encrypted session file so the login survives between invocations.
//!
//! ```rust,no_run
//! use taskdesk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
