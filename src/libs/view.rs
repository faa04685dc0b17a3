use super::classifier::{classify, TaskCounts};
use super::formatter::format_due_date;
use super::task::Task;
use super::user::User;
use anyhow::Result;
use chrono::{DateTime, TimeZone};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks<Tz: TimeZone>(tasks: &[&Task], now: &DateTime<Tz>, date_format: &str) -> Result<()>
    where
        Tz::Offset: std::fmt::Display,
    {
        let tz = now.timezone();
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "DUE", "STATUS"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.description,
                format_due_date(&task.due_date, &tz, date_format),
                classify(&task.due_date, now).label()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn counts(counts: &TaskCounts) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ALL", "TODAY", "UPCOMING", "OVERDUE"]);
        table.add_row(row![counts.all, counts.today, counts.upcoming, counts.overdue]);
        table.printstd();

        Ok(())
    }

    /// Debug listing, passwords included as stored.
    pub fn users(users: &[User]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "EMAIL", "ROLE", "PASSWORD"]);
        for user in users {
            table.add_row(row![user.id, user.name, user.email, user.role, user.password]);
        }
        table.printstd();

        Ok(())
    }

    pub fn all_tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "USER ID", "TITLE", "DUE", "CREATED"]);
        for task in tasks {
            table.add_row(row![task.id, task.user_id, task.title, task.due_date, task.created_at.as_deref().unwrap_or("")]);
        }
        table.printstd();

        Ok(())
    }

    /// Applied schema migrations as `(version, name, applied_at)`.
    pub fn migrations(history: &[(u32, String, String)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["VERSION", "NAME", "APPLIED"]);
        for (version, name, applied_at) in history {
            table.add_row(row![version, name, applied_at]);
        }
        table.printstd();

        Ok(())
    }
}
