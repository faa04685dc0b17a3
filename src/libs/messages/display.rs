//! Text for every [`Message`] variant.

use super::types::Message;
use crate::libs::task::TaskFilter;
use std::fmt;

fn filter_label(filter: &TaskFilter) -> &'static str {
    match filter {
        TaskFilter::All => "All",
        TaskFilter::Today => "Today",
        TaskFilter::Upcoming => "Upcoming",
        TaskFilter::Overdue => "Overdue",
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // === AUTH MESSAGES ===
            Message::RegistrationSuccessful(email) => format!("Account created for {}. You can log in now", email),
            Message::RegistrationFailed(e) => format!("Registration failed: {}", e),
            Message::EmailAlreadyRegistered(email) => format!("Email {} is already registered", email),
            Message::WelcomeBack(name) => format!("Welcome back, {}!", name),
            Message::LoginFailed(e) => format!("Login failed: {}", e),
            Message::UserNotFound => "User not found".to_string(),
            Message::IncorrectPassword => "Incorrect password".to_string(),
            Message::LoggedOut => "Logged out".to_string(),
            Message::NotLoggedIn => "Not logged in. Run `taskdesk login <email>` first".to_string(),
            Message::LoggedInAs(name, email, role) => format!("Logged in as {} <{}> ({})", name, email, role),
            Message::PermissionDenied(role) => format!("This command requires the {} role", role),

            // === DASHBOARD MESSAGES ===
            Message::DashboardHeader(role) => format!("{} dashboard", capitalize(&role.to_string())),
            Message::AdminOverview(users, tasks) => format!("{} user(s), {} task(s) in the system", users, tasks),

            // === TASK MESSAGES ===
            Message::TaskCreated(id, title) => format!("Task #{} '{}' created", id, title),
            Message::TaskUpdated(id) => format!("Task #{} updated", id),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskNotFound(id) => format!("Task #{} not found", id),
            Message::TaskNotOwned(id) => format!("Task #{} belongs to another user", id),
            Message::TaskOwnerInvalid(e) => format!("Could not save task: {}", e),
            Message::TasksHeader(filter) => format!("Tasks: {}", filter_label(filter)),
            Message::NoTasksForFilter(TaskFilter::All) => "No tasks yet".to_string(),
            Message::NoTasksForFilter(filter) => format!("No {} tasks", filter_label(filter).to_lowercase()),
            Message::EditingTask(title) => format!("Editing task '{}'", title),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),

            // === USER MESSAGES ===
            Message::UsersHeader(count) => format!("Users ({})", count),
            Message::AllTasksHeader(count) => format!("All tasks ({})", count),
            Message::NoUsersFound => "No users found".to_string(),
            Message::UsersSkippedInvalidRole(count) => format!("{} user(s) with an unknown role are not shown", count),
            Message::SessionClearFailed(e) => format!("Logged out, but the session file could not be removed: {}", e),
            Message::UserDeleted(email) => format!("User {} and their tasks deleted", email),
            Message::UserIdNotFound(id) => format!("User #{} not found", id),
            Message::CannotDeleteSelf => "You cannot delete your own account while logged in".to_string(),
            Message::ConfirmDeleteUser(email) => format!("Delete user {} and all of their tasks?", email),

            // === CONFIG MESSAGES ===
            Message::ConfigHeader => "Taskdesk configuration".to_string(),
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::MinPasswordLengthPositive => "Minimum password length must be at least 1".to_string(),
            Message::InvalidDateFormat(format) => format!("Date format '{}' has an unknown specifier", format),

            // === MIGRATION MESSAGES ===
            Message::DatabaseVersion(current, latest) => format!("Database version: {} (latest: {})", current, latest),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, e) => format!("Migration v{} failed: {}", version, e),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),

            // === PROMPTS ===
            Message::PromptName => "Full name".to_string(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptConfirmPassword => "Confirm password".to_string(),
            Message::PromptRole => "Role".to_string(),
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD HH:MM)".to_string(),
            Message::PromptDatabasePath => "Database file".to_string(),
            Message::PromptMinPasswordLength => "Minimum password length".to_string(),
            Message::PromptDateFormat => "Date display format".to_string(),

            // === GENERAL ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", s)
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::user::Role;

    #[test]
    fn renders_parameters() {
        assert_eq!(Message::TaskNotFound(7).to_string(), "Task #7 not found");
        assert_eq!(Message::DashboardHeader(Role::Teacher).to_string(), "Teacher dashboard");
        assert_eq!(Message::NoTasksForFilter(TaskFilter::Overdue).to_string(), "No overdue tasks");
        assert_eq!(Message::NoTasksForFilter(TaskFilter::All).to_string(), "No tasks yet");
    }
}
