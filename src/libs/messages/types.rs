use crate::libs::task::TaskFilter;
use crate::libs::user::Role;

#[derive(Debug, Clone)]
pub enum Message {
    // === AUTH MESSAGES ===
    RegistrationSuccessful(String),
    RegistrationFailed(String),
    EmailAlreadyRegistered(String),
    WelcomeBack(String),
    LoginFailed(String),
    UserNotFound,
    IncorrectPassword,
    LoggedOut,
    NotLoggedIn,
    LoggedInAs(String, String, Role),
    PermissionDenied(Role),

    // === DASHBOARD MESSAGES ===
    DashboardHeader(Role),
    AdminOverview(usize, usize),

    // === TASK MESSAGES ===
    TaskCreated(i64, String),
    TaskUpdated(i64),
    TaskDeleted(String),
    TaskNotFound(i64),
    TaskNotOwned(i64),
    TaskOwnerInvalid(String),
    TasksHeader(TaskFilter),
    NoTasksForFilter(TaskFilter),
    EditingTask(String),
    ConfirmDeleteTask(String),

    // === USER MESSAGES ===
    UsersHeader(usize),
    AllTasksHeader(usize),
    NoUsersFound,
    UsersSkippedInvalidRole(usize),
    SessionClearFailed(String),
    UserDeleted(String),
    UserIdNotFound(i64),
    CannotDeleteSelf,
    ConfirmDeleteUser(String),

    // === CONFIG MESSAGES ===
    ConfigHeader,
    ConfigSaved,
    MinPasswordLengthPositive,
    InvalidDateFormat(String),

    // === MIGRATION MESSAGES ===
    DatabaseVersion(u32, u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    MigrationHistory,

    // === PROMPTS ===
    PromptName,
    PromptEmail,
    PromptPassword,
    PromptConfirmPassword,
    PromptRole,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDueDate,
    PromptDatabasePath,
    PromptMinPasswordLength,
    PromptDateFormat,

    // === GENERAL ===
    OperationCancelled,
}
