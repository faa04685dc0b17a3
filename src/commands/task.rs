use super::{require_user, App};
use crate::db::tasks::Tasks;
use crate::libs::classifier::{compute_counts, filter_tasks};
use crate::libs::error::Error;
use crate::libs::formatter::{parse_due_date, to_storage};
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, Task, TaskFilter};
use crate::libs::user::User;
use crate::libs::validation::{validate_task, ValidationError};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

const INPUT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommand>,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a task owned by the current user
    Add {
        /// Task title
        title: Option<String>,
        /// Free-form description
        #[arg(short, long)]
        description: Option<String>,
        /// Due date, YYYY-MM-DD [HH:MM]
        #[arg(long)]
        due: Option<String>,
    },
    /// List your tasks
    List {
        #[arg(short, long, value_enum, default_value_t = TaskFilter::All)]
        filter: TaskFilter,
    },
    /// Edit one of your tasks
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        due: Option<String>,
    },
    /// Delete one of your tasks
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let app = App::open()?;
    let session = app.session()?;
    let user = require_user(&session)?;

    match args.command {
        Some(TaskCommand::Add { title, description, due }) => handle_add(&app, &user, title, description, due),
        Some(TaskCommand::List { filter }) => handle_list(&app, &user, filter),
        Some(TaskCommand::Edit { id, title, description, due }) => handle_edit(&app, &user, id, title, description, due),
        Some(TaskCommand::Delete { id, yes }) => handle_delete(&app, &user, id, yes),
        None => handle_list(&app, &user, TaskFilter::All),
    }
}

fn handle_add(app: &App, user: &User, title: Option<String>, description: Option<String>, due: Option<String>) -> Result<()> {
    let theme = ColorfulTheme::default();

    let title = match title {
        Some(title) => title,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptTaskTitle.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    let description = match description {
        Some(description) => description,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptTaskDescription.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    let due = match due {
        Some(due) => due,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptTaskDueDate.to_string())
            .default(Local::now().format(INPUT_DATE_FORMAT).to_string())
            .interact_text()?,
    };

    let due = match validate_task(user.role, &title, &due, &Local::now()) {
        Ok(due) => due,
        Err(e) => msg_bail_anyhow!(e),
    };

    let task = NewTask::new(title.trim(), description.trim(), &to_storage(&due), user.id);
    match Tasks::new(&app.db).create(&task) {
        Ok(id) => {
            msg_success!(Message::TaskCreated(id, task.title));
            Ok(())
        }
        Err(e @ (Error::MissingOwner | Error::ForeignKeyViolation(_))) => msg_bail_anyhow!(Message::TaskOwnerInvalid(e.to_string())),
        Err(e) => Err(e.into()),
    }
}

fn handle_list(app: &App, user: &User, filter: TaskFilter) -> Result<()> {
    let tasks = Tasks::new(&app.db).list(Some(user.id))?;
    let now = Local::now();

    View::counts(&compute_counts(&tasks, &now))?;

    let visible = filter_tasks(&tasks, filter, &now);
    if visible.is_empty() {
        msg_info!(Message::NoTasksForFilter(filter));
        return Ok(());
    }

    msg_print!(Message::TasksHeader(filter), true);
    View::tasks(&visible, &now, &app.config.date_format)?;
    Ok(())
}

fn handle_edit(
    app: &App,
    user: &User,
    id: i64,
    title: Option<String>,
    description: Option<String>,
    due: Option<String>,
) -> Result<()> {
    let tasks = Tasks::new(&app.db);
    let Some(task) = owned_task(&tasks, user, id)? else {
        return Ok(());
    };

    let now = Local::now();
    let current_due = parse_due_date(&task.due_date, &now.timezone())
        .map(|dt| dt.format(INPUT_DATE_FORMAT).to_string())
        .unwrap_or_else(|| task.due_date.clone());

    let (title, description, due) = if title.is_none() && description.is_none() && due.is_none() {
        msg_print!(Message::EditingTask(task.title.clone()), true);
        let theme = ColorfulTheme::default();
        let title: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptTaskTitle.to_string())
            .default(task.title.clone())
            .allow_empty(true)
            .interact_text()?;
        let description: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptTaskDescription.to_string())
            .default(task.description.clone())
            .allow_empty(true)
            .interact_text()?;
        let due: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptTaskDueDate.to_string())
            .default(current_due.clone())
            .interact_text()?;
        (title, description, due)
    } else {
        (
            title.unwrap_or_else(|| task.title.clone()),
            description.unwrap_or_else(|| task.description.clone()),
            due.unwrap_or_else(|| current_due.clone()),
        )
    };

    // An unchanged due date is kept as stored, even when it has already passed.
    let due_date = if due.trim() == current_due {
        if title.trim().is_empty() {
            msg_bail_anyhow!(ValidationError::MissingTitle);
        }
        task.due_date.clone()
    } else {
        match validate_task(user.role, &title, &due, &now) {
            Ok(due) => to_storage(&due),
            Err(e) => msg_bail_anyhow!(e),
        }
    };

    let updated = Task {
        title: title.trim().to_string(),
        description: description.trim().to_string(),
        due_date,
        ..task
    };

    if tasks.update(&updated)? {
        msg_success!(Message::TaskUpdated(updated.id));
    } else {
        msg_error!(Message::TaskNotFound(id));
    }
    Ok(())
}

fn handle_delete(app: &App, user: &User, id: i64, yes: bool) -> Result<()> {
    let tasks = Tasks::new(&app.db);
    let Some(task) = owned_task(&tasks, user, id)? else {
        return Ok(());
    };

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if tasks.delete(task.id)? {
        msg_success!(Message::TaskDeleted(task.title));
    } else {
        msg_error!(Message::TaskNotFound(id));
    }
    Ok(())
}

/// Looks a task up and checks it belongs to `user`, reporting either failure.
fn owned_task(tasks: &Tasks, user: &User, id: i64) -> Result<Option<Task>> {
    match tasks.get_by_id(id)? {
        None => {
            msg_error!(Message::TaskNotFound(id));
            Ok(None)
        }
        Some(task) if task.user_id != user.id => {
            msg_error!(Message::TaskNotOwned(id));
            Ok(None)
        }
        Some(task) => Ok(Some(task)),
    }
}
