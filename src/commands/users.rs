use super::App;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::user::{Role, User};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    command: UsersCommand,
}

#[derive(Debug, Subcommand)]
enum UsersCommand {
    /// List every account and every task
    List,
    /// Delete an account together with its tasks
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: UsersArgs) -> Result<()> {
    let app = App::open()?;
    let session = app.session()?;
    let Some(admin) = session.require_role(Role::Admin).cloned() else {
        msg_bail_anyhow!(Message::PermissionDenied(Role::Admin));
    };

    match args.command {
        UsersCommand::List => handle_list(&app),
        UsersCommand::Delete { id, yes } => handle_delete(&app, &admin, id, yes),
    }
}

fn handle_list(app: &App) -> Result<()> {
    let (users, skipped) = app.users().list_counting_skipped()?;
    if skipped > 0 {
        msg_warning!(Message::UsersSkippedInvalidRole(skipped));
    }
    if users.is_empty() {
        msg_info!(Message::NoUsersFound);
    } else {
        msg_print!(Message::UsersHeader(users.len()), true);
        View::users(&users)?;
    }

    let tasks = Tasks::new(&app.db).list(None)?;
    msg_print!(Message::AllTasksHeader(tasks.len()), true);
    if !tasks.is_empty() {
        View::all_tasks(&tasks)?;
    }
    Ok(())
}

fn handle_delete(app: &App, admin: &User, id: i64, yes: bool) -> Result<()> {
    if admin.id == id {
        msg_error!(Message::CannotDeleteSelf);
        return Ok(());
    }

    let users = app.users();
    let Some(user) = users.get_by_id(id)? else {
        msg_error!(Message::UserIdNotFound(id));
        return Ok(());
    };

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteUser(user.email.clone()).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if users.delete(user.id)? {
        msg_success!(Message::UserDeleted(user.email));
    } else {
        msg_error!(Message::UserIdNotFound(id));
    }
    Ok(())
}
