use super::{require_user, App};
use crate::db::tasks::Tasks;
use crate::libs::classifier::compute_counts;
use crate::libs::messages::Message;
use crate::libs::user::{Role, User};
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    let app = App::open()?;
    let session = app.session()?;
    let user = require_user(&session)?;

    msg_print!(Message::LoggedInAs(user.name.clone(), user.email.clone(), user.role));
    dashboard(&app, &user)
}

/// Role-specific landing view shown after login.
pub fn dashboard(app: &App, user: &User) -> Result<()> {
    let tasks = Tasks::new(&app.db);

    match user.role {
        Role::Student | Role::Teacher => {
            let own = tasks.list(Some(user.id))?;
            msg_print!(Message::DashboardHeader(user.role), true);
            View::counts(&compute_counts(&own, &Local::now()))?;
        }
        Role::Admin => {
            let user_count = app.users().list()?.len();
            let task_count = tasks.list(None)?.len();
            msg_print!(Message::DashboardHeader(user.role), true);
            msg_print!(Message::AdminOverview(user_count, task_count));
        }
    }

    Ok(())
}
