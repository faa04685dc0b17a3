use super::{whoami, App};
use crate::libs::error::Error;
use crate::libs::messages::Message;
use crate::libs::validation::validate_credentials;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(required = true)]
    email: String,
    /// Password; prompted for when omitted
    #[arg(long)]
    password: Option<String>,
}

pub fn cmd(login_args: LoginArgs) -> Result<()> {
    let app = App::open()?;
    let email = login_args.email.trim().to_string();
    let password = match login_args.password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPassword.to_string())
            .interact()?,
    };

    if let Err(e) = validate_credentials(&email, &password) {
        msg_bail_anyhow!(e);
    }

    let mut session = app.session()?;
    let user = match session.login(&app.users(), &email, &password) {
        Ok(user) => user,
        Err(Error::UserNotFound(_)) => msg_bail_anyhow!(Message::UserNotFound),
        Err(Error::BadCredentials) => msg_bail_anyhow!(Message::IncorrectPassword),
        Err(e) if e.is_user_facing() => msg_bail_anyhow!(Message::LoginFailed(e.to_string())),
        Err(e) => return Err(e.into()),
    };

    msg_success!(Message::WelcomeBack(user.name.clone()));
    whoami::dashboard(&app, &user)
}
