use super::App;
use crate::libs::error::Error;
use crate::libs::messages::Message;
use crate::libs::user::Role;
use crate::libs::validation::RegistrationForm;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Full name
    #[arg(long)]
    name: Option<String>,
    /// Email address, used to log in
    #[arg(long)]
    email: Option<String>,
    /// Account role
    #[arg(long, value_enum)]
    role: Option<Role>,
    /// Password; prompted for (with confirmation) when omitted
    #[arg(long)]
    password: Option<String>,
}

pub fn cmd(args: RegisterArgs) -> Result<()> {
    let app = App::open()?;
    let theme = ColorfulTheme::default();

    let name = match args.name {
        Some(name) => name,
        None => Input::with_theme(&theme).with_prompt(Message::PromptName.to_string()).interact_text()?,
    };
    let email = match args.email {
        Some(email) => email,
        None => Input::with_theme(&theme).with_prompt(Message::PromptEmail.to_string()).interact_text()?,
    };
    let role = match args.role {
        Some(role) => role,
        None => {
            let index = Select::with_theme(&theme)
                .with_prompt(Message::PromptRole.to_string())
                .items(&Role::ALL.iter().map(Role::as_str).collect::<Vec<_>>())
                .default(0)
                .interact()?;
            Role::ALL[index]
        }
    };
    let (password, confirm_password) = match args.password {
        Some(password) => (password.clone(), password),
        None => (
            Password::with_theme(&theme).with_prompt(Message::PromptPassword.to_string()).interact()?,
            Password::with_theme(&theme).with_prompt(Message::PromptConfirmPassword.to_string()).interact()?,
        ),
    };

    let form = RegistrationForm {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        password,
        confirm_password,
        role,
    };
    if let Err(e) = form.validate(app.config.min_password_length) {
        msg_bail_anyhow!(e);
    }

    let session = app.session()?;
    match session.register(&app.users(), &form.name, &form.email, &form.password, form.role) {
        Ok(_) => {
            msg_success!(Message::RegistrationSuccessful(form.email));
            Ok(())
        }
        Err(Error::DuplicateEmail(email)) => msg_bail_anyhow!(Message::EmailAlreadyRegistered(email)),
        Err(e) if e.is_user_facing() => msg_bail_anyhow!(Message::RegistrationFailed(e.to_string())),
        Err(e) => Err(e.into()),
    }
}
