pub mod init;
pub mod login;
pub mod logout;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod register;
pub mod task;
pub mod users;
pub mod whoami;

use crate::db::{db::Db, users::Users};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::session::{Session, SessionSlot};
use crate::libs::user::User;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create an account")]
    Register(register::RegisterArgs),
    #[command(about = "Log in with email and password")]
    Login(login::LoginArgs),
    #[command(about = "Log out of the current session")]
    Logout,
    #[command(about = "Show the current user and their dashboard")]
    Whoami,
    #[command(about = "Manage your tasks")]
    Task(task::TaskArgs),
    #[command(about = "Inspect or manage user accounts")]
    Users(users::UsersArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Database migration management (debug builds only)")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Register(args) => register::cmd(args),
            Commands::Login(args) => login::cmd(args),
            Commands::Logout => logout::cmd(),
            Commands::Whoami => whoami::cmd(),
            Commands::Task(args) => task::cmd(args),
            Commands::Users(args) => users::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Configuration and open store shared by the commands.
pub struct App {
    pub config: Config,
    pub db: Db,
}

impl App {
    pub fn open() -> Result<Self> {
        let config = Config::read()?;
        let db = Db::new(&config)?;
        Ok(App { config, db })
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(&self.db)
    }

    pub fn session(&self) -> Result<Session> {
        Ok(Session::init(SessionSlot::new()?, &self.users())?)
    }
}

/// The logged-in user, or an error asking to log in.
pub fn require_user(session: &Session) -> Result<User> {
    session.current_user().cloned().ok_or_else(|| msg_error_anyhow!(Message::NotLoggedIn))
}
