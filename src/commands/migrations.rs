use crate::db::db::Db;
use crate::db::migrations::{get_db_version, needs_migration, MigrationManager};
use crate::libs::{messages::Message, view::View};
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Schema version of the configured database
    Status,
    /// Applied migrations, oldest first
    History,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let conn = Db::new_without_migrations()?;
    let manager = MigrationManager::new();

    match args.command {
        MigrationsCommand::Status => {
            let current = get_db_version(&conn)?;
            msg_print!(Message::DatabaseVersion(current, manager.latest_version()));

            if needs_migration(&conn)? {
                msg_warning!(Message::DatabaseNeedsUpdate);
            } else {
                msg_info!(Message::DatabaseUpToDate);
            }
        }
        MigrationsCommand::History => {
            // A database that was never opened has no migrations table yet.
            if get_db_version(&conn)? == 0 {
                msg_info!(Message::DatabaseNeedsUpdate);
                return Ok(());
            }

            msg_print!(Message::MigrationHistory, true);
            View::migrations(&manager.get_migration_history(&conn)?)?;
        }
    }

    Ok(())
}
