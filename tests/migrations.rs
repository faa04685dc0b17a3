#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use taskdesk::db::db::Db;
    use taskdesk::db::migrations::{ensure_schema, get_db_version, needs_migration, MigrationManager};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl MigrationTestContext {
        fn connection(&self) -> Connection {
            Connection::open(self.temp_dir.path().join("taskdesk.db")).unwrap()
        }
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_on_open(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.temp_dir.path().join("taskdesk.db")).unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_needs_migration(ctx: &mut MigrationTestContext) {
        let conn = ctx.connection();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = ctx.connection();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        let names: Vec<&str> = history.iter().map(|(_, name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["create_users_and_tasks", "add_task_owner_due_index"]);
        for (i, (version, _, _)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
            assert!(manager.is_migration_applied(&conn, *version).unwrap());
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = ctx.connection();

        ensure_schema(&mut conn).unwrap();
        let version = get_db_version(&conn).unwrap();
        ensure_schema(&mut conn).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), version);
        let applied: i64 = conn.query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0)).unwrap();
        assert_eq!(applied as u32, version);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopen_keeps_data(ctx: &mut MigrationTestContext) {
        let path = ctx.temp_dir.path().join("taskdesk.db");
        {
            let db = Db::open(&path).unwrap();
            db.execute("INSERT INTO users (name, email, password, role) VALUES ('A', 'a@x.com', 'pw', 'admin')", [])
                .unwrap();
        }

        let db = Db::open(&path).unwrap();
        let count = db.query_row("SELECT COUNT(*) FROM users", [], |row| row.get::<_, i64>(0)).unwrap();
        assert_eq!(count, Some(1));
    }
}
