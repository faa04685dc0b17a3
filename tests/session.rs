#[cfg(test)]
mod tests {
    use taskdesk::db::db::Db;
    use taskdesk::db::users::Users;
    use taskdesk::libs::error::Error;
    use taskdesk::libs::session::{Session, SessionSlot, SessionState, SESSION_FILE_NAME};
    use taskdesk::libs::user::Role;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionTestContext {
        temp_dir: TempDir,
        db: Db,
    }

    impl SessionTestContext {
        fn slot(&self) -> SessionSlot {
            SessionSlot::at(self.temp_dir.path().join(SESSION_FILE_NAME))
        }

        fn session(&self) -> Session {
            Session::init(self.slot(), &Users::new(&self.db)).unwrap()
        }
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            SessionTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                db: Db::open_in_memory().unwrap(),
            }
        }
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_register_then_login(ctx: &mut SessionTestContext) {
        let users = Users::new(&ctx.db);
        let mut session = ctx.session();
        assert_eq!(session.state(), &SessionState::Anonymous);

        let id = session.register(&users, "Alice", "a@x.com", "secret1", Role::Student).unwrap();
        // Registration does not log in.
        assert!(!session.is_authenticated());

        let alice = session.login(&users, "a@x.com", "secret1").unwrap();
        assert_eq!(alice.id, id);
        assert_eq!(alice.name, "Alice");
        assert_eq!(session.current_user(), Some(&alice));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_login_failures_leave_session_anonymous(ctx: &mut SessionTestContext) {
        let users = Users::new(&ctx.db);
        let mut session = ctx.session();
        session.register(&users, "Alice", "a@x.com", "secret1", Role::Student).unwrap();

        let err = session.login(&users, "a@x.com", "wrong").unwrap_err();
        assert!(matches!(err, Error::BadCredentials));
        assert_eq!(session.state(), &SessionState::Anonymous);

        let err = session.login(&users, "nobody@x.com", "secret1").unwrap_err();
        assert!(matches!(err, Error::UserNotFound(_)));
        assert_eq!(session.state(), &SessionState::Anonymous);
        assert!(ctx.slot().load().unwrap().is_none());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_session_survives_restart(ctx: &mut SessionTestContext) {
        let users = Users::new(&ctx.db);
        let mut session = ctx.session();
        session.register(&users, "Tom", "t@x.com", "secret1", Role::Teacher).unwrap();
        let tom = session.login(&users, "t@x.com", "secret1").unwrap();

        let restored = ctx.session();
        assert_eq!(restored.current_user(), Some(&tom));
        assert!(restored.require_role(Role::Teacher).is_some());
        assert!(restored.require_role(Role::Admin).is_none());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_slot_is_not_plaintext(ctx: &mut SessionTestContext) {
        let users = Users::new(&ctx.db);
        let mut session = ctx.session();
        session.register(&users, "Alice", "a@x.com", "secret1", Role::Student).unwrap();
        session.login(&users, "a@x.com", "secret1").unwrap();

        let raw = std::fs::read_to_string(ctx.temp_dir.path().join(SESSION_FILE_NAME)).unwrap();
        assert!(!raw.contains("secret1"));
        assert!(!raw.contains("a@x.com"));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_logout_clears_slot(ctx: &mut SessionTestContext) {
        let users = Users::new(&ctx.db);
        let mut session = ctx.session();
        session.register(&users, "Alice", "a@x.com", "secret1", Role::Student).unwrap();
        session.login(&users, "a@x.com", "secret1").unwrap();

        session.logout().unwrap();
        assert_eq!(session.state(), &SessionState::Anonymous);
        assert!(ctx.slot().load().unwrap().is_none());
        assert!(!ctx.session().is_authenticated());

        // Logging out twice is harmless.
        session.logout().unwrap();
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_stale_session_is_dropped(ctx: &mut SessionTestContext) {
        let users = Users::new(&ctx.db);
        let mut session = ctx.session();
        let id = session.register(&users, "Alice", "a@x.com", "secret1", Role::Student).unwrap();
        session.login(&users, "a@x.com", "secret1").unwrap();

        users.delete(id).unwrap();

        let restored = ctx.session();
        assert!(!restored.is_authenticated());
        assert!(!ctx.temp_dir.path().join(SESSION_FILE_NAME).exists());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_unwritable_slot_fails_login(ctx: &mut SessionTestContext) {
        let users = Users::new(&ctx.db);
        // A directory where the slot file should be cannot be written.
        let blocked = ctx.temp_dir.path().join("blocked");
        std::fs::create_dir(&blocked).unwrap();
        let mut session = Session::init(SessionSlot::at(&blocked), &users).unwrap();
        session.register(&users, "Alice", "a@x.com", "secret1", Role::Student).unwrap();

        let err = session.login(&users, "a@x.com", "secret1").unwrap_err();
        assert!(matches!(err, Error::SessionStorage(_)));
        assert!(!session.is_authenticated());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_logout_reports_slot_that_cannot_be_removed(ctx: &mut SessionTestContext) {
        let users = Users::new(&ctx.db);
        let mut session = ctx.session();
        session.register(&users, "Alice", "a@x.com", "secret1", Role::Student).unwrap();
        session.login(&users, "a@x.com", "secret1").unwrap();

        // Swap the slot file for a directory so removing it fails.
        let slot_path = ctx.temp_dir.path().join(SESSION_FILE_NAME);
        std::fs::remove_file(&slot_path).unwrap();
        std::fs::create_dir(&slot_path).unwrap();

        let err = session.logout().unwrap_err();
        assert!(matches!(err, Error::SessionStorage(_)));
        assert_eq!(session.state(), &SessionState::Anonymous);
    }
}
