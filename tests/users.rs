#[cfg(test)]
mod tests {
    use taskdesk::db::db::Db;
    use taskdesk::db::users::Users;
    use taskdesk::libs::error::Error;
    use taskdesk::libs::user::Role;
    use test_context::{test_context, TestContext};

    struct UserTestContext {
        db: Db,
    }

    impl TestContext for UserTestContext {
        fn setup() -> Self {
            UserTestContext {
                db: Db::open_in_memory().unwrap(),
            }
        }
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_create_and_find_by_email(ctx: &mut UserTestContext) {
        let users = Users::new(&ctx.db);

        let id = users.create("Alice", "a@x.com", "secret1", Role::Student).unwrap();
        assert!(id > 0);

        let alice = users.find_by_email("a@x.com").unwrap().unwrap();
        assert_eq!(alice.id, id);
        assert_eq!(alice.name, "Alice");
        assert_eq!(alice.password, "secret1");
        assert_eq!(alice.role, Role::Student);

        assert!(users.find_by_email("nobody@x.com").unwrap().is_none());
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_duplicate_email_is_rejected(ctx: &mut UserTestContext) {
        let users = Users::new(&ctx.db);

        users.create("Alice", "a@x.com", "secret1", Role::Student).unwrap();
        let err = users.create("Another Alice", "a@x.com", "secret2", Role::Teacher).unwrap_err();

        assert!(matches!(err, Error::DuplicateEmail(ref email) if email == "a@x.com"));
        assert_eq!(users.list().unwrap().len(), 1);
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_list_orders_by_id(ctx: &mut UserTestContext) {
        let users = Users::new(&ctx.db);

        users.create("Zed", "z@x.com", "secret1", Role::Admin).unwrap();
        users.create("Amy", "amy@x.com", "secret1", Role::Teacher).unwrap();

        let names: Vec<String> = users.list().unwrap().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
        assert_eq!(users.list_counting_skipped().unwrap().1, 0);
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_unknown_role_in_store(ctx: &mut UserTestContext) {
        // A legacy table without the CHECK constraint can hold any role text.
        ctx.db
            .execute_ddl(
                "PRAGMA foreign_keys = OFF;
                 DROP TABLE tasks;
                 DROP TABLE users;
                 CREATE TABLE users (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL, email TEXT UNIQUE NOT NULL, password TEXT NOT NULL, role TEXT NOT NULL);
                 INSERT INTO users (name, email, password, role) VALUES ('Old', 'old@x.com', 'pw', 'janitor');
                 INSERT INTO users (name, email, password, role) VALUES ('New', 'new@x.com', 'pw', 'teacher');",
            )
            .unwrap();
        let users = Users::new(&ctx.db);

        let err = users.find_by_email("old@x.com").unwrap_err();
        assert!(matches!(err, Error::InvalidRole(ref role) if role == "janitor"));

        let listed = users.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].email, "new@x.com");

        let (counted, skipped) = users.list_counting_skipped().unwrap();
        assert_eq!(counted, listed);
        assert_eq!(skipped, 1);
    }

    #[test_context(UserTestContext)]
    #[test]
    fn test_delete_user(ctx: &mut UserTestContext) {
        let users = Users::new(&ctx.db);
        let id = users.create("Alice", "a@x.com", "secret1", Role::Student).unwrap();

        assert!(users.delete(id).unwrap());
        assert!(!users.delete(id).unwrap());
        assert!(users.get_by_id(id).unwrap().is_none());
    }
}
