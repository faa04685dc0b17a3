//! User repository.
//!
//! Email is the login key and is unique. Role text read back from the store
//! is validated against [`Role`]; legacy databases created without the CHECK
//! constraint can hold values outside the enumeration.

use super::db::Db;
use crate::libs::error::{constraint_of, Constraint, Error, Result};
use crate::libs::user::{Role, User};
use rusqlite::{params, Row};
use tracing::{debug, warn};

const INSERT_USER: &str = "INSERT INTO users (name, email, password, role) VALUES (?1, ?2, ?3, ?4)";
const SELECT_USER_BY_EMAIL: &str = "SELECT id, name, email, password, role FROM users WHERE email = ?1";
const SELECT_USER_BY_ID: &str = "SELECT id, name, email, password, role FROM users WHERE id = ?1";
const SELECT_USERS: &str = "SELECT id, name, email, password, role FROM users ORDER BY id ASC";
const DELETE_USER: &str = "DELETE FROM users WHERE id = ?1";

/// Row as stored, before the role is validated.
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password: String,
    role: String,
}

impl UserRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(UserRow {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            password: row.get(3)?,
            role: row.get(4)?,
        })
    }
}

impl TryFrom<UserRow> for User {
    type Error = Error;

    fn try_from(row: UserRow) -> Result<Self> {
        Ok(User {
            role: row.role.parse::<Role>()?,
            id: row.id,
            name: row.name,
            email: row.email,
            password: row.password,
        })
    }
}

pub struct Users<'a> {
    db: &'a Db,
}

impl<'a> Users<'a> {
    pub fn new(db: &'a Db) -> Self {
        Users { db }
    }

    /// Inserts a user and returns its id.
    pub fn create(&self, name: &str, email: &str, password: &str, role: Role) -> Result<i64> {
        match self.db.execute(INSERT_USER, params![name, email, password, role.as_str()]) {
            Ok(executed) => {
                debug!(user_id = executed.inserted_id, email, role = %role, "user created");
                Ok(executed.inserted_id)
            }
            Err(e) => Err(match constraint_of(&e) {
                Some(Constraint::Unique) => Error::DuplicateEmail(email.to_string()),
                Some(Constraint::Check) => Error::InvalidRole(role.to_string()),
                _ => Error::Store(e),
            }),
        }
    }

    /// Looks a user up by email. `Ok(None)` when no row matches.
    pub fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = self.db.query_row(SELECT_USER_BY_EMAIL, params![email], UserRow::from_row)?;
        Self::validated(row)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let row = self.db.query_row(SELECT_USER_BY_ID, params![id], UserRow::from_row)?;
        Self::validated(row)
    }

    /// All users ordered by id. Rows with an unknown role are left out.
    pub fn list(&self) -> Result<Vec<User>> {
        Ok(self.list_counting_skipped()?.0)
    }

    /// Like [`Users::list`], also returning how many rows were left out.
    pub fn list_counting_skipped(&self) -> Result<(Vec<User>, usize)> {
        let rows = self.db.query(SELECT_USERS, [], UserRow::from_row)?;
        let total = rows.len();

        let users: Vec<User> = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                match User::try_from(row) {
                    Ok(user) => Some(user),
                    Err(e) => {
                        warn!(user_id = id, error = %e, "skipping user with invalid role");
                        None
                    }
                }
            })
            .collect();

        let skipped = total - users.len();
        Ok((users, skipped))
    }

    /// Deletes a user and, through the cascade, all of its tasks.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let executed = self.db.execute(DELETE_USER, params![id])?;
        debug!(user_id = id, removed = executed.rows_affected, "user delete");
        Ok(executed.rows_affected > 0)
    }

    fn validated(row: Option<UserRow>) -> Result<Option<User>> {
        match row {
            None => Ok(None),
            Some(row) => {
                let id = row.id;
                User::try_from(row).map(Some).inspect_err(|e| warn!(user_id = id, error = %e, "invalid role in store"))
            }
        }
    }
}
