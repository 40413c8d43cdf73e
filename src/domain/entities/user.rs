//! User entity and its creation/replacement payload.

use chrono::NaiveDate;
use serde::Serialize;

/// A persisted user.
///
/// `dob` is optional only because the store can in principle hold a NULL; the
/// validation layer never writes one. Reads that need the date treat a missing
/// value as a broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub dob: Option<NaiveDate>,
}

impl User {
    pub fn new(id: i32, name: String, dob: Option<NaiveDate>) -> Self {
        Self { id, name, dob }
    }
}

/// Validated input for creating a user or replacing one in full.
///
/// Only produced by [`crate::domain::validation::UserInput::into_new_user`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub dob: NaiveDate,
}

/// A user together with the age derived at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: i32,
    pub name: String,
    pub dob: NaiveDate,
    pub age: i32,
}
