//! Constraint schema for user create/update input.
//!
//! `name` checks are declared with `validator` attributes; `dob` is parsed
//! once in [`UserInput::into_new_user`] so the date is kept. Both are evaluated
//! together, so a request with several bad fields reports all of them:
//!
//! | field  | checks |
//! |--------|--------|
//! | `name` | required, 2..=100 characters after trimming |
//! | `dob`  | required, `YYYY-MM-DD`, real calendar date |

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::entities::NewUser;
use crate::error::AppError;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;

/// Wire format of a date of birth.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static ISO_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

/// Raw create/update payload.
///
/// Missing fields decode as empty strings so that they are reported as
/// constraint violations rather than as undecodable bodies.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserInput {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    /// Checked by [`UserInput::into_new_user`], which keeps the parsed date.
    #[serde(default)]
    pub dob: String,
}

impl UserInput {
    pub fn new(name: impl Into<String>, dob: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dob: dob.into(),
        }
    }

    /// Checks every constraint and converts into a [`NewUser`].
    ///
    /// The stored name is the trimmed one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every violated constraint.
    pub fn into_new_user(self) -> Result<NewUser, AppError> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);

        let dob = match parse_dob(&self.dob) {
            Ok(dob) => Some(dob),
            Err(e) => {
                errors.add("dob", e);
                None
            }
        };

        match dob {
            Some(dob) if errors.is_empty() => Ok(NewUser {
                name: self.name.trim().to_string(),
                dob,
            }),
            _ => Err(errors.into()),
        }
    }
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(violation("required", "name is required"));
    }

    let len = trimmed.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        let mut err = violation("length", "name must be between 2 and 100 characters");
        err.add_param(Cow::Borrowed("actual"), &len);
        return Err(err);
    }

    Ok(())
}

fn parse_dob(dob: &str) -> Result<NaiveDate, ValidationError> {
    if dob.trim().is_empty() {
        return Err(violation("required", "dob is required"));
    }

    if !ISO_DATE_REGEX.is_match(dob) {
        return Err(violation("format", "dob must be a date in YYYY-MM-DD format"));
    }

    NaiveDate::parse_from_str(dob, DATE_FORMAT)
        .map_err(|_| violation("date", "dob is not a valid calendar date"))
}
