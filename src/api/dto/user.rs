//! DTOs for the user endpoints.
//!
//! Keys on the wire are `ID`, `Name`, `Email`, `Age`. On input, keys match
//! case-insensitively (`id`, `name`, `AGE`, ...).

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;

/// Incoming user body for insert and update.
///
/// Only JSON well-formedness is enforced. Missing fields, fields of the wrong
/// JSON type and non-object bodies all leave the default value in place;
/// unknown fields are ignored.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UserPayload {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl UserPayload {
    /// Decodes a raw request body.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MalformedPayload`] if the body is not well-formed
    /// JSON.
    pub fn from_slice(body: &[u8]) -> Result<Self, AppError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| AppError::malformed(e.to_string()))?;

        Ok(Self::from_value(&value))
    }

    fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };

        Self {
            id: int_field(fields, "ID"),
            name: str_field(fields, "Name"),
            email: str_field(fields, "Email"),
            age: int_field(fields, "Age"),
        }
    }

    /// Drops any client-supplied id.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }

    /// Keeps the body's id as the update target.
    pub fn into_user(self) -> User {
        User::new(self.id, self.name, self.email, self.age)
    }
}

/// Looks a key up exactly first, then ignoring ASCII case.
fn lookup<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).or_else(|| {
        fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

// Floats, strings and null leave the field at zero.
fn int_field(fields: &Map<String, Value>, key: &str) -> i64 {
    lookup(fields, key).and_then(Value::as_i64).unwrap_or_default()
}

fn str_field(fields: &Map<String, Value>, key: &str) -> String {
    lookup(fields, key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default()
}

/// Outgoing user representation.
#[derive(Debug, Serialize)]
pub struct UserItem {
    #[serde(rename = "ID")]
    pub id: i64,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Age")]
    pub age: i64,
}

impl From<User> for UserItem {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            age: u.age,
        }
    }
}
