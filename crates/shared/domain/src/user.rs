//! User domain entity and creation input.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{
    EMAIL_PATTERN, FIELD_EMAIL, FIELD_FIRST_NAME, FIELD_LAST_NAME, FIELD_PASSWORD,
};
use crate::credential::Credential;
use crate::error::{DomainResult, ValidationErrors};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Check an address against the accepted email shape.
pub fn is_email_valid(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Stored user. The credential is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub encrypted_password: Credential,
}

/// A user ready to be persisted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub encrypted_password: Credential,
}

impl NewUser {
    /// Build a user from creation params, hashing the password.
    ///
    /// Assumes `params` already passed [`CreateUserParams::validate`].
    /// Consumes the params so the plaintext is dropped here.
    pub fn from_params(params: CreateUserParams) -> DomainResult<Self> {
        let encrypted_password = Credential::derive(&params.password)?;
        Ok(Self {
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            encrypted_password,
        })
    }

    /// Attach the store-assigned id.
    pub fn into_user(self, id: Uuid) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            encrypted_password: self.encrypted_password,
        }
    }
}

/// User creation input as received from a client.
///
/// Lengths are counted in characters, not bytes.
#[derive(Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserParams {
    #[validate(length(min = 2, message = "firstName length should be at least 2 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, message = "lastName length should be at least 2 characters"))]
    pub last_name: String,
    #[validate(regex(path = *EMAIL_REGEX, message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 8, message = "password length should be at least 8 characters"))]
    pub password: String,
}

impl std::fmt::Debug for CreateUserParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserParams")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl CreateUserParams {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Run every field check and report all failures together, keyed by
    /// wire field name.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validate::validate(self)
            .map_err(|errors| ValidationErrors::from_field_errors(&errors, wire_field))
    }
}

fn wire_field(field: &str) -> &str {
    match field {
        "first_name" => FIELD_FIRST_NAME,
        "last_name" => FIELD_LAST_NAME,
        "email" => FIELD_EMAIL,
        "password" => FIELD_PASSWORD,
        other => other,
    }
}
