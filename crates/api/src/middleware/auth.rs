//! # Role Extraction Module
//!
//! This module reads the client-supplied actor role for the SchoolSync API.
//!
//! Authentication itself is delegated to the identity provider in front of
//! this service; by design the API trusts the caller and only honors the
//! role flag it sends. The flag gates the admin-only mutations (timetable
//! saves and entity writes) so a teacher session stays read-only.

use axum::{extract::FromRequestParts, http::request::Parts};

use schoolsync_core::errors::{SchoolError, SchoolResult};

use crate::middleware::error_handling::AppError;

/// Header carrying the caller's role flag.
pub const ROLE_HEADER: &str = "x-school-role";

/// The authenticated actor's role, as asserted by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorRole {
    Admin,
    Teacher,
}

impl ActorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorRole::Admin => "admin",
            ActorRole::Teacher => "teacher",
        }
    }

    /// Fails with an Authorization error unless the actor is an admin.
    pub fn require_admin(&self) -> SchoolResult<()> {
        match self {
            ActorRole::Admin => Ok(()),
            ActorRole::Teacher => Err(SchoolError::Authorization(
                "Admin role required".to_string(),
            )),
        }
    }
}

/// Extracts the role flag from the request headers.
///
/// A missing header defaults to `Admin`: the tool assumes a single
/// administrative actor, and the flag exists to let the teacher-facing
/// screens opt into read-only behavior. An unrecognized value is a
/// validation error.
#[async_trait::async_trait]
impl<S> FromRequestParts<S> for ActorRole
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(ROLE_HEADER) else {
            return Ok(ActorRole::Admin);
        };

        match value.to_str() {
            Ok("admin") => Ok(ActorRole::Admin),
            Ok("teacher") => Ok(ActorRole::Teacher),
            _ => Err(AppError(SchoolError::Validation(format!(
                "Unrecognized {ROLE_HEADER} value"
            )))),
        }
    }
}
