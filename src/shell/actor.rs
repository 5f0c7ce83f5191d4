// Caller identity for inbound adapters.
//
// Authentication happens in front of this service; it forwards the caller as
// `x-org-id`, `x-user-id` and `x-user-role` headers.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::modules::scheduling::core::user::UserRole;

pub const ORG_ID_HEADER: &str = "x-org-id";
pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub org_id: String,
    pub user_id: String,
    pub role: UserRole,
}

impl Actor {
    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }
}

/// An ADMIN or MANAGER caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manager(pub Actor);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActorRejection {
    #[error("Missing {0} header")]
    MissingHeader(&'static str),

    #[error("Unknown role {0}")]
    UnknownRole(String),

    #[error("Insufficient permissions")]
    Forbidden,
}

impl IntoResponse for ActorRejection {
    fn into_response(self) -> Response {
        let status = match self {
            ActorRejection::MissingHeader(_) | ActorRejection::UnknownRole(_) => {
                StatusCode::BAD_REQUEST
            }
            ActorRejection::Forbidden => StatusCode::FORBIDDEN,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn parse_role(raw: &str) -> Result<UserRole, ActorRejection> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "ADMIN" => Ok(UserRole::Admin),
        "MANAGER" => Ok(UserRole::Manager),
        "EMPLOYEE" => Ok(UserRole::Employee),
        _ => Err(ActorRejection::UnknownRole(raw.to_string())),
    }
}

fn header<'a>(parts: &'a Parts, name: &'static str) -> Result<&'a str, ActorRejection> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(ActorRejection::MissingHeader(name))
}

impl<S: Send + Sync> FromRequestParts<S> for Actor {
    type Rejection = ActorRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Actor {
            org_id: header(parts, ORG_ID_HEADER)?.to_string(),
            user_id: header(parts, USER_ID_HEADER)?.to_string(),
            role: parse_role(header(parts, USER_ROLE_HEADER)?)?,
        })
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Manager {
    type Rejection = ActorRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let actor = Actor::from_request_parts(parts, state).await?;
        if !actor.is_manager() {
            return Err(ActorRejection::Forbidden);
        }
        Ok(Manager(actor))
    }
}
