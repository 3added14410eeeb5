use crate::{error::ApiError, state::AppState};
use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use database::{entities::users, services::user::UserService};
use models::Role;
use tower_oauth2_resource_server::claims::DefaultClaims;

/// The `sub` claim of a validated bearer token, which is the user's login name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSubject(pub String);

/// Copies the subject of the validated JWT into an [`AuthSubject`] extension
pub async fn claims_to_subject(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let subject = request
        .extensions()
        .get::<DefaultClaims>()
        .and_then(|claims| claims.sub.as_ref().map(|sub| sub.to_string()))
        .ok_or_else(|| ApiError::unauthorized("Token has no subject"))?;

    request.extensions_mut().insert(AuthSubject(subject));
    Ok(next.run(request).await)
}

/// The logged in user, resolved from [`AuthSubject`]
#[derive(Debug, Clone)]
pub struct CurrentUser(pub users::Model);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthSubject(username) = parts
            .extensions
            .get::<AuthSubject>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Not authenticated"))?;

        let user = UserService::find_by_username(&state.db, &username)
            .await?
            .ok_or_else(|| ApiError::unauthorized(format!("Unknown user: {username}")))?;

        Ok(Self(user))
    }
}

/// A logged in administrator
#[derive(Debug, Clone)]
pub struct AdminUser(pub users::Model);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        match user.role {
            Role::Admin => Ok(Self(user)),
            Role::Student => Err(ApiError::forbidden("Administrator access required")),
        }
    }
}

/// A logged in student, along with the student record their login is linked to
#[derive(Debug, Clone)]
pub struct StudentUser {
    pub user: users::Model,
    pub student_id: i64,
}

impl FromRequestParts<AppState> for StudentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        match (user.role, user.student_id) {
            (Role::Student, Some(student_id)) => Ok(Self { user, student_id }),
            _ => Err(ApiError::forbidden("Student access required")),
        }
    }
}
