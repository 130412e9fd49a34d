//! `CurrentUser` extractor — pulls the bearer token from the Authorization
//! header and resolves it to the authenticated user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use taskhub_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user available in handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    /// Returns the inner user record.
    pub fn user(&self) -> &User {
        &self.0
    }
}

impl std::ops::Deref for CurrentUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let bearer = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        let user = state.identity_resolver.resolve(bearer).await?;

        Ok(CurrentUser(user))
    }
}
