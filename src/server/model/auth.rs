use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use chrono::{Duration, Utc};
use entity::siglad_user::UserRole;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

use crate::server::{error::auth::AuthError, error::Error, model::app::AppState};

/// Bearer tokens are valid for four hours from issuance.
static TOKEN_LIFETIME_HOURS: i64 = 4;

/// HS256 key pair used to sign and verify bearer tokens.
#[derive(Clone)]
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl AuthKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a signed token for a user.
    pub fn issue(
        &self,
        user_id: i32,
        email: &str,
        role: UserRole,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            role: role.to_value(),
            exp: (Utc::now() + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and return its claims. Expired or tampered tokens fail.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

#[derive(Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub email: String,
    pub role: String,
    pub exp: usize,
}

/// Authenticated request context, resolved once from the bearer token before
/// any handler logic runs.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: i32,
    pub role: UserRole,
}

impl AuthUser {
    /// Role gate returning the accepted roles and the caller's actual role
    /// so the forbidden response can name both.
    pub fn require_any_of(&self, roles: &[UserRole]) -> Result<(), AuthError> {
        if roles.contains(&self.role) {
            return Ok(());
        }

        Err(AuthError::Forbidden {
            required: roles.iter().map(|role| role.to_value()).collect(),
            current: self.role.to_value(),
        })
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        let claims = state.auth.verify(token)?;

        let role =
            UserRole::try_from_value(&claims.role).map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthUser {
            user_id: claims.sub,
            role,
        })
    }
}
