//! Authentication boundary
//!
//! Verifies bearer JWTs and resolves them to a database user. The game
//! engine never authenticates anything itself; it only ever sees the
//! resulting user as an `{id, username}` pair.

use actix_web::error::ErrorInternalServerError;
use actix_web::{dev::Payload, http::header, web, Error, FromRequest, HttpRequest, HttpResponse};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, DecodingKey, Validation};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::env;

use crate::entity::users;
use crate::user_management::ensure_user_exists;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,      // Subject (external user ID)
    pub username: String, // Display name, unique per user
    pub exp: usize,       // Expiration time
    pub iat: usize,       // Issued at
}

/// The authenticated user behind the current request
#[derive(Debug, Clone)]
pub struct AuthedUser(pub users::Model);

pub(crate) fn jwt_secret() -> String {
    env::var("AUTH_SECRET").unwrap_or_else(|_| {
        tracing::warn!("AUTH_SECRET not set, using default secret");
        "change-me".to_string()
    })
}

fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let secret = jwt_secret();
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

fn unauthorized(message: &str) -> Error {
    actix_web::error::InternalError::from_response(
        message.to_string(),
        HttpResponse::Unauthorized()
            .content_type("application/json")
            .json(serde_json::json!({ "error": message })),
    )
    .into()
}

impl FromRequest for AuthedUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let token = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.strip_prefix("Bearer "))
                .ok_or_else(|| unauthorized("Missing Authorization header"))?
                .to_string();

            let claims = verify_token(&token).map_err(|_| unauthorized("Invalid token"))?;

            let db = req
                .app_data::<web::Data<DatabaseConnection>>()
                .cloned()
                .ok_or_else(|| ErrorInternalServerError("Database connection missing"))?;

            let user = ensure_user_exists(&db, &claims)
                .await
                .map_err(|_| ErrorInternalServerError("Failed to ensure user exists"))?;

            Ok(AuthedUser(user))
        })
    }
}
