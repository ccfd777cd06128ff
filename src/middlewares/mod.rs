use actix_web::HttpRequest;
use async_graphql::{Context, ErrorExtensions};

use crate::{api::error, utils::Claims};

/// Request-scoped caller identity, decoded from the bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: uuid::Uuid,
    pub username: String,
    pub email: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        AuthUser { id: claims.sub, username: claims.username, email: claims.email }
    }
}

/// Builds the per-request identity from the `Authorization: Bearer <token>`
/// header. A missing header, malformed value, bad signature, or expired token
/// all yield `None` — the request proceeds without identity and the failure
/// surfaces per-resolver when a gated field is accessed.
pub fn authenticate(req: &HttpRequest, secret: &[u8]) -> Option<AuthUser> {
    let auth = req.headers().get("Authorization")?.to_str().ok()?;
    let token = auth.strip_prefix("Bearer ")?;

    match Claims::decode(token, secret) {
        Ok(claims) => Some(AuthUser::from(claims)),
        Err(_) => {
            log::debug!("Rejected bearer token");
            None
        }
    }
}

pub fn require_auth<'a>(
    ctx: &Context<'a>,
    msg: &'static str,
) -> async_graphql::Result<&'a AuthUser> {
    ctx.data_opt::<AuthUser>()
        .ok_or_else(|| error::Error::unauthenticated(msg).extend())
}
