//! Anonymous client identity carried in a long-lived cookie.
//!
//! Every request passes through [`assign_identity`]. A request without a
//! valid identifier gets a fresh [`ClientId`], an empty namespace and a
//! `Set-Cookie` on the way out. Handlers read the id from request
//! extensions.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use oddbook_shared::constants::{CLIENT_COOKIE, CLIENT_COOKIE_MAX_AGE_DAYS};
use oddbook_shared::ClientId;
use tracing::info;

use crate::api::AppState;
use crate::error::ServerError;

/// Response extension set by a handler that revoked the client cookie, so
/// the middleware does not hand out a new one on the same response.
#[derive(Debug, Clone, Copy)]
pub struct Revoked;

pub async fn assign_identity(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let known = jar
        .get(CLIENT_COOKIE)
        .and_then(|cookie| cookie.value().parse::<ClientId>().ok());

    let (client, issued) = match known {
        Some(client) => (client, false),
        None => {
            let client = ClientId::new();
            if let Err(e) = state.store.namespace(&client).ensure().await {
                return ServerError::storage("Failed to initialize client", e).into_response();
            }
            info!(client = %client, "Issued client identifier");
            (client, true)
        }
    };

    req.extensions_mut().insert(client);
    let response = next.run(req).await;

    if !issued || response.extensions().get::<Revoked>().is_some() {
        return response;
    }

    let cookie = client_cookie(client, state.config.cookie_secure);
    (jar.add(cookie), response).into_response()
}

/// `HttpOnly` cookie holding the client id for one year.
pub fn client_cookie(client: ClientId, secure: bool) -> Cookie<'static> {
    Cookie::build((CLIENT_COOKIE, client.to_string()))
        .path("/")
        .max_age(time::Duration::days(CLIENT_COOKIE_MAX_AGE_DAYS))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Expire the client cookie.
pub fn revoke(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(CLIENT_COOKIE).path("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_cookie_attributes() {
        let client = ClientId::new();
        let cookie = client_cookie(client, false);

        assert_eq!(cookie.name(), CLIENT_COOKIE);
        assert_eq!(cookie.value(), client.to_string());
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(365)));
        assert_ne!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_secure_flag() {
        assert_eq!(client_cookie(ClientId::new(), true).secure(), Some(true));
    }
}
