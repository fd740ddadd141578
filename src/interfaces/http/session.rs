//! Session cookie handling
//!
//! The session token lives in an HttpOnly cookie named [`SESSION_COOKIE`].
//! Signing out replaces it with a removal cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::infrastructure::crypto::jwt::JwtConfig;

pub const SESSION_COOKIE: &str = "spa_session";

/// Settings needed to issue and read session cookies
#[derive(Clone)]
pub struct SessionSettings {
    pub jwt_config: JwtConfig,
    /// Adds the `Secure` attribute
    pub secure: bool,
}

impl SessionSettings {
    pub fn new(jwt_config: JwtConfig, secure: bool) -> Self {
        Self { jwt_config, secure }
    }

    /// Cookie carrying `token`, valid for the session lifetime
    pub fn session_cookie(&self, token: impl Into<String>) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, token.into()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(time::Duration::seconds(self.jwt_config.expires_in_seconds()))
            .build()
    }

    /// Jar that expires the session cookie in the browser. The removal is
    /// sent even when the request carried no session.
    pub fn sign_out(&self, jar: CookieJar) -> CookieJar {
        let mut removal = Cookie::build((SESSION_COOKIE, ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .build();
        removal.make_removal();
        jar.add(removal)
    }
}

/// Session token from the request cookies, if present and non-empty.
pub fn read_session_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value_trimmed())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
