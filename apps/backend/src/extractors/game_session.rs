use std::future::{ready, Ready};

use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use tracing::debug;

use crate::error::AppError;
use crate::sessions::SessionId;
use crate::state::app_state::AppState;
use crate::state::session_config::SessionConfig;

/// The caller's game session, resolved from the session cookie.
///
/// A missing or malformed cookie yields a fresh session; the handler must
/// then send `cookie()` back so the browser keeps it.
#[derive(Debug, Clone, Copy)]
pub struct GameSession {
    pub id: SessionId,
    pub is_new: bool,
}

impl GameSession {
    fn resolve(req: &HttpRequest, config: &SessionConfig) -> Self {
        match req
            .cookie(&config.cookie_name)
            .and_then(|c| SessionId::parse(c.value()))
        {
            Some(id) => Self { id, is_new: false },
            None => {
                let id = SessionId::generate();
                debug!("session.issued");
                Self { id, is_new: true }
            }
        }
    }

    /// `Set-Cookie` to attach to the response, only for newly issued sessions.
    pub fn cookie(&self, config: &SessionConfig) -> Option<Cookie<'static>> {
        self.is_new.then(|| new_cookie(&self.id, config))
    }
}

pub fn new_cookie(id: &SessionId, config: &SessionConfig) -> Cookie<'static> {
    let max_age = i64::try_from(config.ttl.as_secs()).unwrap_or(i64::MAX);
    Cookie::build(config.cookie_name.clone(), id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(CookieDuration::seconds(max_age))
        .finish()
}

impl FromRequest for GameSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| AppError::internal("AppState not available"))
            .map(|state| Self::resolve(req, state.session_config()));
        ready(result)
    }
}
