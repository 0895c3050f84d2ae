use std::time::Duration;

/// Settings for the session cookie and the lifetime of stored round state.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub cookie_secure: bool,
    /// Idle lifetime of a session's round state; also the cookie Max-Age.
    pub ttl: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "zooriddle_session".to_string(),
            cookie_secure: false,
            ttl: Duration::from_secs(24 * 60 * 60),
        }
    }
}
