pub mod form_or_json;
pub mod game_session;

pub use form_or_json::FormOrJson;
pub use game_session::GameSession;
