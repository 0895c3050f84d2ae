//! Game HTTP routes: starting a round and submitting guesses.

use actix_web::{web, HttpRequest, HttpResponse, HttpResponseBuilder};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::domain::difficulty::Difficulty;
use crate::domain::hints::Hints;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{FormOrJson, GameSession};
use crate::services::rounds::{RoundService, RoundStart};
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
struct AnimalQuery {
    difficulty: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GuessInput {
    #[serde(default)]
    pub guess: Option<String>,
}

/// Round payload. Carries the answer itself; the client hides it until the
/// round ends.
#[derive(Debug, Serialize)]
pub struct AnimalRoundResponse {
    pub id: i64,
    pub name: String,
    pub scientific_name: String,
    pub weight: String,
    pub description: String,
    pub image_path: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub difficulty: Difficulty,
    pub conservation_status: Option<String>,
    pub habitats: Option<String>,
    #[serde(flatten)]
    pub hints: Hints,
}

impl From<RoundStart> for AnimalRoundResponse {
    fn from(round: RoundStart) -> Self {
        let habitats = round.animal.habitats_display();
        let animal = round.animal;
        Self {
            id: animal.id,
            name: animal.name,
            scientific_name: animal.scientific_name,
            weight: animal.weight,
            description: animal.description,
            image_path: animal.image_path,
            type_name: animal.type_name,
            difficulty: animal.difficulty,
            conservation_status: animal.conservation_status,
            habitats,
            hints: round.hints,
        }
    }
}

fn respond_ok(session: &GameSession, app_state: &AppState) -> HttpResponseBuilder {
    let mut builder = HttpResponse::Ok();
    if let Some(cookie) = session.cookie(app_state.session_config()) {
        builder.cookie(cookie);
    }
    builder
}

/// GET /api/animal?difficulty=easy|medium|hard
///
/// Starts a new round for the caller's session and returns the animal with
/// its four hints.
async fn start_round(
    req: HttpRequest,
    session: GameSession,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = web::Query::<AnimalQuery>::from_query(req.query_string())
        .map_err(|_| AppError::bad_request(ErrorCode::BadRequest, "Invalid query string"))?;
    let difficulty = Difficulty::parse_filter(query.difficulty.as_deref())?;

    let db = require_db(&app_state)?;
    let round = RoundService::new()
        .start_round(db, app_state.round_store().as_ref(), &session.id, difficulty)
        .await?;

    Ok(respond_ok(&session, &app_state).json(AnimalRoundResponse::from(round)))
}

/// POST /api/guess
///
/// Accepts `guess` as a form field or JSON member. A missing guess counts as
/// the empty string.
async fn submit_guess(
    session: GameSession,
    body: FormOrJson<GuessInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let guess = body.into_inner().guess.unwrap_or_default();

    let verdict = RoundService::new()
        .check_guess(app_state.round_store().as_ref(), &session.id, &guess)
        .await?;

    Ok(respond_ok(&session, &app_state).json(verdict))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/animal", web::get().to(start_round))
        .route("/guess", web::post().to(submit_guess));
}
