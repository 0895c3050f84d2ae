//! Round service: starting rounds and judging guesses.

use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::domain::animal::AnimalRecord;
use crate::domain::difficulty::Difficulty;
use crate::domain::hints::Hints;
use crate::domain::matching;
use crate::domain::verdict::GuessVerdict;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::animals;
use crate::sessions::{RoundStateStore, SessionId};

/// A freshly started round: the chosen animal and its clues.
#[derive(Debug, Clone)]
pub struct RoundStart {
    pub animal: AnimalRecord,
    pub hints: Hints,
}

/// Round domain service.
#[derive(Debug, Default)]
pub struct RoundService;

impl RoundService {
    pub fn new() -> Self {
        Self
    }

    /// Pick a random animal and make its name the session's active answer.
    ///
    /// Any previous round in the session is replaced. Fails with
    /// `ANIMAL_NOT_FOUND` when nothing matches the filter; the session is
    /// left untouched in that case.
    pub async fn start_round<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        store: &dyn RoundStateStore,
        session: &SessionId,
        difficulty: Option<Difficulty>,
    ) -> Result<RoundStart, AppError> {
        let animal = animals::pick_random(conn, difficulty)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Animal,
                    match difficulty {
                        Some(d) => format!("No animals found for difficulty '{}'", d.as_str()),
                        None => "No animals found".to_string(),
                    },
                )
            })?;

        store.begin_round(session, &animal.name).await?;

        info!(
            animal_id = animal.id,
            difficulty = animal.difficulty.as_str(),
            filter = difficulty.map(|d| d.as_str()).unwrap_or("any"),
            "round.started"
        );

        let hints = Hints::for_animal(&animal);
        Ok(RoundStart { animal, hints })
    }

    /// Judge a guess against the session's active answer.
    ///
    /// A correct guess ends the round. Incorrect guesses leave it in place so
    /// the player can retry.
    pub async fn check_guess(
        &self,
        store: &dyn RoundStateStore,
        session: &SessionId,
        guess: &str,
    ) -> Result<GuessVerdict, AppError> {
        let Some(answer) = store.current_answer(session).await? else {
            info!("guess.no_active_round");
            return Ok(GuessVerdict::no_active_game());
        };

        let outcome = matching::evaluate(&answer, guess);
        if !outcome.is_correct() {
            info!(correct = false, "guess.evaluated");
            return Ok(GuessVerdict::incorrect());
        }

        // Another request may have cleared or replaced the round since we read it.
        if !store.clear_if(session, &answer).await? {
            debug!("guess.clear_lost_race");
            info!("guess.no_active_round");
            return Ok(GuessVerdict::no_active_game());
        }

        info!(correct = true, outcome = outcome.as_str(), "guess.evaluated");
        Ok(GuessVerdict::correct())
    }
}
