// RoundService against a migrated database and the in-memory round store.

use std::time::Duration;

use zooriddle::domain::Difficulty;
use zooriddle::errors::ErrorCode;
use zooriddle::services::rounds::RoundService;
use zooriddle::sessions::{MemoryRoundStore, RoundStateStore, SessionId};

use crate::support::build_test_state;
use crate::support::factory::{animal, seed_mixed_catalogue};

fn store() -> MemoryRoundStore {
    MemoryRoundStore::new(Duration::from_secs(300))
}

#[tokio::test]
async fn test_start_round_sets_answer_to_chosen_name() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().unwrap();
    seed_mixed_catalogue(db).await?;

    let store = store();
    let session = SessionId::generate();
    let service = RoundService::new();

    for tier in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let round = service.start_round(db, &store, &session, Some(tier)).await?;
        assert_eq!(round.animal.difficulty, tier);
        assert_eq!(
            store.current_answer(&session).await?.as_deref(),
            Some(round.animal.name.as_str())
        );
    }

    let round = service.start_round(db, &store, &session, None).await?;
    assert_eq!(
        store.current_answer(&session).await?,
        Some(round.animal.name.clone())
    );

    Ok(())
}

#[tokio::test]
async fn test_start_round_with_no_match_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().unwrap();
    animal("Lion").difficulty(Difficulty::Easy).insert(db).await?;

    let store = store();
    let session = SessionId::generate();
    let err = RoundService::new()
        .start_round(db, &store, &session, Some(Difficulty::Hard))
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::AnimalNotFound);
    assert_eq!(store.current_answer(&session).await?, None);

    Ok(())
}

#[tokio::test]
async fn test_guess_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().unwrap();
    animal("African Elephant").insert(db).await?;

    let store = store();
    let session = SessionId::generate();
    let service = RoundService::new();

    let verdict = service.check_guess(&store, &session, "elephant").await?;
    assert!(!verdict.correct);
    assert_eq!(verdict.message, "No active game");

    service.start_round(db, &store, &session, None).await?;

    let verdict = service.check_guess(&store, &session, "zebra").await?;
    assert!(!verdict.correct);
    assert_eq!(verdict.message, "Incorrect. Try again!");
    assert!(store.current_answer(&session).await?.is_some());

    let verdict = service.check_guess(&store, &session, "ELEPHANT").await?;
    assert!(verdict.correct);
    assert_eq!(verdict.message, "Correct! Well done!");
    assert_eq!(store.current_answer(&session).await?, None);

    let verdict = service.check_guess(&store, &session, "elephant").await?;
    assert_eq!(verdict.message, "No active game");

    Ok(())
}

#[tokio::test]
async fn test_concurrent_correct_guesses_win_once() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = state.db().unwrap();
    animal("Lion").insert(db).await?;

    let store = std::sync::Arc::new(store());
    let session = SessionId::generate();
    RoundService::new()
        .start_round(db, store.as_ref(), &session, None)
        .await?;

    let mut handles = Vec::new();
    for _ in 0..6 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            RoundService::new()
                .check_guess(store.as_ref(), &session, "lion")
                .await
                .map(|v| v.correct)
        }));
    }

    let mut wins = 0;
    for handle in handles {
        if handle.await?? {
            wins += 1;
        }
    }
    assert_eq!(wins, 1);

    Ok(())
}
