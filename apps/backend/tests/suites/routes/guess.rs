// POST /api/guess

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{test, Error};
use backend_test_support::error_body::assert_error_body_from_service_response;
use serde_json::{json, Value};
use zooriddle::domain::Difficulty;

use crate::common::{assert_verdict, session_cookie};
use crate::support::factory::{animal, seed_mixed_catalogue};
use crate::support::{build_test_state, create_test_app};

const COOKIE: &str = "zooriddle_session";

/// Start a round and return the session cookie plus the round payload.
async fn start_round<S>(app: &S, uri: &str, cookie: Option<Cookie<'static>>) -> (Cookie<'static>, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let mut req = test::TestRequest::get().uri(uri);
    if let Some(c) = cookie.clone() {
        req = req.cookie(c);
    }
    let resp = test::call_service(app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = session_cookie(&resp, COOKIE)
        .or(cookie)
        .expect("session cookie should be issued on first contact");
    let body: Value = test::read_body_json(resp).await;
    (cookie, body)
}

async fn guess_form<S>(app: &S, cookie: &Cookie<'static>, guess: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/guess")
        .cookie(cookie.clone())
        .set_form(&[("guess", guess)])
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn test_guess_without_round_reports_no_active_game() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/api/guess")
        .set_form(&[("guess", "lion")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(session_cookie(&resp, COOKIE).is_some());

    let body: Value = test::read_body_json(resp).await;
    assert_verdict(&body, false, "No active game");

    Ok(())
}

#[actix_web::test]
async fn test_partial_guess_wins_then_round_is_over() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    animal("African Elephant").insert(state.db().unwrap()).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let (cookie, round) = start_round(&app, "/api/animal", None).await;
    assert_eq!(round["name"], "African Elephant");

    let verdict = guess_form(&app, &cookie, "elephant").await;
    assert_verdict(&verdict, true, "Correct! Well done!");

    let verdict = guess_form(&app, &cookie, "elephant").await;
    assert_verdict(&verdict, false, "No active game");

    Ok(())
}

#[actix_web::test]
async fn test_wrong_guess_keeps_round_for_retry() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    animal("Forest Giraffe Species").insert(state.db().unwrap()).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let (cookie, _) = start_round(&app, "/api/animal", None).await;

    let verdict = guess_form(&app, &cookie, "species").await;
    assert_verdict(&verdict, false, "Incorrect. Try again!");

    let verdict = guess_form(&app, &cookie, "  FOREST GIRAFFE SPECIES ").await;
    assert_verdict(&verdict, true, "Correct! Well done!");

    Ok(())
}

#[actix_web::test]
async fn test_json_guess_body() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    animal("Lion").insert(state.db().unwrap()).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let (cookie, _) = start_round(&app, "/api/animal", None).await;

    let req = test::TestRequest::post()
        .uri("/api/guess")
        .cookie(cookie)
        .set_json(json!({"guess": " LION "}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_verdict(&body, true, "Correct! Well done!");

    Ok(())
}

#[actix_web::test]
async fn test_missing_guess_counts_as_empty() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    animal("Lion").insert(state.db().unwrap()).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let (cookie, _) = start_round(&app, "/api/animal", None).await;

    let req = test::TestRequest::post()
        .uri("/api/guess")
        .cookie(cookie.clone())
        .insert_header(ContentType::form_url_encoded())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_verdict(&body, false, "Incorrect. Try again!");

    // The round survives the empty guess.
    let verdict = guess_form(&app, &cookie, "lion").await;
    assert_verdict(&verdict, true, "Correct! Well done!");

    Ok(())
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/api/guess")
        .insert_header(ContentType::json())
        .set_payload(r#"{"guess": "#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body_from_service_response(
        resp,
        "BAD_REQUEST",
        StatusCode::BAD_REQUEST,
        Some("Invalid JSON"),
    )
    .await;

    Ok(())
}

#[actix_web::test]
async fn test_only_latest_round_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    seed_mixed_catalogue(state.db().unwrap()).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let (cookie, first) = start_round(&app, "/api/animal?difficulty=easy", None).await;
    assert_eq!(first["name"], "Lion");
    let (cookie, second) =
        start_round(&app, "/api/animal?difficulty=hard", Some(cookie)).await;
    assert_eq!(second["name"], "Axolotl");

    let verdict = guess_form(&app, &cookie, "lion").await;
    assert_verdict(&verdict, false, "Incorrect. Try again!");

    let verdict = guess_form(&app, &cookie, "axolotl").await;
    assert_verdict(&verdict, true, "Correct! Well done!");

    Ok(())
}

#[actix_web::test]
async fn test_failed_round_start_keeps_previous_round() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    animal("Lion")
        .difficulty(Difficulty::Easy)
        .insert(state.db().unwrap())
        .await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let (cookie, _) = start_round(&app, "/api/animal?difficulty=easy", None).await;

    let req = test::TestRequest::get()
        .uri("/api/animal?difficulty=hard")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let verdict = guess_form(&app, &cookie, "lion").await;
    assert_verdict(&verdict, true, "Correct! Well done!");

    Ok(())
}
