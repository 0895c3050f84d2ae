use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::{error, info};
use zooriddle::config::app::Config;
use zooriddle::infra::state::build_state;
use zooriddle::middleware::{
    cors_middleware, RequestTrace, SecurityHeaders, StructuredLogger, TraceSpan,
};
use zooriddle::routes;
use zooriddle::sessions::{MemoryRoundStore, RedisRoundStore, RoundStateStore};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "startup.config_invalid");
            std::process::exit(1);
        }
    };

    let rounds: Arc<dyn RoundStateStore> = match config.redis_url.as_deref() {
        Some(url) => match RedisRoundStore::connect(url, config.session.ttl).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                error!(error = %e, "startup.redis_unavailable");
                std::process::exit(1);
            }
        },
        None => Arc::new(MemoryRoundStore::new(config.session.ttl)),
    };

    let app_state = match build_state()
        .with_db(config.db_profile.clone())
        .with_session_config(config.session.clone())
        .with_round_store(rounds)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "startup.state_failed");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        sessions = app_state.round_store().backend(),
        "startup.listening"
    );

    let data = web::Data::new(app_state);
    let origins = config.cors_allowed_origins.clone();

    // Last `wrap` runs first: RequestTrace must see the request before everything else.
    HttpServer::new(move || {
        App::new()
            .wrap(TraceSpan)
            .wrap(StructuredLogger)
            .wrap(SecurityHeaders)
            .wrap(cors_middleware(&origins))
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
