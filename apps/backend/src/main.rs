use actix_web::{web, App, HttpServer};
use tracing::{error, info, warn};
use wordgame::config::game::{GameConfig, RotationMode};
use wordgame::infra::state::build_state;
use wordgame::middleware::cors::cors_middleware;
use wordgame::middleware::request_trace::RequestTrace;
use wordgame::middleware::structured_logger::StructuredLogger;
use wordgame::routes;
use wordgame::services::scheduler::RoundScheduler;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Configuration comes from the process environment only.
    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_config(config.clone()).build() {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    let scheduler = match config.rotation_mode {
        RotationMode::Scheduled => Some(RoundScheduler::start(
            app_state.rounds.clone(),
            config.settings.round_period(),
        )),
        RotationMode::Lazy => {
            warn!("Lazy rotation: the first /game-state query starts a round and rounds never rotate afterwards");
            None
        }
    };

    info!(host = %config.host, port = config.port, "Starting word game backend");

    let data = web::Data::new(app_state);

    let result = HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    if let Some(scheduler) = scheduler {
        scheduler.shutdown().await;
    }

    result
}
