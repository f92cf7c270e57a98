use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};
use wordgame::config::game::GameConfig;
use wordgame::infra::state::build_state;
use wordgame::middleware::request_trace::RequestTrace;
use wordgame::middleware::structured_logger::StructuredLogger;
use wordgame::routes;
use wordgame::{AppState, ManualClock, WordList};

pub const T0: OffsetDateTime = datetime!(2024-05-01 12:00:00 UTC);

/// App state driven by a manual clock starting at [`T0`].
pub struct TestGame {
    pub state: AppState,
    pub clock: Arc<ManualClock>,
}

impl TestGame {
    /// Move the clock to `secs` seconds after [`T0`].
    pub fn at(&self, secs: i64) {
        self.clock.set(T0 + Duration::seconds(secs));
    }

    pub fn clock_time(&self) -> OffsetDateTime {
        self.state.rounds.now()
    }

    /// Start a round at the current clock time.
    pub fn start_round(&self) {
        let rounds = &self.state.rounds;
        rounds.start_new_round(rounds.now());
    }
}

/// Unscrambled words, reference timing (120/92/95), fixed seed.
pub fn test_game(words: &[&str]) -> TestGame {
    let clock = Arc::new(ManualClock::new(T0));
    let config = GameConfig {
        scramble_words: false,
        ..GameConfig::default()
    };
    let state = build_state()
        .with_config(config)
        .with_words(WordList::new(words.iter().copied()).expect("non-empty word list"))
        .with_clock(clock.clone())
        .with_seed(7)
        .build()
        .expect("build test state");

    TestGame { state, clock }
}

/// Initialize the production routes and logging middleware over `state`.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
