pub mod healthcheck;
pub mod submit_score;
