use std::env;

use actix_cors::Cors;
use actix_web::http::header;

use crate::middleware::request_trace::REQUEST_ID_HEADER;

/// CORS for browser clients.
///
/// Origins come from `CORS_ALLOWED_ORIGINS` (comma-separated, `http(s)://`
/// only); without any valid entry only the local dev frontend is allowed.
pub fn cors_middleware() -> Cors {
    let allowed_origins = parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

    let effective_origins = if allowed_origins.is_empty() {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    } else {
        allowed_origins
    };

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            header::HeaderName::from_static("x-trace-id"),
        ])
        .max_age(3600);

    for origin in effective_origins {
        cors = cors.allowed_origin(&origin);
    }

    cors
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}
