// Demo server: JSON signup endpoint validated with rusty-valid
// Run with: cargo run -p rusty-valid-axum --example signup
//
//   curl -X POST localhost:3000/signup -H 'content-type: application/json' \
//        -d '{"username":"x","email":"bad","age":12,"birthday":"2999-01-01T00:00:00Z"}'

use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use rusty_valid::chrono::{DateTime, Utc};
use rusty_valid::{Valid, ValidConfig};
use rusty_valid_axum::{RespondExt, ValidationRejection};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
struct SignupForm {
    username: String,
    email: String,
    age: i64,
    birthday: DateTime<Utc>,
}

async fn signup(
    State(config): State<Arc<ValidConfig>>,
    Json(form): Json<SignupForm>,
) -> Result<StatusCode, ValidationRejection> {
    let mut valid = Valid::from_config(&config);
    valid
        .text(&form.username, "username")
        .required()
        .min(3)
        .max(20)
        .alpha_numeric();
    valid.text(&form.email, "email").required().email();
    valid.number(form.age, "age").required().min(18);
    valid.time(form.birthday, "birthday").required().past();

    valid.report().respond()?;

    info!(username = %form.username, "signed up");
    Ok(StatusCode::CREATED)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Arc::new(ValidConfig::load_default()?);
    let app = Router::new()
        .route("/signup", post(signup))
        .with_state(config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
