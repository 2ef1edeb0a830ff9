mod model;
mod server;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, router, service::token::TokenService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let token_service = TokenService::new(&config.jwt_secret)?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, token_service, config.bcrypt_cost);

    let app = router::router(&state)
        .with_state(state)
        .layer(startup::cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
