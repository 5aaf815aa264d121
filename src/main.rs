use tracing_subscriber::EnvFilter;

use siglad::server::{
    config::Config,
    model::{app::AppState, auth::AuthKeys},
    router, startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("siglad=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to connect to database");

    let state = AppState {
        db,
        auth: AuthKeys::from_secret(config.jwt_secret.as_bytes()),
    };

    let router = router::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, router)
        .await
        .expect("Server exited with an error");
}
