use conversation_prompter::{
    config::{get_config, init_config},
    database::pool::{create_pool, run_migrations},
    routes::{self, RateLimits},
    telemetry::init_tracing,
    AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();
    init_tracing(config.log_format);

    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;
    info!("Database migrations applied");

    let app_state = AppState::new(pool, config)?;
    info!(model = %config.anthropic_model, "Anthropic client configured");

    let app = routes::router(
        app_state,
        RateLimits {
            api_rps: config.api_rps,
            generate_rps: config.generate_rps,
        },
    );

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
