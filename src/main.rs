use anyhow::Context;
use application::UtilityApp;
use config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional explicit .env path as the first argument
    let env_path = std::env::args().nth(1);
    let config = Config::from_env(env_path.as_deref()).context("loading configuration")?;

    // Initialize tracing for logging
    tracing_subscriber::fmt().with_env_filter(log_filter(&config)?).init();

    tracing::info!(
        log_level = %config.log_level,
        user_id_strategy = %config.user_id_strategy,
        "configuration loaded"
    );

    let app = UtilityApp::new(&config);

    let flags = app.team_planning_service.retrieve_configuration();
    for (key, value) in &flags {
        tracing::info!(key = %key, value = ?value, "team planning flag");
    }

    let users = app.user_service.get_all_users().await?;
    tracing::info!(users = users.len(), "user registry ready");

    Ok(())
}

/// Log filter built from the configured `LOG_LEVEL` directives.
fn log_filter(config: &Config) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("invalid LOG_LEVEL: {}", config.log_level))
}
