//! Skill Router server binary.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skill_router::adapters::http::{skill_routes, SkillAppState};
use skill_router::adapters::{SkillContent, ThreadRandomSource};
use skill_router::application::{build_skill, SkillOptions};
use skill_router::config::{AppConfig, LogFormat, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?.validated()?;
    init_tracing(&config.server);

    let content = SkillContent::load(
        config.skill.strings_path.as_deref(),
        config.skill.facts_path.as_deref(),
        &config.skill.default_language,
    )?;
    let options = SkillOptions::from(&config.skill);
    let dispatcher = build_skill(&content, &options, Arc::new(ThreadRandomSource::new()))?;

    let state = SkillAppState::new(Arc::new(dispatcher), config.skill.fallback_locale.clone())
        .with_verbose_errors(config.features.verbose_errors);
    let app = skill_routes(state, Duration::from_secs(config.server.request_timeout_secs));

    let listener = TcpListener::bind(config.server.bind_address()).await?;
    let addr = listener.local_addr()?;
    info!(
        %addr,
        environment = ?config.server.environment,
        "Skill router listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Skill router stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; run until killed.
        std::future::pending::<()>().await;
    }
}
