use service_core::observability::init_tracing;
use site_service::config::SiteConfig;
use site_service::services::init_metrics;
use site_service::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SiteConfig::load()?;

    init_tracing(
        "site-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    )?;
    init_metrics();

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
