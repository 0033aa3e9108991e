// Main entry point - Dependency injection and page rendering
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::io::Write;
use std::sync::Arc;

use crate::application::dashboard_service::DashboardImageService;
use crate::infrastructure::cloudwatch_repository::CloudWatchRepository;
use crate::infrastructure::config::load_settings;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::rate_limiter::RateLimitedRepository;
use crate::presentation::cli::Cli;
use crate::presentation::html_page::PageRenderer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_or_exit();

    // Load configuration
    let settings = load_settings()?;
    init_logging(settings.render.debug);

    // Create repository (infrastructure layer)
    let repository = match CloudWatchRepository::connect(&settings.aws).await {
        Ok(repository) => repository,
        Err(e) => {
            tracing::error!("Client error: {}", e);
            std::process::exit(1);
        }
    };
    let repository =
        RateLimitedRepository::wrap(Arc::new(repository), settings.render.requests_per_second);

    // Create services (application layer)
    let service = DashboardImageService::new(repository).with_widget_tracing(settings.render.debug);
    let renderer = PageRenderer::new(service);

    let page = renderer.render_page(&cli.selection()).await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(page.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
