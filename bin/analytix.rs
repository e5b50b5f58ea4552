use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use jemallocator::Jemalloc;
use log::{error, info, warn};
use simple_logger::SimpleLogger;
use tokio_util::sync::CancellationToken;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use analytix::{dashboard::Severity, export::ExportOptions, Dashboard, Settings};

#[tokio::main()]
async fn main() -> anyhow::Result<()> {
    // Load configuration (config.yaml is optional, every key has a default)
    let settings = Settings::new().context("Failed to load configuration")?;

    SimpleLogger::new()
        .with_level(settings.logging.level_filter())
        .init()
        .context("Failed to initialize logger")?;

    let dashboard = Arc::new(Dashboard::from_settings(&settings));

    info!("Loading dashboard data...");
    dashboard.load().await;

    // Show the biggest orders first
    dashboard.sort_table("revenue").await;
    dashboard.sort_table("revenue").await;

    report(&dashboard).await;

    if settings.export.enabled {
        let options = ExportOptions {
            date_range: settings.export.date_range,
            ..Default::default()
        };
        dashboard.export(settings.export.format, options).await;
        log_notices(&dashboard).await;
    }

    let cancellation_token = CancellationToken::new();

    let refresh_token = cancellation_token.child_token();
    let refresh_dashboard = dashboard.clone();
    let refresh_interval = Duration::from_secs(settings.dashboard.refresh_interval_secs.max(1));
    let refresh_handle = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = refresh_token.cancelled() => break,
                _ = tokio::time::sleep(refresh_interval) => {
                    info!("Refreshing dashboard data...");
                    refresh_dashboard.load().await;
                    report(&refresh_dashboard).await;
                }
            }
        }
    });

    info!(
        "Dashboard running, refreshing every {}s. Press Ctrl+C to stop.",
        refresh_interval.as_secs()
    );

    #[cfg(unix)]
    let mut sigterm_stream = {
        use tokio::signal::unix::{signal, SignalKind};
        signal(SignalKind::terminate()).context("Failed to install SIGTERM handler")?
    };

    #[cfg(unix)]
    {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal (Ctrl+C), exiting gracefully...");
            },
            _ = sigterm_stream.recv() => {
                info!("Received SIGTERM, exiting gracefully...");
            },
        };
    }

    #[cfg(not(unix))]
    {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal (Ctrl+C), exiting gracefully...");
            },
        };
    }

    cancellation_token.cancel();

    if let Err(e) = refresh_handle.await {
        error!("Refresh task failed: {}", e);
    }

    info!("Shutdown complete");
    Ok(())
}

/// Log every widget view for the current snapshot.
async fn report(dashboard: &Dashboard) {
    for card in dashboard.metric_cards().await {
        info!(
            "{}: {} ({:?} {})",
            card.title, card.value, card.trend, card.change_label
        );
    }

    let chart = dashboard.chart_view().await;
    info!(
        "{} ({} tab, {} months, zoom {:.1}x)",
        chart.chart_type,
        chart.tab.label(),
        chart.points.len(),
        chart.zoom
    );

    let table = dashboard.table_view().await;
    match table.summary() {
        Some(summary) => info!(
            "Orders, page {} of {} ({})",
            table.page, table.total_pages, summary
        ),
        None => info!("Orders: {}", table.empty_message.unwrap_or_default()),
    }
    for cells in &table.cells {
        info!("  {}", cells.join(" | "));
    }

    for view in dashboard.insights().await {
        info!(
            "[{}] {}",
            view.insight.impact.badge(),
            view.insight.title
        );
    }

    log_notices(dashboard).await;
}

async fn log_notices(dashboard: &Dashboard) {
    for notice in dashboard.drain_notices().await {
        match notice.severity {
            Severity::Destructive => warn!("{}: {}", notice.title, notice.description),
            Severity::Info => info!("{}: {}", notice.title, notice.description),
        }
    }
}
