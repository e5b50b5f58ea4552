use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, error, info};
use tokio::sync::{Mutex, RwLock};

use super::cards::{metric_cards, MetricCard};
use super::chart::{ChartState, ChartTab, ChartType, ChartView};
use super::filters::FilterState;
use super::insights::{insight_views, ExpandedInsights, InsightView};
use super::notice::Notice;
use super::table::{TableView, ORDER_COLUMNS};
use crate::config::{DashboardSettings, Settings};
use crate::export::{ExportFormat, ExportOptions, ExportRequest, Exporter, LogExporter};
use crate::generator::{MockDataGenerator, SnapshotSource};
use crate::models::Snapshot;
use crate::table::TableState;

/// Everything the dashboard owns. Widgets only ever see copies.
#[derive(Debug, Default)]
struct DashboardState {
    snapshot: Snapshot,
    is_loading: bool,
    filters: FilterState,
    chart: ChartState,
    table: TableState,
    expanded: ExpandedInsights,
    notices: Vec<Notice>,
}

/// Owns the canonical snapshot and all view state.
///
/// Every load is tagged with a request id. Only the response for the most
/// recently issued id is committed, so a slow early load can never overwrite
/// the result of a later one.
pub struct Dashboard {
    source: Mutex<Box<dyn SnapshotSource>>,
    exporter: Arc<dyn Exporter>,
    state: RwLock<DashboardState>,
    latest_request: AtomicU64,
    settings: DashboardSettings,
}

impl Dashboard {
    pub fn new(
        source: Box<dyn SnapshotSource>,
        exporter: Arc<dyn Exporter>,
        settings: DashboardSettings,
    ) -> Self {
        Self {
            source: Mutex::new(source),
            exporter,
            state: RwLock::new(DashboardState::default()),
            latest_request: AtomicU64::new(0),
            settings,
        }
    }

    /// Dashboard backed by the mock generator and the logging exporter.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Box::new(MockDataGenerator::from_settings(&settings.generator)),
            Arc::new(LogExporter),
            settings.dashboard.clone(),
        )
    }

    // ============================================
    // Loading
    // ============================================

    /// Initial load: generate, then wait out the simulated latency.
    ///
    /// Returns true if this request's result was committed.
    pub async fn load(&self) -> bool {
        let request_id = self.issue_request().await;
        let result = self.generate().await;
        tokio::time::sleep(Duration::from_millis(self.settings.load_latency_ms)).await;
        self.commit(request_id, result).await
    }

    /// Record a new filter selection and regenerate.
    pub async fn set_filters(&self, filters: FilterState) -> bool {
        info!("Filters changed: {:?}", filters);
        self.state.write().await.filters = filters;

        let request_id = self.issue_request().await;
        tokio::time::sleep(Duration::from_millis(self.settings.filter_latency_ms)).await;
        let result = self.generate().await;
        self.commit(request_id, result).await
    }

    pub async fn clear_filters(&self) -> bool {
        self.set_filters(FilterState::default()).await
    }

    async fn issue_request(&self) -> u64 {
        let mut state = self.state.write().await;
        state.is_loading = true;
        self.latest_request.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn generate(&self) -> Result<Snapshot> {
        let today = Utc::now().date_naive();
        self.source
            .lock()
            .await
            .generate(today)
            .context("Failed to generate dashboard snapshot")
    }

    async fn commit(&self, request_id: u64, result: Result<Snapshot>) -> bool {
        let mut state = self.state.write().await;

        let latest = self.latest_request.load(Ordering::SeqCst);
        if request_id != latest {
            debug!(
                "Dropping stale snapshot for request {} (latest is {})",
                request_id, latest
            );
            return false;
        }

        match result {
            Ok(snapshot) => {
                info!(
                    "Loaded snapshot {}: {} orders, {} insights",
                    request_id,
                    snapshot.table_data.len(),
                    snapshot.insights.len()
                );
                state.snapshot = snapshot;
            },
            Err(e) => {
                // Keep whatever snapshot we already have
                error!("Error fetching data: {:#}", e);
                state
                    .notices
                    .push(Notice::error("Error", "Failed to load dashboard data"));
            },
        }

        state.is_loading = false;
        true
    }

    // ============================================
    // Views
    // ============================================

    pub async fn snapshot(&self) -> Snapshot {
        self.state.read().await.snapshot.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }

    pub async fn filters(&self) -> FilterState {
        self.state.read().await.filters
    }

    pub async fn metric_cards(&self) -> [MetricCard; 4] {
        metric_cards(&self.state.read().await.snapshot.metrics)
    }

    pub async fn chart_view(&self) -> ChartView {
        let state = self.state.read().await;
        ChartView::build(&state.chart, &state.snapshot.chart, state.is_loading)
    }

    pub async fn table_view(&self) -> TableView {
        let state = self.state.read().await;
        TableView::build(&state.table, &state.snapshot.table_data, &ORDER_COLUMNS)
    }

    pub async fn insights(&self) -> Vec<InsightView> {
        let state = self.state.read().await;
        insight_views(&state.snapshot.insights, &state.expanded)
    }

    /// Take all pending notices, oldest first.
    pub async fn drain_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut self.state.write().await.notices)
    }

    // ============================================
    // Chart panel
    // ============================================

    pub async fn set_chart_type(&self, chart_type: ChartType) {
        self.state.write().await.chart.set_chart_type(chart_type);
    }

    pub async fn set_chart_tab(&self, tab: ChartTab) {
        self.state.write().await.chart.set_tab(tab);
    }

    /// Returns the new zoom factor.
    pub async fn zoom_in(&self) -> f64 {
        self.state.write().await.chart.zoom_in()
    }

    /// Returns the new zoom factor.
    pub async fn zoom_out(&self) -> f64 {
        self.state.write().await.chart.zoom_out()
    }

    /// Back to 1x, as when the viewport is resized.
    pub async fn reset_chart_zoom(&self) {
        self.state.write().await.chart.reset_zoom();
    }

    pub async fn download_chart(&self) {
        let mut state = self.state.write().await;
        info!("Downloading {} as PNG", state.chart.chart_type());
        state.notices.push(Notice::info(
            "Chart Downloaded",
            "Your chart has been downloaded as a PNG file.",
        ));
    }

    // ============================================
    // Table and insight interaction
    // ============================================

    pub async fn search_table(&self, query: &str) {
        self.state.write().await.table.set_query(query);
    }

    /// Returns false if `key` is not a sortable order column.
    pub async fn sort_table(&self, key: &str) -> bool {
        self.state.write().await.table.toggle_sort(&ORDER_COLUMNS, key)
    }

    pub async fn set_table_page(&self, page: usize) {
        self.state.write().await.table.set_page(page);
    }

    pub async fn next_table_page(&self) {
        let mut state = self.state.write().await;
        let total_pages = state.table.view(&state.snapshot.table_data).total_pages;
        state.table.next_page(total_pages);
    }

    pub async fn prev_table_page(&self) {
        self.state.write().await.table.prev_page();
    }

    /// Returns whether the insight is expanded afterwards.
    pub async fn toggle_insight(&self, id: &str) -> bool {
        self.state.write().await.expanded.toggle(id)
    }

    // ============================================
    // Export
    // ============================================

    /// Hand the current snapshot to the exporter.
    pub async fn export(&self, format: ExportFormat, options: ExportOptions) -> bool {
        let description = format!(
            "Your report has been exported as a {} file.",
            format.as_str().to_uppercase()
        );
        self.run_export(format, options, Notice::info("Report Exported", description))
            .await
    }

    /// Quick CSV export of the order rows.
    pub async fn export_table(&self) -> bool {
        self.run_export(
            ExportFormat::Csv,
            ExportOptions::raw_data_only(),
            Notice::info("Data Exported", "Your data has been exported as a CSV file."),
        )
        .await
    }

    async fn run_export(&self, format: ExportFormat, options: ExportOptions, success: Notice) -> bool {
        let mut state = self.state.write().await;

        let request = ExportRequest {
            format,
            options: &options,
            snapshot: &state.snapshot,
        };
        let result = self.exporter.export(&request);

        match result {
            Ok(()) => {
                state.notices.push(success);
                true
            },
            Err(e) => {
                error!("Failed to export {} report: {:#}", format, e);
                state
                    .notices
                    .push(Notice::error("Export Failed", "Failed to export report"));
                false
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use anyhow::anyhow;
    use chrono::NaiveDate;

    use super::*;
    use crate::dashboard::notice::Severity;

    fn fast_settings() -> DashboardSettings {
        DashboardSettings {
            load_latency_ms: 0,
            filter_latency_ms: 0,
            refresh_interval_secs: 1,
        }
    }

    fn seeded_dashboard() -> Dashboard {
        Dashboard::new(
            Box::new(MockDataGenerator::with_seed(21)),
            Arc::new(LogExporter),
            fast_settings(),
        )
    }

    /// Stamps each snapshot with its call number in `total_orders`.
    struct CountingSource {
        calls: u64,
    }

    impl SnapshotSource for CountingSource {
        fn generate(&mut self, _today: NaiveDate) -> Result<Snapshot> {
            self.calls += 1;
            let mut snapshot = Snapshot::default();
            snapshot.metrics.total_orders = self.calls;
            Ok(snapshot)
        }
    }

    /// Succeeds once, then fails every time.
    struct FlakySource {
        inner: MockDataGenerator,
        served: bool,
    }

    impl SnapshotSource for FlakySource {
        fn generate(&mut self, today: NaiveDate) -> Result<Snapshot> {
            if self.served {
                return Err(anyhow!("upstream unavailable"));
            }
            self.served = true;
            self.inner.generate(today)
        }
    }

    #[derive(Default)]
    struct RecordingExporter {
        formats: StdMutex<Vec<ExportFormat>>,
    }

    impl Exporter for RecordingExporter {
        fn export(&self, request: &ExportRequest<'_>) -> Result<()> {
            self.formats.lock().unwrap().push(request.format);
            Ok(())
        }
    }

    struct FailingExporter;

    impl Exporter for FailingExporter {
        fn export(&self, _request: &ExportRequest<'_>) -> Result<()> {
            Err(anyhow!("disk full"))
        }
    }

    #[tokio::test]
    async fn test_starts_with_zeroed_snapshot() {
        let dashboard = seeded_dashboard();
        assert!(dashboard.snapshot().await.is_empty());
        assert!(!dashboard.is_loading().await);
    }

    #[tokio::test]
    async fn test_load_replaces_snapshot() {
        let dashboard = seeded_dashboard();

        assert!(dashboard.load().await);
        let snapshot = dashboard.snapshot().await;
        assert_eq!(snapshot.table_data.len(), 20);
        assert_eq!(snapshot.chart.len(), 12);
        assert_eq!(snapshot.insights.len(), 4);
        assert!(!dashboard.is_loading().await);
        assert!(dashboard.drain_notices().await.is_empty());
    }

    #[tokio::test]
    async fn test_stale_load_is_dropped() {
        let settings = DashboardSettings {
            load_latency_ms: 50,
            filter_latency_ms: 0,
            refresh_interval_secs: 1,
        };
        let dashboard = Dashboard::new(
            Box::new(CountingSource { calls: 0 }),
            Arc::new(LogExporter),
            settings,
        );

        // The load is issued first but finishes last
        let (load_committed, filter_committed) = tokio::join!(
            dashboard.load(),
            dashboard.set_filters(FilterState::default())
        );

        assert!(!load_committed);
        assert!(filter_committed);
        assert_eq!(dashboard.snapshot().await.metrics.total_orders, 2);
        assert!(!dashboard.is_loading().await);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_last_snapshot_and_notifies() {
        let dashboard = Dashboard::new(
            Box::new(FlakySource {
                inner: MockDataGenerator::with_seed(4),
                served: false,
            }),
            Arc::new(LogExporter),
            fast_settings(),
        );

        assert!(dashboard.load().await);
        let good = dashboard.snapshot().await;

        assert!(dashboard.load().await);
        assert_eq!(dashboard.snapshot().await, good);
        assert!(!dashboard.is_loading().await);

        let notices = dashboard.drain_notices().await;
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Error");
        assert_eq!(notices[0].description, "Failed to load dashboard data");
        assert_eq!(notices[0].severity, Severity::Destructive);
    }

    #[tokio::test]
    async fn test_failure_before_first_load_leaves_zeroed_snapshot() {
        let dashboard = Dashboard::new(
            Box::new(FlakySource {
                inner: MockDataGenerator::with_seed(4),
                served: true,
            }),
            Arc::new(LogExporter),
            fast_settings(),
        );

        dashboard.load().await;
        assert!(dashboard.snapshot().await.is_empty());
        assert_eq!(dashboard.metric_cards().await[0].value, "$0");
        assert!(dashboard.drain_notices().await[0].is_error());
    }

    #[tokio::test]
    async fn test_filters_are_stored_and_cleared() {
        use crate::dashboard::filters::RegionFilter;

        let dashboard = seeded_dashboard();
        let filters = FilterState {
            region: RegionFilter::Europe,
            ..Default::default()
        };

        dashboard.set_filters(filters).await;
        assert_eq!(dashboard.filters().await.region, RegionFilter::Europe);
        assert_eq!(dashboard.snapshot().await.table_data.len(), 20);

        dashboard.clear_filters().await;
        assert!(!dashboard.filters().await.has_active_filters());
    }

    #[tokio::test]
    async fn test_revenue_desc_scenario() {
        let dashboard = seeded_dashboard();
        dashboard.load().await;

        assert!(dashboard.sort_table("revenue").await);
        assert!(dashboard.sort_table("revenue").await);

        let max_revenue = dashboard
            .snapshot()
            .await
            .table_data
            .iter()
            .map(|o| o.revenue)
            .max()
            .unwrap();

        let first = dashboard.table_view().await;
        assert_eq!(first.total_pages, 4);
        assert_eq!(first.total_matched, 20);
        assert_eq!(first.rows[0].revenue, max_revenue);

        dashboard.set_table_page(4).await;
        let last = dashboard.table_view().await;
        assert_eq!(last.rows.len(), 5);
        assert_eq!(last.summary().as_deref(), Some("Showing 16 to 20 of 20 entries"));
    }

    #[tokio::test]
    async fn test_table_navigation_and_search() {
        let dashboard = seeded_dashboard();
        dashboard.load().await;

        for _ in 0..10 {
            dashboard.next_table_page().await;
        }
        assert_eq!(dashboard.table_view().await.page, 4);

        // Sorting keeps the page, searching resets it
        dashboard.sort_table("units").await;
        assert_eq!(dashboard.table_view().await.page, 4);

        dashboard.search_table("ORDER-101").await;
        let view = dashboard.table_view().await;
        assert_eq!(view.page, 1);
        assert_eq!(view.total_matched, 10);

        dashboard.search_table("zzzznotfound").await;
        let view = dashboard.table_view().await;
        assert_eq!(view.total_matched, 0);
        assert_eq!(view.total_pages, 0);
        assert!(view.rows.is_empty());

        dashboard.prev_table_page().await;
        assert_eq!(dashboard.table_view().await.page, 1);
    }

    #[tokio::test]
    async fn test_sort_rejects_unknown_column() {
        let dashboard = seeded_dashboard();
        assert!(!dashboard.sort_table("customer").await);
    }

    #[tokio::test]
    async fn test_toggle_insight() {
        let dashboard = seeded_dashboard();
        dashboard.load().await;

        assert!(dashboard.toggle_insight("1").await);
        let views = dashboard.insights().await;
        assert!(views[0].expanded);
        assert!(!views[1].expanded);

        assert!(!dashboard.toggle_insight("1").await);
        assert!(dashboard.insights().await.iter().all(|v| !v.expanded));
    }

    #[tokio::test]
    async fn test_chart_panel_state_and_pie_totals() {
        let dashboard = seeded_dashboard();
        dashboard.load().await;

        let view = dashboard.chart_view().await;
        assert_eq!(view.chart_type, ChartType::Area);
        assert_eq!(view.points.len(), 12);
        assert!(view.pie.is_none());

        dashboard.set_chart_type(ChartType::Pie).await;
        dashboard.set_chart_tab(ChartTab::Operations).await;
        let chart = dashboard.snapshot().await.chart;
        let view = dashboard.chart_view().await;
        let [revenue, profit, cost] = view.pie.unwrap();
        assert_eq!(revenue.value, chart.iter().map(|p| p.revenue).sum::<u64>());
        assert_eq!(profit.value, chart.iter().map(|p| p.profit).sum::<u64>());
        assert_eq!(cost.value, revenue.value - profit.value);
        assert_eq!(view.tab, ChartTab::Operations);
    }

    #[tokio::test]
    async fn test_chart_zoom_clamps_and_resets() {
        let dashboard = seeded_dashboard();

        for _ in 0..10 {
            dashboard.zoom_in().await;
        }
        assert_eq!(dashboard.chart_view().await.zoom, 2.0);

        for _ in 0..10 {
            dashboard.zoom_out().await;
        }
        let view = dashboard.chart_view().await;
        assert_eq!(view.zoom, 0.6);
        assert!(!view.can_zoom_out);

        dashboard.reset_chart_zoom().await;
        assert_eq!(dashboard.chart_view().await.height, 300);
    }

    #[tokio::test]
    async fn test_download_chart_notifies() {
        let dashboard = seeded_dashboard();
        dashboard.download_chart().await;

        let notices = dashboard.drain_notices().await;
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Chart Downloaded");
        assert_eq!(
            notices[0].description,
            "Your chart has been downloaded as a PNG file."
        );
        assert!(!notices[0].is_error());
    }

    #[tokio::test]
    async fn test_export_notifies_and_forwards() {
        let exporter = Arc::new(RecordingExporter::default());
        let dashboard = Dashboard::new(
            Box::new(MockDataGenerator::with_seed(8)),
            exporter.clone(),
            fast_settings(),
        );

        assert!(dashboard.export(ExportFormat::Pdf, ExportOptions::default()).await);
        assert!(dashboard.export_table().await);

        assert_eq!(
            *exporter.formats.lock().unwrap(),
            vec![ExportFormat::Pdf, ExportFormat::Csv]
        );

        let notices = dashboard.drain_notices().await;
        assert_eq!(notices[0].title, "Report Exported");
        assert_eq!(
            notices[0].description,
            "Your report has been exported as a PDF file."
        );
        assert_eq!(notices[1].title, "Data Exported");
    }

    #[tokio::test]
    async fn test_export_failure_is_reported() {
        let dashboard = Dashboard::new(
            Box::new(MockDataGenerator::with_seed(8)),
            Arc::new(FailingExporter),
            fast_settings(),
        );

        assert!(!dashboard.export(ExportFormat::Png, ExportOptions::default()).await);
        let notices = dashboard.drain_notices().await;
        assert_eq!(notices.len(), 1);
        assert!(notices[0].is_error());
    }
}
