// Repository trait for monitoring API access
use async_trait::async_trait;

#[async_trait]
pub trait MonitoringRepository: Send + Sync {
    /// List the names of every dashboard in the account
    async fn list_dashboard_names(&self) -> anyhow::Result<Vec<String>>;

    /// Fetch the raw `DashboardBody` JSON of a dashboard, if it has one
    async fn get_dashboard_body(&self, dashboard: &str) -> anyhow::Result<Option<String>>;

    /// Render a metric widget spec (JSON text) to PNG bytes, if any were returned
    async fn render_metric_widget(&self, metric_widget: &str) -> anyhow::Result<Option<Vec<u8>>>;
}
