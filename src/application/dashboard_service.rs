// Dashboard image service - Use case for rendering every metric widget of the selected dashboards
use crate::application::monitoring_repository::MonitoringRepository;
use crate::domain::dashboard::{DashboardBody, DashboardSelection};
use crate::domain::error::DashboardError;
use crate::domain::image::{ImageEncoding, WidgetImage};
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardImageService {
    repository: Arc<dyn MonitoringRepository>,
    trace_widgets: bool,
}

impl DashboardImageService {
    pub fn new(repository: Arc<dyn MonitoringRepository>) -> Self {
        Self {
            repository,
            trace_widgets: false,
        }
    }

    /// Log every widget spec and rendered image size at info level.
    pub fn with_widget_tracing(mut self, enabled: bool) -> Self {
        self.trace_widgets = enabled;
        self
    }

    /// Render the metric widgets of the selected dashboards, flattened in
    /// dashboard order and then widget order. The first failure aborts the run.
    pub async fn get_dashboard_images(
        &self,
        selection: &DashboardSelection,
        encode_base64: bool,
    ) -> anyhow::Result<Vec<WidgetImage>> {
        let encoding = ImageEncoding::from_flag(encode_base64);
        let available = self
            .repository
            .list_dashboard_names()
            .await
            .context("Failed to list dashboards")?;
        tracing::info!("Dashboards available: {:?}", available);

        let mut images = Vec::new();
        for dashboard in selection.resolve(&available) {
            images.extend(self.fetch_dashboard_images(dashboard, encoding).await?);
        }

        tracing::info!("Collected {} widget images", images.len());
        Ok(images)
    }

    async fn fetch_dashboard_images(
        &self,
        dashboard: &str,
        encoding: ImageEncoding,
    ) -> anyhow::Result<Vec<WidgetImage>> {
        let body = self.load_body(dashboard).await?;
        let mut images = Vec::new();

        for (index, properties) in body.metric_widgets().enumerate() {
            let metric_widget =
                properties
                    .to_metric_widget_json()
                    .map_err(|source| DashboardError::WidgetSpec {
                        dashboard: dashboard.to_string(),
                        index,
                        source,
                    })?;

            if self.trace_widgets {
                tracing::info!(dashboard, index, "Metric widget spec: {}", metric_widget);
            }

            let png = self
                .repository
                .render_metric_widget(&metric_widget)
                .await
                .and_then(|png| png.ok_or_else(|| DashboardError::MissingImage.into()))
                .with_context(|| {
                    format!(
                        "Failed to render metric widget {} of dashboard '{}'",
                        index, dashboard
                    )
                })?;

            let image = WidgetImage::encode(png, encoding);
            if self.trace_widgets {
                tracing::info!(dashboard, index, bytes = image.byte_len(), "Rendered metric widget");
            }
            images.push(image);
        }

        tracing::debug!(
            "Dashboard {}: rendered {} of {} widgets",
            dashboard,
            images.len(),
            body.widgets.len()
        );
        Ok(images)
    }

    async fn load_body(&self, dashboard: &str) -> anyhow::Result<DashboardBody> {
        let raw = self
            .repository
            .get_dashboard_body(dashboard)
            .await
            .with_context(|| format!("Failed to fetch dashboard '{}'", dashboard))?
            .ok_or_else(|| DashboardError::MissingBody {
                dashboard: dashboard.to_string(),
            })?;

        let body = DashboardBody::parse(&raw).map_err(|source| DashboardError::MalformedBody {
            dashboard: dashboard.to_string(),
            source,
        })?;
        Ok(body)
    }
}
