// CloudWatch repository implementation
use crate::application::monitoring_repository::MonitoringRepository;
use crate::infrastructure::config::AwsSettings;
use anyhow::Result;
use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_cloudwatch::Client;
use aws_sdk_cloudwatch::config::Region;
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use std::future::Future;
use thiserror::Error;

const OUTPUT_FORMAT: &str = "png";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no AWS region could be resolved")]
    MissingRegion,
}

/// One `ListDashboards` response: the names on the page and the token for the next one.
pub type DashboardPage = (Vec<String>, Option<String>);

#[derive(Debug, Clone)]
pub struct CloudWatchRepository {
    client: Client,
}

impl CloudWatchRepository {
    /// Build a client from the SDK default chain plus any overrides in `settings`.
    /// Credentials are resolved lazily, so missing ones surface on the first request.
    pub async fn connect(settings: &AwsSettings) -> Result<Self, ClientError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).retry_config(
            RetryConfig::standard().with_max_attempts(settings.max_attempts.max(1)),
        );
        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &settings.profile {
            loader = loader.profile_name(profile);
        }

        let sdk_config = loader.load().await;
        let region = resolved_region(&sdk_config)?;

        tracing::debug!("CloudWatch client configured for region {}", region);
        Ok(Self {
            client: Client::new(&sdk_config),
        })
    }

    async fn list_dashboard_page(&self, next_token: Option<String>) -> Result<DashboardPage> {
        let page = self
            .client
            .list_dashboards()
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("ListDashboards failed: {}", DisplayErrorContext(e)))?;

        let names = page
            .dashboard_entries()
            .iter()
            .filter_map(|entry| entry.dashboard_name())
            .map(str::to_string)
            .collect();
        Ok((names, page.next_token().map(str::to_string)))
    }
}

fn resolved_region(sdk_config: &SdkConfig) -> Result<&Region, ClientError> {
    sdk_config.region().ok_or(ClientError::MissingRegion)
}

/// Follow `ListDashboards` tokens until a page comes back without one.
/// An empty token ends the listing as well.
pub async fn collect_dashboard_pages<F, Fut>(mut fetch_page: F) -> Result<Vec<String>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<DashboardPage>>,
{
    let mut names = Vec::new();
    let mut next_token: Option<String> = None;

    loop {
        let (page, token) = fetch_page(next_token.take()).await?;
        names.extend(page);

        match token {
            Some(token) if !token.is_empty() => next_token = Some(token),
            _ => break,
        }
    }

    Ok(names)
}

#[async_trait]
impl MonitoringRepository for CloudWatchRepository {
    async fn list_dashboard_names(&self) -> Result<Vec<String>> {
        let names = collect_dashboard_pages(|token| self.list_dashboard_page(token)).await?;
        tracing::debug!("Listed {} dashboards", names.len());
        Ok(names)
    }

    async fn get_dashboard_body(&self, dashboard: &str) -> Result<Option<String>> {
        let output = self
            .client
            .get_dashboard()
            .dashboard_name(dashboard)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("GetDashboard failed: {}", DisplayErrorContext(e)))?;

        Ok(output.dashboard_body().map(str::to_string))
    }

    async fn render_metric_widget(&self, metric_widget: &str) -> Result<Option<Vec<u8>>> {
        let output = self
            .client
            .get_metric_widget_image()
            .metric_widget(metric_widget)
            .output_format(OUTPUT_FORMAT)
            .send()
            .await
            .map_err(|e| {
                anyhow::anyhow!("GetMetricWidgetImage failed: {}", DisplayErrorContext(e))
            })?;

        Ok(output
            .metric_widget_image()
            .map(|blob| blob.as_ref().to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn page(names: &[&str], token: Option<&str>) -> DashboardPage {
        (
            names.iter().map(|s| s.to_string()).collect(),
            token.map(str::to_string),
        )
    }

    async fn drive(pages: Vec<DashboardPage>) -> (Result<Vec<String>>, Vec<Option<String>>) {
        let mut pages = VecDeque::from(pages);
        let mut tokens_sent = Vec::new();

        let result = collect_dashboard_pages(|token| {
            tokens_sent.push(token);
            let next = pages.pop_front();
            async move { next.ok_or_else(|| anyhow::anyhow!("no more pages")) }
        })
        .await;

        (result, tokens_sent)
    }

    #[tokio::test]
    async fn test_follows_tokens_across_pages() {
        let (names, tokens) = drive(vec![
            page(&["Prod", "Staging"], Some("page-2")),
            page(&["Batch"], None),
        ])
        .await;

        assert_eq!(names.unwrap(), vec!["Prod", "Staging", "Batch"]);
        assert_eq!(tokens, vec![None, Some("page-2".to_string())]);
    }

    #[tokio::test]
    async fn test_empty_token_ends_listing() {
        let (names, tokens) = drive(vec![page(&["Prod"], Some("")), page(&["Never"], None)]).await;

        assert_eq!(names.unwrap(), vec!["Prod"]);
        assert_eq!(tokens.len(), 1);
    }

    #[tokio::test]
    async fn test_page_failure_propagates() {
        let (names, tokens) = drive(vec![page(&["Prod"], Some("page-2"))]).await;

        assert_eq!(names.unwrap_err().to_string(), "no more pages");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_client_needs_a_region_but_not_eager_credentials() {
        let bare = SdkConfig::builder().build();
        assert!(matches!(
            resolved_region(&bare),
            Err(ClientError::MissingRegion)
        ));

        let regional = SdkConfig::builder()
            .region(Region::new("eu-west-1"))
            .build();
        assert_eq!(resolved_region(&regional).unwrap().as_ref(), "eu-west-1");
    }
}
