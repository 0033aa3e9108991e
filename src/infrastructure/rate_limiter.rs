// Client-side rate limiting for metric widget render requests
use crate::application::monitoring_repository::MonitoringRepository;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Spaces requests evenly so that at most `n` start in any one-second window.
#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Returns `None` when `requests` is 0, meaning unlimited.
    pub fn per_second(requests: u32) -> Option<Self> {
        if requests == 0 {
            return None;
        }
        Some(Self {
            interval: Duration::from_secs(1) / requests,
            next_slot: Mutex::new(None),
        })
    }

    pub async fn acquire(&self) {
        let mut next_slot = self.next_slot.lock().await;
        let now = Instant::now();
        let slot = match *next_slot {
            Some(slot) if slot > now => slot,
            _ => now,
        };

        if slot > now {
            tracing::debug!("Render rate limit reached, waiting {:?}", slot - now);
            tokio::time::sleep_until(slot).await;
        }
        *next_slot = Some(slot + self.interval);
    }
}

/// Repository decorator that throttles widget renders. Listing and body
/// fetches pass straight through.
pub struct RateLimitedRepository {
    inner: Arc<dyn MonitoringRepository>,
    limiter: RateLimiter,
}

impl RateLimitedRepository {
    pub fn wrap(
        inner: Arc<dyn MonitoringRepository>,
        requests_per_second: u32,
    ) -> Arc<dyn MonitoringRepository> {
        match RateLimiter::per_second(requests_per_second) {
            Some(limiter) => Arc::new(Self { inner, limiter }),
            None => inner,
        }
    }
}

#[async_trait]
impl MonitoringRepository for RateLimitedRepository {
    async fn list_dashboard_names(&self) -> anyhow::Result<Vec<String>> {
        self.inner.list_dashboard_names().await
    }

    async fn get_dashboard_body(&self, dashboard: &str) -> anyhow::Result<Option<String>> {
        self.inner.get_dashboard_body(dashboard).await
    }

    async fn render_metric_widget(&self, metric_widget: &str) -> anyhow::Result<Option<Vec<u8>>> {
        self.limiter.acquire().await;
        self.inner.render_metric_widget(metric_widget).await
    }
}
