// HTML page rendering for anonymous dashboard viewing
use crate::application::dashboard_service::DashboardImageService;
use crate::domain::dashboard::DashboardSelection;
use crate::domain::image::WidgetImage;
use chrono::{DateTime, Utc};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

#[derive(Clone)]
pub struct PageRenderer {
    service: DashboardImageService,
}

impl PageRenderer {
    pub fn new(service: DashboardImageService) -> Self {
        Self { service }
    }

    /// Fetch every selected widget image and wrap them in one HTML document.
    /// Nothing is returned until all images are in.
    pub async fn render_page(&self, selection: &DashboardSelection) -> anyhow::Result<String> {
        let started = Utc::now();
        let images = self.service.get_dashboard_images(selection, true).await?;
        let finished = Utc::now();

        Ok(build_page(&images, started, finished))
    }
}

pub fn build_page(images: &[WidgetImage], started: DateTime<Utc>, finished: DateTime<Utc>) -> String {
    let mut page = String::from("<html>\n");
    page.push_str(&timestamp_comment("Started", started));

    for image in images {
        page.push_str(&format!(
            "<img src='data:image/png;base64,{}' >\n",
            image.to_base64()
        ));
    }

    page.push_str(&timestamp_comment("Finished", finished));
    page.push_str("</html>\n");
    page
}

fn timestamp_comment(label: &str, at: DateTime<Utc>) -> String {
    format!("<!-- {}: {} -->\n", label, at.format(TIMESTAMP_FORMAT))
}
