// Dashboard domain model
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Argument value that selects every dashboard in the account.
pub const ALL_DASHBOARDS: &str = "all";

/// Which dashboards a run should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardSelection {
    All,
    Named(String),
}

impl DashboardSelection {
    pub fn from_arg(arg: Option<String>) -> Self {
        match arg {
            Some(name) if name != ALL_DASHBOARDS => Self::Named(name),
            _ => Self::All,
        }
    }

    /// Narrow `available` to the selected dashboard.
    ///
    /// A name that is not in the list is not an error: the whole list is
    /// returned, exactly as if `All` had been requested.
    pub fn resolve<'a>(&self, available: &'a [String]) -> &'a [String] {
        match self {
            Self::Named(name) => match available.iter().position(|d| d == name) {
                Some(idx) => &available[idx..=idx],
                None => {
                    tracing::warn!(
                        "Dashboard '{}' not found, rendering all {} dashboards",
                        name,
                        available.len()
                    );
                    available
                }
            },
            Self::All => available,
        }
    }
}

/// Parsed `DashboardBody` document.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardBody {
    pub widgets: Vec<Widget>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Widget {
    #[serde(default)]
    pub properties: WidgetProperties,
}

/// Rendering parameters of a single widget, kept as an opaque JSON object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct WidgetProperties(Map<String, Value>);

impl WidgetProperties {
    pub fn is_metric_widget(&self) -> bool {
        self.0.contains_key("metrics")
    }

    /// Compact JSON with sorted keys, as sent in `MetricWidget`.
    pub fn to_metric_widget_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }
}

impl DashboardBody {
    pub fn parse(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Property sets of the widgets that carry `metrics`, in body order.
    pub fn metric_widgets(&self) -> impl Iterator<Item = &WidgetProperties> {
        self.widgets
            .iter()
            .map(|w| &w.properties)
            .filter(|p| p.is_metric_widget())
    }
}
