// Errors raised while interpreting dashboard data
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("dashboard '{dashboard}' returned no body")]
    MissingBody { dashboard: String },

    #[error("dashboard '{dashboard}' has a malformed body")]
    MalformedBody {
        dashboard: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("widget {index} of dashboard '{dashboard}' could not be serialized")]
    WidgetSpec {
        dashboard: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("render response contained no image")]
    MissingImage,
}
