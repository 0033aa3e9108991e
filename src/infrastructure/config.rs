use serde::Deserialize;

/// Optional settings file, resolved relative to the working directory.
pub const SETTINGS_FILE: &str = "config/dashboard-render";
pub const ENV_PREFIX: &str = "DASHBOARD_RENDER";

/// Documented GetMetricWidgetImage ceiling.
const DEFAULT_REQUESTS_PER_SECOND: u32 = 20;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub aws: AwsSettings,
    #[serde(default)]
    pub render: RenderSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AwsSettings {
    pub region: Option<String>,
    pub profile: Option<String>,
    /// SDK retry attempts; 1 means a failed request is never retried
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RenderSettings {
    /// 0 disables client-side rate limiting
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default)]
    pub debug: bool,
}

fn default_max_attempts() -> u32 {
    1
}

fn default_requests_per_second() -> u32 {
    DEFAULT_REQUESTS_PER_SECOND
}

impl Default for AwsSettings {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            max_attempts: default_max_attempts(),
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            requests_per_second: default_requests_per_second(),
            debug: false,
        }
    }
}

pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(SETTINGS_FILE)
}

pub fn load_settings_from(path: &str) -> anyhow::Result<Settings> {
    load_settings_with_env(path, None)
}

/// Layer the optional settings file under `DASHBOARD_RENDER__*` variables,
/// read from `env` when given and from the process environment otherwise.
fn load_settings_with_env(
    path: &str,
    env: Option<config::Map<String, String>>,
) -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(env),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
