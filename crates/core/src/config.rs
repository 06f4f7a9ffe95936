use serde::Deserialize;

/// Root application configuration. Loaded from environment variables with
/// the prefix `ADBOARD__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Path to a JSON dataset file; the built-in sample dataset is used
    /// when unset.
    #[serde(default)]
    pub dataset_path: Option<String>,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Default lookback window for the date filter, in days.
    #[serde(default = "default_window_days")]
    pub default_window_days: u32,
    /// Render output as JSON instead of tables.
    #[serde(default)]
    pub json_output: bool,
}

fn default_window_days() -> u32 {
    30
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_window_days: default_window_days(),
            json_output: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            dashboard: DashboardConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("ADBOARD")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
