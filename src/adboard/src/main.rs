//! AdBoard — Facebook/Google Ads performance dashboard.
//!
//! Loads a campaign dataset, applies the active filter, and renders the
//! derived dashboard view. The engine is re-invoked from scratch on every
//! run; the CLI plays the role the web UI plays in a hosted deployment.

mod render;

use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use adboard_core::config::AppConfig;
use adboard_core::filter::{DateRange, FilterOptions, Selection};
use adboard_core::types::{CampaignId, Dataset, Objective, Platform};
use adboard_dataset::{load_dataset, sample_dataset};
use adboard_engine::{campaigns_to_csv, derive_view, filter_campaigns, MetricKey};
use adboard_ingest::import_campaigns;

#[derive(Parser, Debug)]
#[command(name = "adboard")]
#[command(about = "Facebook/Google Ads performance dashboard")]
#[command(version)]
struct Cli {
    /// JSON dataset path (built-in sample data when unset)
    #[arg(long, env = "ADBOARD__DATASET_PATH", global = true)]
    dataset: Option<PathBuf>,

    /// Emit JSON instead of tables
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Window start (YYYY-MM-DD); defaults to the configured lookback window
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Window end (YYYY-MM-DD); defaults to today
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Ignore the default window and include the full history
    #[arg(long, default_value_t = false)]
    all_time: bool,

    /// Restrict to a platform (repeatable; absent means all)
    #[arg(long = "platform", value_name = "PLATFORM")]
    platforms: Vec<Platform>,

    /// Restrict to a campaign id (repeatable; absent means all)
    #[arg(long = "campaign", value_name = "ID")]
    campaigns: Vec<String>,

    /// Restrict to an objective (repeatable; absent means all)
    #[arg(long = "objective", value_name = "OBJECTIVE")]
    objectives: Vec<Objective>,
}

impl FilterArgs {
    /// Maps CLI flags onto the engine's filter model. A flag left out means
    /// "all of them", the dropdown default.
    fn to_filter_options(&self, today: NaiveDate, window_days: u32) -> FilterOptions {
        let date_range = if self.all_time {
            DateRange::default()
        } else {
            DateRange::new(
                Some(
                    self.from
                        .unwrap_or(today - Duration::days(i64::from(window_days))),
                ),
                Some(self.to.unwrap_or(today)),
            )
        };

        fn selection_of<T: Ord + Clone>(values: &[T]) -> Selection<T> {
            if values.is_empty() {
                Selection::All
            } else {
                Selection::specific(values.iter().cloned())
            }
        }

        FilterOptions {
            date_range,
            platforms: selection_of(&self.platforms),
            campaigns: selection_of(
                &self
                    .campaigns
                    .iter()
                    .map(|id| CampaignId::new(id.clone()))
                    .collect::<Vec<_>>(),
            ),
            objectives: selection_of(&self.objectives),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ExportFormat {
    Csv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the dashboard view for the active filter
    Dashboard {
        #[command(flatten)]
        filter: FilterArgs,

        /// Also rank campaigns by this metric (spend|cpm|cpc|ctr|cpa|conversions)
        #[arg(long)]
        metric: Option<MetricKey>,
    },
    /// Import campaigns from an ads export file
    Import {
        /// Export file to import
        file: PathBuf,
    },
    /// Export the filtered campaign table
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adboard=warn".into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(path) = &cli.dataset {
        config.dataset_path = Some(path.display().to_string());
    }
    if cli.json {
        config.dashboard.json_output = true;
    }

    let today = Utc::now().date_naive();
    let dataset = load_or_sample(&config, today)?;

    info!(
        campaigns = dataset.campaigns.len(),
        daily_metrics = dataset.daily_metrics.len(),
        "dataset ready"
    );

    match cli.command {
        Command::Dashboard { filter, metric } => {
            let filters = filter.to_filter_options(today, config.dashboard.default_window_days);
            let view = derive_view(&dataset, &filters);

            if config.dashboard.json_output {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                render::print_dashboard(&view, metric);
            }
        }
        Command::Import { file } => {
            let campaigns = import_campaigns(&file, today)?;

            if config.dashboard.json_output {
                println!("{}", serde_json::to_string_pretty(&campaigns)?);
            } else {
                render::print_import_summary(&campaigns);
            }
        }
        Command::Export {
            filter,
            format,
            output,
        } => {
            let filters = filter.to_filter_options(today, config.dashboard.default_window_days);
            let campaigns = filter_campaigns(&dataset.campaigns, &filters);

            let body = match format {
                ExportFormat::Csv => campaigns_to_csv(&campaigns),
                ExportFormat::Json => {
                    let mut json = serde_json::to_string_pretty(&campaigns)?;
                    json.push('\n');
                    json
                }
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, &body)?;
                    info!(file = %path.display(), rows = campaigns.len(), "export written");
                    println!("Exported {} campaigns to {}", campaigns.len(), path.display());
                }
                None => print!("{body}"),
            }
        }
    }

    Ok(())
}

fn load_or_sample(config: &AppConfig, today: NaiveDate) -> anyhow::Result<Dataset> {
    match &config.dataset_path {
        Some(path) => Ok(load_dataset(Path::new(path))?),
        None => {
            info!("no dataset configured, using built-in sample data");
            Ok(sample_dataset(today))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_absent_flags_select_everything_within_window() {
        let args = FilterArgs {
            from: None,
            to: None,
            all_time: false,
            platforms: vec![],
            campaigns: vec![],
            objectives: vec![],
        };
        let filters = args.to_filter_options(date("2024-06-15"), 30);

        assert_eq!(filters.date_range.from, Some(date("2024-05-16")));
        assert_eq!(filters.date_range.to, Some(date("2024-06-15")));
        assert!(filters.platforms.is_all());
        assert!(filters.campaigns.is_all());
        assert!(filters.objectives.is_all());
    }

    #[test]
    fn test_all_time_opens_the_window() {
        let args = FilterArgs {
            from: Some(date("2024-01-01")),
            to: None,
            all_time: true,
            platforms: vec![Platform::Facebook],
            campaigns: vec!["fb-1".to_string()],
            objectives: vec![Objective::Sales],
        };
        let filters = args.to_filter_options(date("2024-06-15"), 30);

        assert!(filters.date_range.is_open());
        assert!(filters.platforms.matches(&Platform::Facebook));
        assert!(!filters.platforms.matches(&Platform::Google));
        assert!(filters.campaigns.matches(&CampaignId::new("fb-1")));
        assert!(!filters.objectives.matches(&Objective::Leads));
    }
}
