//! # ets-forecast
//!
//! Command-line interface for forecasting with fitted ETS models.

mod error;

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use forecast_facade::prelude::*;
use forecast_facade::parse_submodel;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "ets-forecast")]
#[command(about = "Point forecasts from fitted ETS models", long_about = None)]
struct Cli {
    /// Engine configuration file (JSON)
    #[arg(long, global = true, env = "ETS_FORECAST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast one field of a time-series model resource
    Forecast {
        /// Time-series model file (JSON)
        #[arg(short, long)]
        model: PathBuf,

        /// Field id or name to forecast
        #[arg(short, long)]
        field: String,

        /// Number of points to forecast
        #[arg(long)]
        horizon: i64,

        /// Rank submodels by this criterion (aic, aicc, bic)
        #[arg(short, long)]
        criterion: Option<Criterion>,

        /// How many ranked submodels to keep
        #[arg(short, long)]
        limit: Option<usize>,

        /// Regular expressions matched against submodel names
        #[arg(short, long, num_args = 1..)]
        names: Vec<String>,

        /// Positions in the field's submodel list
        #[arg(short, long, num_args = 1..)]
        indices: Vec<usize>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Forecast a single submodel description
    Submodel {
        /// Submodel description file (JSON)
        #[arg(short, long)]
        submodel: PathBuf,

        /// Number of points to forecast
        #[arg(long)]
        horizon: i64,

        /// Trend identifier, taken from the submodel name when omitted
        #[arg(short, long)]
        trend: Option<String>,

        /// Seasonality identifier, taken from the submodel name when omitted
        #[arg(short = 'S', long)]
        seasonality: Option<String>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn read_file(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_forecaster(config: Option<&Path>) -> CliResult<Forecaster> {
    let config = match config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            ForecastConfig::from_json_str(&read_file(path)?)?
        }
        None => ForecastConfig::default(),
    };
    Ok(Forecaster::new(config)?)
}

/// Write JSON to the output file, or stdout when none is given
fn write_results(value: &Value, output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => {
            let write_err = |source| CliError::Write {
                path: path.to_path_buf(),
                source,
            };
            let file = File::create(path).map_err(write_err)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush().map_err(write_err)?;
            println!("Results written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, value)?;
            writeln!(writer).map_err(|source| CliError::Write {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
        }
    }
    Ok(())
}

fn build_field_input(
    horizon: i64,
    criterion: Option<Criterion>,
    limit: Option<usize>,
    names: Vec<String>,
    indices: Vec<usize>,
) -> FieldInput {
    let filter = SubmodelFilter {
        indices,
        names,
        criterion,
        limit,
    };
    let input = FieldInput::with_horizon(horizon);
    if filter.is_empty() {
        input
    } else {
        input.filter(filter)
    }
}

fn run_forecast(
    forecaster: &Forecaster,
    model_path: &Path,
    field: String,
    field_input: FieldInput,
) -> CliResult<BTreeMap<String, Vec<SubmodelForecast>>> {
    let model = TimeSeriesModel::from_json_str(&read_file(model_path)?)?;
    debug!(resource = ?model.resource(), field = %field, "forecasting model");

    let mut input = ForecastInput::new();
    input.insert(field, field_input);
    Ok(forecaster.forecast_model(&model, &input)?)
}

fn run_submodel(
    forecaster: &Forecaster,
    submodel_path: &Path,
    horizon: i64,
    trend: Option<String>,
    seasonality: Option<String>,
) -> CliResult<SubmodelForecast> {
    let submodel = parse_submodel(&read_file(submodel_path)?)?;
    let trend = match trend {
        Some(trend) => trend,
        None => submodel.trend_id()?.to_string(),
    };
    let seasonality = seasonality.unwrap_or_else(|| submodel.seasonality_id().to_string());

    let request = ForecastRequest::new(horizon, trend, seasonality);
    let point_forecast = forecaster.engine().forecast(&submodel, &request)?;
    Ok(SubmodelForecast {
        submodel: submodel.label(),
        point_forecast,
    })
}

fn run(cli: Cli) -> CliResult<()> {
    let forecaster = load_forecaster(cli.config.as_deref())?;

    match cli.command {
        Commands::Forecast {
            model,
            field,
            horizon,
            criterion,
            limit,
            names,
            indices,
            output,
        } => {
            let field_input = build_field_input(horizon, criterion, limit, names, indices);
            let results = run_forecast(&forecaster, &model, field, field_input)?;
            write_results(&serde_json::to_value(&results)?, output.as_deref())
        }
        Commands::Submodel {
            submodel,
            horizon,
            trend,
            seasonality,
            output,
        } => {
            let result = run_submodel(&forecaster, &submodel, horizon, trend, seasonality)?;
            write_results(&serde_json::to_value(&result)?, output.as_deref())
        }
    }
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forecast=info".into()),
        )
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_forecast() {
        let cli = Cli::try_parse_from([
            "ets-forecast",
            "forecast",
            "--model",
            "model.json",
            "--field",
            "Sales",
            "--horizon",
            "4",
            "--criterion",
            "bic",
            "--limit",
            "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Forecast {
                field,
                horizon,
                criterion,
                limit,
                ..
            } => {
                assert_eq!(field, "Sales");
                assert_eq!(horizon, 4);
                assert_eq!(criterion, Some(Criterion::Bic));
                assert_eq!(limit, Some(2));
            }
            _ => panic!("expected forecast subcommand"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_criterion() {
        let result = Cli::try_parse_from([
            "ets-forecast",
            "forecast",
            "--model",
            "m.json",
            "--field",
            "f",
            "--horizon",
            "1",
            "--criterion",
            "mse",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_field_input_without_selection_uses_default() {
        let input = build_field_input(3, None, None, vec![], vec![]);
        assert_eq!(input.horizon, Some(3));
        assert!(input.ets_models.is_none());

        let input = build_field_input(3, Some(Criterion::Aicc), None, vec![], vec![0]);
        let filter = input.ets_models.unwrap();
        assert_eq!(filter.criterion, Some(Criterion::Aicc));
        assert_eq!(filter.indices, vec![0]);
    }

    #[test]
    fn test_run_submodel_uses_name_identifiers() {
        let dir = std::env::temp_dir().join(format!("ets-forecast-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("submodel.json");
        fs::write(&path, r#"{"name": "A,A,N", "final_state": {"l": 1, "b": 2}}"#).unwrap();

        let result = run_submodel(&Forecaster::default(), &path, 3, None, None).unwrap();
        assert_eq!(result.submodel, "A,A,N");
        assert_eq!(result.point_forecast, vec![3.0, 5.0, 7.0]);

        let err = run_submodel(&Forecaster::default(), &path, 3, Some("Q".into()), None)
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Forecast(ForecastError::UnsupportedTrend(_))
        ));
        fs::remove_dir_all(&dir).ok();
    }
}
