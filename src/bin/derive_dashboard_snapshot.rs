use std::fs;
use std::path::{Path, PathBuf};

use analysis_lens::api::{AnalysisDashboard, DerivationConfig, ViewState};
use analysis_lens::core::AnalysisRecord;
use analysis_lens::telemetry;

struct CliArgs {
    record_path: PathBuf,
    view_state_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = telemetry::init_default_tracing();
    let args = parse_args()?;

    let record = AnalysisRecord::from_json_str(&read_file(&args.record_path)?)
        .map_err(|err| err.to_string())?;
    let view_state = match &args.view_state_path {
        Some(path) => ViewState::from_json_str(&read_file(path)?).map_err(|err| err.to_string())?,
        None => ViewState::default(),
    };
    let config = match &args.config_path {
        Some(path) => {
            DerivationConfig::from_json_str(&read_file(path)?).map_err(|err| err.to_string())?
        }
        None => DerivationConfig::default(),
    };

    let dashboard =
        AnalysisDashboard::derive(&record, &config, &view_state).map_err(|err| err.to_string())?;
    let serialized = dashboard
        .to_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;

    match &args.output_path {
        Some(path) => {
            fs::write(path, format!("{serialized}\n"))
                .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
            println!("wrote dashboard snapshot to {}", path.display());
        }
        None => println!("{serialized}"),
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut record_path: Option<PathBuf> = None;
    let mut view_state_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .map(PathBuf::from)
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--record" => record_path = Some(value_for("--record")?),
            "--view-state" => view_state_path = Some(value_for("--view-state")?),
            "--config" => config_path = Some(value_for("--config")?),
            "--output" => output_path = Some(value_for("--output")?),
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin derive_dashboard_snapshot -- --record <path> [--view-state <path>] [--config <path>] [--output <path>]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        record_path: record_path.ok_or_else(|| "missing required --record <path>".to_owned())?,
        view_state_path,
        config_path,
        output_path,
    })
}
