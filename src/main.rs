mod app;
mod cli;
mod config;
mod data;
mod error;
mod state;
mod ui;

use std::process::ExitCode;

use app::RegressionPlotApp;
use config::PlotConfig;
use data::loader::{load_dataset, load_model};
use error::PlotError;
use state::PlotState;

fn main() -> ExitCode {
    env_logger::init();

    let argv: Vec<String> = std::env::args().collect();
    match run(&argv) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ PlotError::Usage { .. }) => {
            println!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            log::debug!("{:?} failure: {err:?}", err.kind());
            println!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Parse → load → compute → render. Returns once the window is closed.
fn run(argv: &[String]) -> Result<(), PlotError> {
    let args = cli::parse_args(argv)?;

    let dataset = load_dataset(&args.dataset_path)?;
    if dataset.is_empty() {
        log::warn!("{} has no records", args.dataset_path.display());
    }
    let model = load_model(&args.model_path)?;
    let state = PlotState::new(&dataset, model);

    let config = PlotConfig::default().title(format!(
        "Linear regression – {}",
        args.dataset_path.display()
    ));
    RegressionPlotApp::new(state, config).run()
}
