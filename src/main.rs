use std::env;
use std::process::ExitCode;

use caseflow_rust::config::CONFIG;
use caseflow_rust::errors::AppError;
use caseflow_rust::run_suites;

fn run() -> Result<bool, AppError> {
    // Suites a ejecutar como argumentos posicionales; sin argumentos, todas.
    let names: Vec<String> = env::args().skip(1).collect();
    let report = run_suites(&CONFIG, &names)?;
    print!("{}", report.console_tree());
    println!("\n{} tests successful, {} tests failed, {} containers aborted",
             report.summary.passed, report.summary.failed, report.summary.errored);
    if let Some(path) = &CONFIG.report_path {
        report.write_json(path)?;
        println!("Reporte escrito en {}", path.display());
    }
    Ok(report.summary.is_success())
}

fn main() -> ExitCode {
    // CONFIG carga .env antes de leer las variables
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(CONFIG.log_filter.as_str())).init();
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
