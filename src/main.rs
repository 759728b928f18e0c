use SlowFastCRN::cli::cli_crn::run_from_args;
use SlowFastCRN::cli::cli_main::run_interactive_menu;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::process::ExitCode;

/// `SlowFastCRN [--verbose] [crn.json [settings.json]]`, without a file the interactive menu starts
pub fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let files: Vec<&str> = args
        .iter()
        .filter(|a| !a.starts_with('-'))
        .map(|a| a.as_str())
        .collect();

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);

    match files.as_slice() {
        [] => {
            run_interactive_menu();
            ExitCode::SUCCESS
        }
        [crn_file, rest @ ..] => match run_from_args(crn_file, rest.first().copied()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}
