use std::process::ExitCode;

use tracing::info;

use peanoc::api;

use super::args::CliArgs;
use super::errors::AppError;

fn print_usage() {
    println!("Usage: peanoc <input_value>");
    println!("  <input_value> can be a non-negative integer (e.g., '5')");
    println!("  OR a Peano numeral string (e.g., 'S(S(O))')");
}

fn execute(args: &CliArgs) -> Result<String, AppError> {
    let token = args.input.as_deref().ok_or(AppError::MissingArgument)?;
    let conversion = api::convert_token(token)?;
    info!("conversion complete: {}", conversion);
    Ok(conversion.to_string())
}

pub fn run(args: CliArgs) -> ExitCode {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match execute(&args) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(AppError::MissingArgument) => {
            print_usage();
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
