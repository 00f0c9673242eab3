use clap::Parser;
use colored::Colorize;
use std::process;
use sugar_checker::cli::{self, Args};

fn main() {
    let args = Args::parse();
    cli::setup_logging(&args);

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(cli::run(&args)) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(error) => {
            let transport = error
                .downcast_ref::<sugar_checker::SugarError>()
                .is_some_and(|e| e.is_transport());

            eprintln!("{} {:#}", "Error:".red().bold(), error);
            if transport {
                eprintln!("{}", "The feed could not be retrieved, please try again later.".yellow());
            }
            process::exit(1);
        }
    }
}
