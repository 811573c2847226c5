use clap::{CommandFactory, Parser};
use std::process;
use water_monitor::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    // No subcommand: show help and exit
    if args.command.is_none() {
        if let Err(error) = Args::command().print_help() {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
        println!();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => match signal {
                Ok(()) => Err(anyhow::anyhow!("Interrupted by user")),
                Err(error) => Err(anyhow::Error::new(error).context("Failed to listen for CTRL+C")),
            },
        }
    });

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
