mod app;
mod cli;
mod config;
mod input;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use cli::Cli;
use config::Config;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // RUST_LOG takes precedence over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = Config::load(cli.config.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|mut config| {
            config.apply_cli(&cli);
            app::run(&config, &cli.original, &cli.revised)
        });

    match result {
        Ok(Some(summary)) => {
            println!("Report written to {}", summary.output.display());
            if let Some(stylesheet) = &summary.stylesheet {
                println!("Stylesheet written to {}", stylesheet.display());
            }
            for (side, counts) in [("original", summary.original), ("revised", summary.revised)] {
                match counts {
                    Some(counts) => println!("  {}: {}", side, counts),
                    None => println!("  {}: diff computation failed", side),
                }
            }
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("No comparison possible");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
