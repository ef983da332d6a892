// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dayrun binary entry point.

use clap::Parser;

use dayrun::cli::Cli;
use dayrun::exit::exit_codes;
use dayrun::runner::Runner;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    dayrun::logging::init();

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let current_dir = std::env::current_dir()?;
    let config = cli.runner_config(&current_dir);
    let clock = cli.clock()?;

    let report = Runner::new(config, clock).run().await?;
    Ok(report.exit_code)
}
