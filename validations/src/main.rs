// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::process::ExitCode;

use clap::Parser;
use cluster_validations::commands;
use cluster_validations::configuration::ValidateOptions;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let options = ValidateOptions::parse();

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| options.log_level.clone()),
        ))
        // stdout carries the report, so logs go to stderr.
        .with_writer(std::io::stderr)
        .with_current_span(false)
        .with_ansi(false)
        .with_target(false)
        .init();

    tracing::debug!("[validations] {:?}", &options);

    let report = commands::execute(&options.command)?;

    if options.json {
        println!("{}", serde_json::to_string(&report)?);
    } else if report.valid {
        match report.gibibytes {
            Some(gibibytes) => println!("valid: {} GiB", gibibytes),
            None => println!("valid"),
        }
        for label in &report.labels {
            println!("  {}", label);
        }
    } else {
        for error in &report.errors {
            println!("invalid: {}", error);
        }
    }

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
