// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Strokepad — handwritten digit sketchpad
//
// Entry point. Initialises logging and services, replays a recorded touch
// session onto the sketchpad, submits it, and prints the normalized digit
// together with the classifier's answer.
//
// Usage: strokepad <samples.json> [--config <config.json>] [--save-config]

mod services;
mod session;

use std::path::PathBuf;
use std::process::ExitCode;

use strokepad_core::error::{Result, StrokepadError};
use strokepad_core::human_errors::humanize_error;

use services::app_services::AppServices;
use services::strokes;
use session::Sketchpad;

struct Args {
    samples: PathBuf,
    config: Option<PathBuf>,
    save_config: bool,
}

fn parse_args() -> Option<Args> {
    let mut samples = None;
    let mut config = None;
    let mut save_config = false;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config = Some(PathBuf::from(args.next()?)),
            "--save-config" => save_config = true,
            _ if samples.is_none() => samples = Some(PathBuf::from(arg)),
            _ => return None,
        }
    }
    Some(Args {
        samples: samples?,
        config,
        save_config,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Strokepad starting");

    let Some(args) = parse_args() else {
        eprintln!("usage: strokepad <samples.json> [--config <config.json>] [--save-config]");
        return ExitCode::from(2);
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let services = AppServices::init(args.config.as_deref())?;
    let mut pad = Sketchpad::new(services.config().clone())?;
    if args.save_config {
        services.save_config()?;
        tracing::info!(dir = %services.data_dir().display(), "Config saved");
    }

    for point in strokes::load_samples(&args.samples)? {
        pad.touch(point);
    }
    tracing::info!(samples = pad.sample_count(), "Touch samples replayed");

    let mut engine = services.inference_engine();
    let submission = pad.submit(engine.as_mut())?;

    print!("{}", submission.preview);
    match submission.prediction {
        Ok(prediction) => match prediction.as_digit() {
            Some(digit) => println!("Digit: {digit}"),
            None => println!("Label: {prediction}"),
        },
        Err(e) => report(&e),
    }
    Ok(())
}

fn report(error: &StrokepadError) {
    let human = humanize_error(error);
    eprintln!("{}", human.message);
    eprintln!("{}", human.suggestion);
    tracing::debug!(error = %error, retriable = human.retriable, "submission failed");
}
