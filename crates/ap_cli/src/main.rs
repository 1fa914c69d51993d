// apportion — load district/results JSON, run the pipeline, print JSON.
//
// Exit codes: 0 ok, 2 validation, 4 I/O, 5 engine.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    pub const VALIDATION: i32 = 2;
    pub const IO: i32 = 4;
    pub const ENGINE: i32 = 5;
}

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use ap_core::{
    entities::{Districts, NationalState, Party, Results},
    variables::Params,
};
use ap_io::IoError;
use ap_pipeline::{update_national, PipelineError};
use args::Args;

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Input contract violations (bad JSON values, bad params).
    Validation(String),
    /// Filesystem / JSON shape errors.
    Io(String),
    /// Pipeline logic failures.
    Pipeline(String),
}

impl From<IoError> for MainError {
    fn from(e: IoError) -> Self {
        match e {
            IoError::Read(m) => MainError::Io(format!("read: {m}")),
            IoError::Json(m) => MainError::Io(format!("json: {m}")),
            IoError::Invalid(m) => MainError::Validation(m),
        }
    }
}

impl From<PipelineError> for MainError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::Validate(m) => MainError::Validation(m),
            PipelineError::Allocate(m) => MainError::Pipeline(m),
        }
    }
}

fn map_error(e: &MainError) -> i32 {
    match e {
        MainError::Validation(_) => exitcodes::VALIDATION,
        MainError::Io(_) => exitcodes::IO,
        MainError::Pipeline(_) => exitcodes::ENGINE,
    }
}

/// Serialized output: the published national snapshot, plus party display
/// metadata when a parties file was given.
#[derive(Debug, Serialize)]
struct Output {
    parliament: Results,
    districts: Districts,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    parties: Vec<Party>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let rc = match run_once(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            let msg = match &e {
                MainError::Validation(m) | MainError::Io(m) | MainError::Pipeline(m) => m,
            };
            eprintln!("apportion: error: {msg}");
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

fn run_once(args: &Args) -> Result<(), MainError> {
    let inputs = ap_io::load_inputs(&args.districts, &args.results, args.parties.as_deref())?;

    let mut params = Params::default();
    if let Some(t) = args.threshold {
        params.threshold_pct = t;
    }
    params
        .validate()
        .map_err(|e| MainError::Validation(e.to_string()))?;

    if args.validate_only {
        return Ok(());
    }

    let state = NationalState {
        districts: inputs.districts,
        parliament: Results::new(),
    };
    let out = update_national(&state, &inputs.national, &params)?;

    let output = Output {
        parliament: out.parliament,
        districts: out.districts,
        parties: inputs.parties,
    };
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .map_err(|e| MainError::Io(format!("serialize: {e}")))?;
    println!("{rendered}");
    Ok(())
}
