//! CLI argument parsing surface.
//!
//! Offline by design: both inputs are local JSON paths, output goes to
//! stdout. `--validate-only` loads and checks inputs without running the
//! engine.

use clap::Parser;
use std::path::PathBuf;

/// Parsed CLI arguments.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "apportion",
    disable_help_subcommand = true,
    about = "Offline, deterministic Sainte-Laguë seat apportionment"
)]
pub struct Args {
    /// District configuration JSON path (seats and weighing per district).
    #[arg(long)]
    pub districts: PathBuf,

    /// National results JSON path (vote share per party).
    #[arg(long)]
    pub results: PathBuf,

    /// Party display metadata JSON path (optional; echoed into the output).
    #[arg(long)]
    pub parties: Option<PathBuf>,

    /// Electoral threshold override, in percent (default 4.0).
    #[arg(long, value_parser = parse_threshold)]
    pub threshold: Option<f64>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Load and check inputs only; do not run the engine.
    #[arg(long)]
    pub validate_only: bool,
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("not a number: {e}"))?;
    if !v.is_finite() || v < 0.0 {
        return Err(format!("threshold must be finite and non-negative, got {v}"));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let args =
            Args::try_parse_from(["apportion", "--districts", "d.json", "--results", "r.json"])
                .unwrap();
        assert_eq!(args.threshold, None);
        assert_eq!(args.parties, None);
        assert!(!args.pretty);
        assert!(!args.validate_only);
    }

    #[test]
    fn rejects_negative_threshold() {
        let err = Args::try_parse_from([
            "apportion",
            "--districts",
            "d.json",
            "--results",
            "r.json",
            "--threshold",
            "-4",
        ]);
        assert!(err.is_err());
    }
}
