//! Balance CLI
//!
//! Command-line interface for layout-balance evaluation.
//!
//! ## Usage
//!
//! ```bash
//! # Evaluate an analysis payload
//! balance evaluate --input analysis.json
//!
//! # Pipe from stdin
//! curl -s "$BACKEND/upload" -F file=@shot.png | balance evaluate
//!
//! # JSON report with a custom rubric
//! balance evaluate --input analysis.json --format json --rubric rubric.yaml
//!
//! # Validate a payload
//! balance payload validate analysis.json
//! ```
//!
//! ## Exit Codes
//!
//! - 0: BALANCED
//! - 1: UNBALANCED
//! - 2: Invalid input
//! - 3: Error

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Display;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use balance_core::{
    evaluate_with_rubric, validate_analysis, AnalysisResult, EvaluationReport, PayloadError, Rubric,
    Verdict,
};

/// Balance: layout-balance and color-usage scoring for UI screenshots
#[derive(Parser)]
#[command(name = "balance")]
#[command(version)]
#[command(about = "Score UI screenshot analyses for layout balance and color usage", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an analysis payload
    Evaluate {
        /// Path to the analysis payload (reads JSON from stdin if not provided)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Show every individual judgment
        #[arg(long)]
        explain: bool,

        /// Path to a rubric file (YAML or JSON); defaults to the built-in rubric
        #[arg(short, long)]
        rubric: Option<PathBuf>,
    },

    /// Payload inspection commands
    Payload {
        #[command(subcommand)]
        action: PayloadAction,
    },

    /// Rubric commands
    Rubric {
        #[command(subcommand)]
        action: RubricAction,
    },
}

#[derive(Subcommand)]
enum PayloadAction {
    /// Validate a payload file
    Validate {
        /// Path to the payload file
        path: PathBuf,
    },

    /// Show payload details
    Show {
        /// Path to the payload file
        path: PathBuf,
    },

    /// Evaluate every payload in a directory
    List {
        /// Directory containing payloads
        #[arg(default_value = "./payloads")]
        path: PathBuf,
    },
}

#[derive(Subcommand)]
enum RubricAction {
    /// Print the effective rubric as YAML
    Show {
        /// Rubric file to load; the built-in rubric is shown if omitted
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    // Initialize logging
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(directives.as_deref()))
        .init();

    match run() {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(3)
        }
    }
}

/// `RUST_LOG` directives win; WARN applies only when they are unset or unparsable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            input,
            format,
            explain,
            rubric,
        } => evaluate_command(input, format, explain, rubric),

        Commands::Payload { action } => match action {
            PayloadAction::Validate { path } => validate_payload(path),
            PayloadAction::Show { path } => show_payload(path),
            PayloadAction::List { path } => list_payloads(path),
        },

        Commands::Rubric { action } => match action {
            RubricAction::Show { path } => show_rubric(path),
        },
    }
}

fn load_rubric(path: Option<&Path>) -> Result<Rubric> {
    match path {
        Some(path) => Rubric::from_file(path)
            .with_context(|| format!("Failed to load rubric from {:?}", path)),
        None => Ok(Rubric::default()),
    }
}

fn evaluate_command(
    input_path: Option<PathBuf>,
    format: OutputFormat,
    explain: bool,
    rubric_path: Option<PathBuf>,
) -> Result<ExitCode> {
    let rubric = load_rubric(rubric_path.as_deref())?;

    // Load payload
    let (loaded, source) = match input_path {
        Some(path) => (AnalysisResult::from_file(&path), format!("{:?}", path)),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            (AnalysisResult::from_json(&buffer), "stdin".to_string())
        }
    };

    let analysis = match loaded {
        Ok(analysis) => analysis,
        Err(e) if e.is_invalid_input() => return Ok(reject(e)),
        Err(e) => return Err(e).with_context(|| format!("Failed to load payload from {}", source)),
    };
    tracing::debug!(%source, "payload loaded");

    let report = match evaluate_with_rubric(&analysis, &rubric) {
        Ok(report) => report,
        Err(e) if e.is_invalid_input() => return Ok(reject(e)),
        Err(e) => return Err(e).context("Evaluation failed"),
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            print!("{}", render_text(&report, explain));
        }
    }

    Ok(exit_code_for(report.verdict))
}

/// Report a payload that was read but cannot be judged.
fn reject(e: impl Display) -> ExitCode {
    eprintln!("Rejected payload: {}", e);
    ExitCode::from(2)
}

fn exit_code_for(verdict: Verdict) -> ExitCode {
    match verdict {
        Verdict::Balanced => ExitCode::from(0),
        Verdict::Unbalanced => ExitCode::from(1),
    }
}

fn pass_label(pass: bool) -> &'static str {
    if pass {
        "Pass"
    } else {
        "Fail"
    }
}

fn alignment_label(pass: bool) -> &'static str {
    if pass {
        "Pass"
    } else {
        "Misalignment"
    }
}

fn render_text(report: &EvaluationReport, explain: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", report.verdict));
    out.push_str(&format!("Overall score: {} / 100\n", report.overall_display()));
    out.push_str(&format!(
        "Color usage: {:.0}% ({})\n",
        report.color.score,
        pass_label(report.color.pass)
    ));
    out.push_str(&format!(
        "Alignment: {:.0}% ({})\n",
        report.alignment.score,
        alignment_label(report.alignment.pass)
    ));

    if explain {
        out.push_str("\n--- Color usage ---\n\n");
        for role in report.color.roles() {
            out.push_str(&format!(
                "{}: {} {}% (target {}±{}) {}\n",
                role.role.label(),
                role.color,
                role.percent,
                role.target,
                role.tolerance,
                pass_label(role.pass)
            ));
        }
        out.push_str(&format!(
            "Contrast: {:.2} (must exceed {}) {}\n",
            report.color.contrast.ratio,
            report.color.contrast.minimum,
            pass_label(report.color.contrast.pass)
        ));

        out.push_str("\n--- Alignment ---\n\n");
        for axis in report.alignment.axes() {
            out.push_str(&format!(
                "{}: {}% aligned, {} groups, {} skipped {}\n",
                axis.axis.label(),
                axis.alignment_percent,
                axis.count,
                axis.skipped.len(),
                alignment_label(axis.pass)
            ));
            for detection in &axis.skipped {
                out.push_str(&format!(
                    "  - {} {} ({:.0}% confidence) at {},{} {}x{}\n",
                    detection.detection_id,
                    detection.class_label,
                    detection.confidence * 100.0,
                    detection.x,
                    detection.y,
                    detection.width,
                    detection.height
                ));
            }
        }
    }

    out
}

fn validate_payload(path: PathBuf) -> Result<ExitCode> {
    let analysis = match AnalysisResult::from_file(&path) {
        Ok(analysis) => analysis,
        Err(e) if e.is_invalid_input() => {
            eprintln!("Payload validation failed: {}", e);
            return Ok(ExitCode::from(2));
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to load payload from {:?}", path))
        }
    };

    match validate_analysis(&analysis) {
        Ok(()) => {
            println!("Payload is valid: {}", display_name(&path));
            println!();
            println!("Colors: {}", analysis.color.percentages.len());
            println!("Contrast ratio: {:.2}", analysis.color.contrast_ratio);
            println!("Skipped detections: {}", analysis.skipped_detections.len());
            Ok(ExitCode::from(0))
        }
        Err(e) => {
            eprintln!("Payload validation failed: {}", e);
            Ok(ExitCode::from(2))
        }
    }
}

fn show_payload(path: PathBuf) -> Result<ExitCode> {
    let analysis = AnalysisResult::from_file(&path)
        .with_context(|| format!("Failed to load payload from {:?}", path))?;

    println!("Payload: {}", display_name(&path));
    if !analysis.image.is_empty() {
        println!("Image: {}", truncate(&analysis.image, 72));
    }
    println!();

    println!("Alignment:");
    println!(
        "  Rows: {} groups, {}% misaligned, {} skipped",
        analysis.row.count,
        analysis.row.misaligned_percent,
        analysis.row.skipped.len()
    );
    println!(
        "  Columns: {} groups, {}% misaligned, {} skipped",
        analysis.col.count,
        analysis.col.misaligned_percent,
        analysis.col.skipped.len()
    );
    println!();

    println!("Color:");
    println!("  Contrast ratio: {:.2}", analysis.color.contrast_ratio);
    for ((color, pixels), (_, percent)) in analysis
        .color
        .dominant_colors
        .iter()
        .zip(analysis.color.percentages.iter())
    {
        println!("  {} {}: {}% ({} px)", color.to_hex(), color, percent, pixels);
    }
    println!();

    println!("Skipped detections: {}", analysis.skipped_detections.len());

    Ok(ExitCode::from(0))
}

fn list_payloads(path: PathBuf) -> Result<ExitCode> {
    let entries =
        std::fs::read_dir(&path).with_context(|| format!("Failed to read directory {:?}", path))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            paths.push(path);
        }
    }
    // read_dir order is platform dependent
    paths.sort();

    if paths.is_empty() {
        println!("No payloads found in {:?}", path);
        return Ok(ExitCode::from(0));
    }

    for path in &paths {
        println!("{}", summarize_file(path));
    }

    Ok(ExitCode::from(0))
}

/// One-line summary of evaluating a payload file.
fn summarize_file(path: &Path) -> String {
    let name = display_name(path);
    let analysis = match AnalysisResult::from_file(path) {
        Ok(analysis) => analysis,
        Err(e @ PayloadError::InvalidShape(_)) => return format!("{}: INVALID - {}", name, e),
        Err(e) => return format!("{}: UNREADABLE - {:#}", name, anyhow::Error::new(e)),
    };

    match balance_core::evaluate(&analysis) {
        Ok(report) => format!(
            "{}: {} {} (color {:.0}, alignment {:.0})",
            name,
            report.verdict,
            report.overall_display(),
            report.color.score,
            report.alignment.score
        ),
        Err(e) => format!("{}: INVALID - {}", name, e),
    }
}

fn show_rubric(path: Option<PathBuf>) -> Result<ExitCode> {
    let rubric = load_rubric(path.as_deref())?;
    let yaml = serde_yaml::to_string(&rubric)?;

    print!("{}", yaml);
    println!("# fixed: contrast ratio must exceed {}", Rubric::MIN_CONTRAST_RATIO);

    Ok(ExitCode::from(0))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Shorten long references such as data URIs.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let head: String = s.chars().take(max).collect();
    format!("{}...", head)
}
