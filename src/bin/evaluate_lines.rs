//! `evaluate-lines`: parses every part of a score into its Westergaard line interpretation(s)
//! and prints a parse report.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use westergaard_lines::context::GlobalContext;
use westergaard_lines::harmony::{DiatonicMode, Key};
use westergaard_lines::io::RawScore;
use westergaard_lines::line::{BranchLimits, LineParser, LineType as CrateLineType};
use westergaard_lines::pitch::Pitch;
use westergaard_lines::report::{ParseFailure, PartOutcome, Reporter};

#[derive(Parser)]
#[command(author, version, about = "Parse score lines into Westergaard structural interpretations")]
struct Cli {
    /// Path to a JSON score file (see the crate's `RawScore` contract).
    source: PathBuf,

    /// Key override as a tonic letter, e.g. "D" or "Bb", paired with `--mode`.
    #[arg(long)]
    key: Option<String>,

    /// Mode to use with `--key` (defaults to major).
    #[arg(long, value_enum, default_value_t = ModeArg::Major)]
    mode: ModeArg,

    /// Restrict analysis to a single part: 0-indexed from the top, or negative to count from
    /// the bottom (`-1` is the last part, `-2` the second to last).
    #[arg(long, allow_hyphen_values = true)]
    part: Option<isize>,

    /// Restrict the requested line-type for the selected part(s).
    #[arg(long, value_enum, default_value_t = LineTypeArg::Any)]
    line_type: LineTypeArg,

    /// Emit the full JSON report instead of the text block.
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum ModeArg {
    Major,
    Minor,
}

#[derive(Copy, Clone, ValueEnum)]
enum LineTypeArg {
    Primary,
    Bass,
    Generic,
    Any,
}

/// Resolves a `--part` argument against `len` parts: non-negative indexes from the top,
/// negative indexes from the bottom (`-1` is the last part). Returns `None` if out of range.
fn resolve_part_index(arg: isize, len: usize) -> Option<usize> {
    if arg >= 0 {
        let index = arg as usize;
        (index < len).then_some(index)
    } else {
        let from_end = (-arg) as usize;
        (from_end <= len).then(|| len - from_end)
    }
}

fn requested_line_types(arg: LineTypeArg) -> Vec<CrateLineType> {
    match arg {
        LineTypeArg::Primary => vec![CrateLineType::Primary],
        LineTypeArg::Bass => vec![CrateLineType::Bass],
        LineTypeArg::Generic => vec![CrateLineType::Generic],
        LineTypeArg::Any => vec![CrateLineType::Primary, CrateLineType::Bass, CrateLineType::Generic],
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let text = match std::fs::read_to_string(&cli.source) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("failed to read {}: {err}", cli.source.display());
            return ExitCode::FAILURE;
        }
    };

    let score: RawScore = match serde_json::from_str(&text) {
        Ok(score) => score,
        Err(err) => {
            eprintln!("failed to parse score JSON: {err}");
            return ExitCode::FAILURE;
        }
    };

    let key_override = match &cli.key {
        Some(name) => match name.parse::<Pitch>() {
            Ok(tonic) => Some(Key::new(
                tonic,
                match cli.mode {
                    ModeArg::Major => DiatonicMode::MAJOR,
                    ModeArg::Minor => DiatonicMode::NATURAL_MINOR,
                },
            )),
            Err(_) => {
                eprintln!("malformed key tonic {name:?}");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    let ctx = match GlobalContext::build(&score, key_override) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let selected_part = match cli.part {
        Some(arg) => match resolve_part_index(arg, ctx.parts.len()) {
            Some(index) => Some(index),
            None => {
                eprintln!("--part {arg} is out of range for a score with {} part(s)", ctx.parts.len());
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    let mut reporter = Reporter::new(ctx.key);
    let limits = BranchLimits::default();
    let line_types = requested_line_types(cli.line_type);

    for index in 0..ctx.parts.len() {
        if selected_part.is_some_and(|p| p != index) {
            continue;
        }

        let mut accepted = Vec::new();
        let mut failures = Vec::new();

        for &line_type in &line_types {
            match LineParser::parse(&ctx, index, line_type, limits) {
                Ok(interpretations) => accepted.extend(interpretations),
                Err(error) => failures.push(ParseFailure { part: index, line_type, error }),
            }
        }

        reporter.record_part(PartOutcome { index, species: ctx.parts[index].species, accepted, failures });
    }

    if cli.json {
        match serde_json::to_string_pretty(&reporter.render_json()) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("failed to serialize report: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", reporter.render_text());
    }

    ExitCode::SUCCESS
}
