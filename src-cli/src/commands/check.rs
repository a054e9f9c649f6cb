//! `keysmith check` — grade an existing password.

use std::io::{BufRead, Write};

use clap::Args;
use zeroize::Zeroizing;

use keysmith_core::{analyze_strength, StrengthReport, StrengthScorer};

use crate::error::CliError;

/// Arguments for `check`.
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Password to grade; omit or pass `-` to read one line from stdin
    pub password: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Grade a password by entropy and by `scorer`.
///
/// # Errors
///
/// Returns [`CliError::EmptyInput`] when stdin yields nothing, and
/// [`CliError::Io`] / [`CliError::Json`] on output failures.
pub fn run(
    args: &CheckArgs,
    scorer: &dyn StrengthScorer,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let password = match args.password.as_deref() {
        Some(p) if p != "-" => Zeroizing::new(p.to_string()),
        _ => read_password_line(input)?,
    };

    let report = analyze_strength(&password, Some(scorer));

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write_report(&report, out)?;
    }
    Ok(())
}

fn read_password_line(input: &mut dyn BufRead) -> Result<Zeroizing<String>, CliError> {
    let mut line = Zeroizing::new(String::new());
    input.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(&['\r', '\n'][..]);
    if trimmed.is_empty() {
        return Err(CliError::EmptyInput);
    }
    Ok(Zeroizing::new(trimmed.to_string()))
}

fn write_report(report: &StrengthReport, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(
        out,
        "entropy:    {:.1} bits ({})",
        report.entropy_bits, report.entropy_strength
    )?;
    if let Some(score) = &report.score {
        let tier = report
            .score_strength
            .map_or("Unknown", keysmith_core::StrengthTier::as_str);
        writeln!(out, "score:      {}/4 ({tier})", score.score)?;
        if let Some(warning) = &score.warning {
            writeln!(out, "warning:    {warning}")?;
        }
        for suggestion in &score.suggestions {
            writeln!(out, "suggestion: {suggestion}")?;
        }
    }
    Ok(())
}
