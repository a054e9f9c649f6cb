//! `keysmith generate` — password generation.
//!
//! Generated values go to stdout only; the strength line goes to stderr so
//! piping stdout yields nothing but passwords. Values are never logged.

use std::io::Write;

use clap::builder::RangedU64ValueParser;
use clap::Args;
use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use keysmith_core::{
    calculate_password_entropy, describe_strength, generate_password, GenerationOptions,
    StrengthTier,
};
use keysmith_prefs::{Preferences, MAX_COUNT};

use crate::error::CliError;

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

/// Longest password `-l` accepts. Saved defaults stay within the narrower
/// `MIN_UI_LENGTH..=MAX_UI_LENGTH`; one-off runs may go outside it.
pub const MAX_CLI_LENGTH: u64 = 4096;

/// Flags for `generate`. Unset flags fall back to saved preferences.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Password length (1 to 4096)
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_CLI_LENGTH)
    )]
    pub length: Option<usize>,

    /// Include uppercase letters
    #[arg(long, overrides_with = "no_uppercase")]
    pub uppercase: bool,
    /// Leave out uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Include lowercase letters
    #[arg(long, overrides_with = "no_lowercase")]
    pub lowercase: bool,
    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Include digits
    #[arg(long, overrides_with = "no_numbers")]
    pub numbers: bool,
    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Include symbols
    #[arg(long, overrides_with = "no_symbols")]
    pub symbols: bool,
    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Leave out look-alike characters (I, l, 1, O, 0)
    #[arg(long, overrides_with = "include_ambiguous")]
    pub exclude_ambiguous: bool,
    /// Allow look-alike characters
    #[arg(long)]
    pub include_ambiguous: bool,

    /// How many passwords to print
    #[arg(
        short = 'n',
        long,
        value_name = "COUNT",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_COUNT))
    )]
    pub count: Option<u32>,

    /// Print a JSON array of records instead of plain lines
    #[arg(long)]
    pub json: bool,
}

/// Resolve a `--flag` / `--no-flag` pair against a saved default.
const fn toggle(on: bool, off: bool, saved: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        saved
    }
}

/// Merge command-line flags over saved preferences.
#[must_use]
pub fn resolve_options(args: &GenerateArgs, prefs: &Preferences) -> GenerationOptions {
    let saved = &prefs.generation;
    GenerationOptions {
        length: args.length.unwrap_or(saved.length),
        include_uppercase: toggle(args.uppercase, args.no_uppercase, saved.include_uppercase),
        include_lowercase: toggle(args.lowercase, args.no_lowercase, saved.include_lowercase),
        include_numbers: toggle(args.numbers, args.no_numbers, saved.include_numbers),
        include_symbols: toggle(args.symbols, args.no_symbols, saved.include_symbols),
        exclude_ambiguous: toggle(
            args.exclude_ambiguous,
            args.include_ambiguous,
            saved.exclude_ambiguous,
        ),
    }
}

// ---------------------------------------------------------------------------
// Output DTO
// ---------------------------------------------------------------------------

/// One generated password with its entropy grade.
///
/// `Debug` masks the value; the buffer is wiped on drop.
#[derive(Clone, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPassword {
    /// The generated password.
    pub value: String,
    /// Entropy estimate in bits.
    pub entropy_bits: f64,
    /// Tier of `entropy_bits`.
    #[zeroize(skip)]
    pub strength: StrengthTier,
}

impl std::fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedPassword")
            .field("value", &"***")
            .field("entropy_bits", &self.entropy_bits)
            .field("strength", &self.strength)
            .finish()
    }
}

impl GeneratedPassword {
    fn new(value: String) -> Self {
        let entropy_bits = calculate_password_entropy(&value);
        Self {
            value,
            entropy_bits,
            strength: describe_strength(entropy_bits),
        }
    }
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// Generate passwords per `args` over `prefs`.
///
/// # Errors
///
/// Returns [`CliError::Password`] for unusable options and [`CliError::Io`]
/// if writing fails.
pub fn run(
    args: &GenerateArgs,
    prefs: &Preferences,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let options = resolve_options(args, prefs);
    let count = args.count.unwrap_or(prefs.count);
    tracing::debug!(
        length = options.length,
        uppercase = options.include_uppercase,
        lowercase = options.include_lowercase,
        numbers = options.include_numbers,
        symbols = options.include_symbols,
        exclude_ambiguous = options.exclude_ambiguous,
        count,
        "generating passwords"
    );

    let records = (0..count)
        .map(|_| generate_password(&options).map(GeneratedPassword::new))
        .collect::<Result<Vec<_>, _>>()?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &records)?;
        writeln!(out)?;
        return Ok(());
    }

    for record in &records {
        writeln!(out, "{}", record.value)?;
        if prefs.show_strength {
            writeln!(
                err,
                "strength: {} ({:.1} bits)",
                record.strength, record.entropy_bits
            )?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use keysmith_core::{meets_requirements, PasswordError, AMBIGUOUS_CHARS};

    fn run_to_strings(args: &GenerateArgs, prefs: &Preferences) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(args, prefs, &mut out, &mut err).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn defaults_come_from_preferences() {
        let mut prefs = Preferences::default();
        prefs.generation.length = 40;
        prefs.generation.include_symbols = false;
        let options = resolve_options(&GenerateArgs::default(), &prefs);
        assert_eq!(options, prefs.generation);
    }

    #[test]
    fn flags_override_preferences_both_ways() {
        let mut prefs = Preferences::default();
        prefs.generation.include_symbols = false;
        prefs.generation.exclude_ambiguous = true;
        let args = GenerateArgs {
            length: Some(12),
            symbols: true,
            no_uppercase: true,
            include_ambiguous: true,
            ..GenerateArgs::default()
        };
        let options = resolve_options(&args, &prefs);
        assert_eq!(options.length, 12);
        assert!(options.include_symbols);
        assert!(!options.include_uppercase);
        assert!(!options.exclude_ambiguous);
    }

    #[test]
    fn prints_count_lines_with_strength_on_stderr() {
        let args = GenerateArgs {
            length: Some(20),
            count: Some(3),
            ..GenerateArgs::default()
        };
        let prefs = Preferences::default();
        let (out, err) = run_to_strings(&args, &prefs);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert_eq!(line.len(), 20);
            assert!(meets_requirements(line, &prefs.generation));
        }
        assert_eq!(err.lines().count(), 3);
        assert!(err.lines().all(|l| l.starts_with("strength: ")));
    }

    #[test]
    fn strength_line_can_be_disabled() {
        let prefs = Preferences {
            show_strength: false,
            ..Preferences::default()
        };
        let (out, err) = run_to_strings(&GenerateArgs::default(), &prefs);
        assert_eq!(out.lines().count(), 1);
        assert!(err.is_empty());
    }

    #[test]
    fn json_output_has_records() {
        let args = GenerateArgs {
            count: Some(2),
            exclude_ambiguous: true,
            json: true,
            ..GenerateArgs::default()
        };
        let (out, err) = run_to_strings(&args, &Preferences::default());
        assert!(err.is_empty());

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let records = parsed.as_array().unwrap();
        assert_eq!(records.len(), 2);
        for record in records {
            let value = record["value"].as_str().unwrap();
            assert_eq!(value.len(), 16);
            assert!(value.bytes().all(|b| !AMBIGUOUS_CHARS.contains(&b)));
            assert!(record["entropyBits"].as_f64().unwrap() > 90.0);
            assert_eq!(record["strength"], "Strong");
        }
    }

    #[test]
    fn empty_selection_surfaces_core_error() {
        let args = GenerateArgs {
            no_uppercase: true,
            no_lowercase: true,
            no_numbers: true,
            no_symbols: true,
            ..GenerateArgs::default()
        };
        let err = run(&args, &Preferences::default(), &mut Vec::new(), &mut Vec::new())
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Password(PasswordError::NoCharacterTypesSelected)
        ));
    }

    #[test]
    fn debug_masks_value() {
        let record = GeneratedPassword::new("hunter2".to_string());
        let debug = format!("{record:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("***"));
    }
}
