//! Command-line interface parsing for the standings CLI
//!
//! This module handles parsing of CLI arguments using clap: the `-r` flag to
//! force a refresh, the `-s` flag to force the plain table style, and an
//! optional competition code. Unrecognized flags are dropped before parsing
//! rather than rejected, so stray options never abort a run.

use clap::Parser;

/// Default competition when none is given (Brazilian Série A)
const DEFAULT_COMPETITION: &str = "bsa";

/// Short flags the parser understands, including clap's built-ins
const KNOWN_SHORTS: [char; 4] = ['r', 's', 'h', 'V'];

/// Long flags the parser understands, including clap's built-ins
const KNOWN_LONGS: [&str; 4] = ["refresh", "simple", "help", "version"];

/// Tabela - football league standings in your terminal
#[derive(Parser, Debug)]
#[command(name = "tabela")]
#[command(about = "View football league standings from football-data.org")]
#[command(version)]
pub struct Cli {
    /// Force a refresh, bypassing the local cache
    #[arg(short = 'r', long = "refresh")]
    pub refresh: bool,

    /// Force the simple (plain ASCII) table style
    #[arg(short = 's', long = "simple")]
    pub simple: bool,

    /// Competition code to show (e.g. bsa, pl, pd)
    #[arg(value_name = "COMPETITION", default_value = DEFAULT_COMPETITION)]
    pub competition: String,
}

impl Cli {
    /// Parses the process arguments, ignoring unrecognized flags
    pub fn parse_lenient() -> Self {
        Self::parse_lenient_from(std::env::args())
    }

    /// Parses the given arguments, ignoring unrecognized flags
    ///
    /// Unknown long flags are dropped entirely; unknown characters inside a
    /// short-flag cluster are stripped, keeping the known ones (`-rx`
    /// behaves like `-r`). Positional arguments pass through untouched.
    pub fn parse_lenient_from<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self::parse_from(drop_unknown_flags(args))
    }
}

/// Filters out flag tokens the parser does not understand
fn drop_unknown_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut kept: Vec<String> = args.next().into_iter().collect();

    for arg in args {
        if let Some(long) = arg.strip_prefix("--") {
            if KNOWN_LONGS.contains(&long) {
                kept.push(arg);
            }
        } else if let Some(shorts) = arg.strip_prefix('-') {
            if shorts.is_empty() {
                continue;
            }
            let known: String = shorts.chars().filter(|c| KNOWN_SHORTS.contains(c)).collect();
            if !known.is_empty() {
                kept.push(format!("-{}", known));
            }
        } else {
            kept.push(arg);
        }
    }

    kept
}
