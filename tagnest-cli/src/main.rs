//! tagnest CLI - structural validation for markup-like text
//!
//! Reports extra closing tags, mismatched closing tags and unclosed elements
//! with their line numbers, followed by an indented view of every completed
//! element.

mod document;
mod highlight;
mod render;

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser};
use tagnest_common::Theme;
use tagnest_common::notice::{notice, notice_once, set_color_enabled};
use tagnest_markup::{Recovery, tokenize, validate_with};
use tracing_subscriber::EnvFilter;

use crate::document::SaveOutcome;
use crate::render::Renderer;

/// tagnest - check that tags in a document nest correctly
#[derive(Parser, Debug)]
#[command(name = "tagnest")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Validate a file
    tagnest page.html

    # Validate a string directly
    tagnest --html '<ul><li>one</li></ul>'

    # Show the source with tags colored and error lines shaded
    tagnest page.html --highlight --theme dark

    # Save the error list next to the page
    tagnest page.html --save-errors page-errors.txt

    # Machine-readable output, non-zero exit status on errors
    tagnest page.html --json --check
"#)]
struct Cli {
    /// Document to validate (.html, .htm or .txt)
    #[arg(value_name = "FILE", required_unless_present = "html")]
    path: Option<PathBuf>,

    /// Validate this string instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    #[command(flatten)]
    output: OutputArgs,

    /// Write the error messages to this file (a missing extension becomes .txt)
    #[arg(short = 's', long, value_name = "FILE")]
    save_errors: Option<PathBuf>,

    /// Color theme: light or dark
    #[arg(long, value_name = "THEME", default_value = "light")]
    theme: Theme,

    /// Mismatch handling: discard (drop the unmatched element) or resync
    /// (close intervening elements when a matching one is open further out)
    #[arg(long, value_name = "POLICY", default_value = "discard")]
    recovery: Recovery,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with status 1 when any error is reported
    #[arg(long)]
    check: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// What to print besides the report.
#[derive(Args, Debug, Default, PartialEq, Eq)]
struct OutputArgs {
    /// Print the extracted tags before the report
    #[arg(short, long)]
    tokens: bool,

    /// Print the report as JSON
    #[arg(short, long)]
    json: bool,

    /// Print the source with tags colored and error lines shaded
    #[arg(short = 'H', long)]
    highlight: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let color = !cli.no_color && io::stdout().is_terminal();
    set_color_enabled(!cli.no_color && io::stderr().is_terminal());
    let palette = cli.theme.palette();
    tracing::debug!(theme = %cli.theme, recovery = %cli.recovery, color, "starting");

    let source = document::read_input(cli.html, cli.path.as_deref())
        .context("could not load the document")?;

    let result = validate_with(&source, cli.recovery);
    let messages = result.messages();

    let mut out = io::stdout().lock();
    if cli.output.tokens {
        write!(out, "{}", render::token_dump(&tokenize(&source)))?;
    }

    if cli.output.json {
        if cli.output.highlight {
            let _ = notice_once("CLI", "--highlight is ignored with --json", &palette);
        }
        writeln!(out, "{}", render::json_report(&result)?)?;
    } else {
        if cli.output.highlight {
            writeln!(
                out,
                "{}",
                highlight::render_source(&source, &messages, &palette, color)
            )?;
        }
        write!(out, "{}", Renderer::new(palette, color).report(&result))?;
    }
    out.flush()?;

    if let Some(path) = &cli.save_errors {
        let outcome = document::save_errors(path, &messages)
            .with_context(|| format!("could not save errors to {}", path.display()))?;
        match outcome {
            SaveOutcome::Saved(saved) => notice(
                "Report",
                &format!("Error report saved to {}", saved.display()),
                &palette,
            ),
            SaveOutcome::NothingToSave => notice("Report", "No errors to save!", &palette),
        }
    }

    if cli.check && !result.is_valid() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tagnest", "page.html"]).expect("parse");
        assert_eq!(cli.theme, Theme::Light);
        assert_eq!(cli.recovery, Recovery::Discard);
        assert_eq!(cli.path, Some(PathBuf::from("page.html")));
        assert!(!cli.check);
        assert_eq!(cli.output, OutputArgs::default());
    }

    #[test]
    fn test_output_flags() {
        let cli =
            Cli::try_parse_from(["tagnest", "page.html", "-t", "--json", "-H"]).expect("parse");
        assert_eq!(
            cli.output,
            OutputArgs {
                tokens: true,
                json: true,
                highlight: true,
            }
        );
    }

    #[test]
    fn test_theme_and_recovery_flags() {
        let cli = Cli::try_parse_from([
            "tagnest",
            "--html",
            "<a>",
            "--theme",
            "dark",
            "--recovery",
            "resync",
            "-vv",
        ])
        .expect("parse");
        assert_eq!(cli.theme, Theme::Dark);
        assert_eq!(cli.recovery, Recovery::Resync);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.html.as_deref(), Some("<a>"));
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["tagnest"]).is_err());
        assert!(Cli::try_parse_from(["tagnest", "a.html", "--html", "<a>"]).is_err());
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!(Cli::try_parse_from(["tagnest", "a.html", "--theme", "sepia"]).is_err());
    }
}
