//! CLI logic for the caret diagnostics tool.
//!
//! Each subcommand exercises one part of the library: `locate` resolves
//! offsets to positions, `raise` runs a parse session that raises a single
//! diagnostic, and `explain` prints catalog templates.

pub mod config;
pub mod error;
pub mod error_adapter;

mod args;

pub use args::{Args, Command};
pub use error::CaretError;

use std::{fmt, fs, io::Write};

use log::{debug, info};

use caret::{Catalog, ErrorCode, ErrorData, ParseError, location::TokenAnchors, parse_with};

/// Run the caret CLI application, writing normal output to `out`.
///
/// # Errors
///
/// Returns `CaretError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Unknown catalog codes
/// - The diagnostics produced by `raise`, which always fails
pub fn run(args: &Args, out: &mut impl Write) -> Result<(), CaretError> {
    match &args.command {
        Command::Locate { input, offsets } => locate(input, offsets, out),
        Command::Raise {
            input,
            at,
            code,
            params,
            plugins,
            error_code,
            recover,
        } => {
            let app_config = config::load_config(args.config.as_ref())?;
            let options = if *recover {
                app_config.parser().clone().with_error_recovery(true)
            } else {
                app_config.parser().clone()
            };

            let mut data = ErrorData::new();
            if !plugins.is_empty() {
                data = data.with_missing_plugin(plugins);
            }
            if let Some(error_code) = error_code {
                data = data.with_code(error_code);
            }

            let code: ErrorCode = code.parse()?;
            let source = fs::read_to_string(input)?;

            info!(
                input,
                offset = at,
                code = code.as_str(),
                mode:? = options.mode();
                "Raising diagnostic"
            );

            let params: Vec<&dyn fmt::Display> =
                params.iter().map(|p| p as &dyn fmt::Display).collect();
            let parsed = parse_with(&source, &options, |session| {
                session.raise_with_data(*at, data, code, &params)
            })
            .map_err(|err| CaretError::new_parse_error(err, source.as_str()))?;

            let (_, errors) = parsed.into_parts();
            info!(recorded = errors.len(); "Diagnostics recorded");
            Err(CaretError::new_parse_error(ParseError::new(errors), source))
        }
        Command::Explain { code } => explain(code.as_deref(), out),
    }
}

/// Print `offset line:column` for each offset.
fn locate(input: &str, offsets: &[usize], out: &mut impl Write) -> Result<(), CaretError> {
    let source = fs::read_to_string(input)?;
    let anchors = TokenAnchors::default();

    debug!(input, offsets = offsets.len(); "Resolving offsets");

    for &offset in offsets {
        let position = caret::resolve(offset, &anchors, &source);
        writeln!(out, "{offset} {position}")?;
    }
    Ok(())
}

/// Print the raw template for `code`, or list the whole catalog one entry
/// per line with line breaks escaped.
fn explain(code: Option<&str>, out: &mut impl Write) -> Result<(), CaretError> {
    match code {
        Some(code) => {
            let template = Catalog::lookup(code)?;
            writeln!(out, "{}", template.format())?;
        }
        None => {
            for template in Catalog::templates() {
                writeln!(out, "{}: {}", template.code(), single_line(template.format()))?;
            }
        }
    }
    Ok(())
}

/// Escape line breaks so a template fits on one output line.
fn single_line(text: &str) -> String {
    text.replace('\r', "\\r").replace('\n', "\\n")
}
