use crate::commands::{dispatch, Context, ShellCommand, ShellLine};
use crate::error::{invalid_input, report_error};
use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "rapport> ";

#[derive(Debug, Default)]
pub struct ShellSummary {
    pub commands: usize,
    pub failures: usize,
    /// Most recent failure, used for the process exit status.
    pub last_error: Option<anyhow::Error>,
}

/// Runs one command per input line until end of input or `exit`.
///
/// A failing command is reported on stderr and the session carries on; the
/// store keeps whatever state the earlier lines produced.
pub fn run(ctx: &Context<'_>, input: impl BufRead, interactive: bool) -> Result<ShellSummary> {
    let mut summary = ShellSummary::default();
    let mut lines = input.lines();

    loop {
        if interactive {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{PROMPT}")?;
            stdout.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.with_context(|| "read command line")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        summary.commands += 1;
        let tokens = match split_line(trimmed) {
            Ok(tokens) => tokens,
            Err(err) => {
                fail(ctx, &mut summary, err);
                continue;
            }
        };

        let parsed = match ShellLine::try_parse_from(tokens) {
            Ok(parsed) => parsed,
            Err(err) => {
                // Help output is not a failure. With --json it goes to
                // stderr so stdout stays one document per line.
                if ctx.json && !err.use_stderr() {
                    eprint!("{}", err.render());
                } else {
                    let _ = err.print();
                }
                if err.use_stderr() {
                    summary.failures += 1;
                    summary.last_error = Some(invalid_input(format!(
                        "could not parse `{}`",
                        trimmed
                    )));
                }
                continue;
            }
        };

        if matches!(parsed.command, ShellCommand::Exit) {
            debug!("exit requested");
            break;
        }

        if let Err(err) = dispatch(ctx, parsed.command) {
            fail(ctx, &mut summary, err);
        }
    }

    Ok(summary)
}

fn fail(ctx: &Context<'_>, summary: &mut ShellSummary, err: anyhow::Error) {
    report_error(&err, ctx.verbose);
    summary.failures += 1;
    summary.last_error = Some(err);
}

/// Splits a line into words. Double and single quotes group words, and a
/// backslash escapes the next character outside single quotes.
pub fn split_line(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (Some('\''), '\'') => quote = None,
            (Some('"'), '"') => quote = None,
            (Some('\''), _) => current.push(ch),
            (_, '\\') => {
                let escaped = chars
                    .next()
                    .ok_or_else(|| invalid_input("trailing backslash"))?;
                current.push(escaped);
                in_token = true;
            }
            (Some(_), _) => current.push(ch),
            (None, '"' | '\'') => {
                quote = Some(ch);
                in_token = true;
            }
            (None, ch) if ch.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, _) => {
                current.push(ch);
                in_token = true;
            }
        }
    }

    if let Some(open) = quote {
        return Err(invalid_input(format!("unterminated {open} quote")));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
