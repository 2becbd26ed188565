use anyhow::{Context, Result};
use clap::Parser;
use keycalc::calculator::copy_to_clipboard;
use keycalc::config::Config;
use keycalc::shell::{Frame, Shell};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

/// An immediate-execution four-function calculator driven by keys.
///
/// Keys are digits, `.`, `+ - * x /`, `%`, `_` (sign), `=` or `Enter`,
/// and `c` or `Escape` to clear.
#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about)]
struct Cli {
    /// Key scripts to evaluate, e.g. `2+3x4=`. Reads stdin when omitted.
    keys: Vec<String>,

    /// Path to the config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print every frame as a JSON line.
    #[arg(long)]
    json: bool,

    /// Print every frame, not only the final display.
    #[arg(long)]
    trace: bool,

    /// Copy the final display to the clipboard.
    #[arg(long)]
    copy: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config =
        Config::load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;
    keycalc::logging::init(&config.logging);

    let mut shell = Shell::new(config.shell);
    let mut stdout = io::stdout().lock();

    if cli.keys.is_empty() {
        info!("Reading keys from stdin");
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("Failed to read stdin")?;
            let frames = shell.run_script(&line);
            print_frames(&mut stdout, &cli, &frames)?;
            if !cli.json {
                writeln!(stdout, "{}", shell.output().display)?;
            }
        }
    } else {
        for script in &cli.keys {
            let frames = shell.run_script(script);
            print_frames(&mut stdout, &cli, &frames)?;
        }
        if !cli.json {
            writeln!(stdout, "{}", shell.output().display)?;
        }
    }

    if cli.copy {
        copy_to_clipboard(&shell.output().display)?;
    }

    Ok(())
}

fn print_frames(out: &mut impl Write, cli: &Cli, frames: &[Frame]) -> Result<()> {
    for frame in frames {
        if cli.json {
            writeln!(out, "{}", frame.to_json()?)?;
        } else if cli.trace {
            writeln!(out, "{}", frame)?;
        }
    }
    Ok(())
}
