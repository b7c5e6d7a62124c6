//! asciify CLI - Convert images to ASCII art

use asciify::preview::write_preview;
use asciify::session::normalize_dropped_path;
use asciify::{AsciiError, Config, Theme};
use clap::Parser;
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::QueueableCommand;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "asciify", version, about = "Convert images to ASCII art")]
struct Args {
    /// Input image file
    input: String,
    /// Output width in characters
    #[arg(short, long)]
    width: Option<u32>,
    /// Characters from darkest to lightest (empty = built-in gradient)
    #[arg(short, long)]
    charset: Option<String>,
    /// Save the art to this text file
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Color theme for terminal output
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,
    /// Print plain text without theme colors
    #[arg(long)]
    no_color: bool,
    /// Write a thumbnail of the original image to this file
    #[arg(long)]
    preview: Option<PathBuf>,
    /// Config file (default: <config dir>/asciify/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AsciiError> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(charset) = args.charset {
        config.charset = Some(charset);
    }
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    let mut session = config.into_session();
    let art = session.process(&args.input)?.to_owned();

    if let Some(path) = &args.preview {
        if let Err(err) = write_preview(normalize_dropped_path(&args.input), path, 0) {
            log::warn!("preview failed: {err}");
            eprintln!("preview unavailable: {err}");
        }
    }

    let stdout = std::io::stdout();
    let colored = !args.no_color && stdout.is_terminal();
    print_art(&mut stdout.lock(), &art, colored.then_some(session.theme))?;

    if let Some(path) = &args.output {
        session.save(path)?;
        eprintln!("ASCII art saved as: {}", path.display());
    }
    Ok(())
}

fn print_art(out: &mut impl Write, art: &str, theme: Option<Theme>) -> std::io::Result<()> {
    let Some(theme) = theme else {
        writeln!(out, "{art}")?;
        return out.flush();
    };
    let colors = theme.colors();
    for line in art.lines() {
        out.queue(SetForegroundColor(colors.text_fg.into()))?
            .queue(SetBackgroundColor(colors.text_bg.into()))?
            .queue(Print(line))?
            .queue(ResetColor)?
            .queue(Print("\n"))?;
    }
    out.flush()
}
