// Line protocol for driving the humanizer from another process.
//
//   HUMANIZE <text>
//   HUMANIZE_AS <casual|personal> <text>
//   DETECT <text>
//   EXIT
//
// Each command is answered with one JSON line on stdout: {"ok": ...} or
// {"error": "..."}. Logs go to stderr.
use humanize_core::config::Config;
use humanize_core::logging::init_tracing;
use humanize_core::persistence::open_or_seed;
use humanize_core::{HumanizeError, Humanizer, MemoryLexicon, Style};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info};

fn main() -> io::Result<()> {
    let config = match Config::load(None) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            std::process::exit(2);
        }
    };
    init_tracing(&config.log_level);
    info!("humanize bridge starting");

    let lexicon = match open_or_seed(&config.lexicon_path, config.seed_if_missing) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            error!(error = %e, "could not load lexicon");
            std::process::exit(1);
        }
    };
    let engine = Humanizer::new(lexicon);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let input = line?;
        debug!(input = %input, "<-");
        let (command, rest) = split_command(&input);

        let reply = match command {
            "HUMANIZE" => handle_humanize(&engine, rest, config.default_style),
            "HUMANIZE_AS" => {
                let (style, text) = split_command(rest);
                match style.parse::<Style>() {
                    Ok(style) => handle_humanize(&engine, text, Some(style)),
                    Err(e) => error_reply(&e),
                }
            }
            "DETECT" => match engine.detect_style(rest) {
                Ok(report) => json!({ "ok": report }),
                Err(e) => error_reply(&e),
            },
            "EXIT" => {
                info!("received EXIT");
                break;
            }
            "" => continue,
            other => json!({ "error": format!("unknown command: {}", other) }),
        };

        writeln!(stdout, "{}", reply)?;
        stdout.flush()?;
    }
    info!("humanize bridge shutting down");
    Ok(())
}

/// Splits off the first space-delimited word. The remainder keeps its inner
/// spacing.
fn split_command(input: &str) -> (&str, &str) {
    let trimmed = input.trim_start();
    match trimmed.split_once(' ') {
        Some((head, tail)) => (head, tail),
        None => (trimmed.trim_end(), ""),
    }
}

fn handle_humanize(engine: &Humanizer<MemoryLexicon>, text: &str, style: Option<Style>) -> Value {
    match engine.humanize(text, style) {
        Ok(response) => json!({ "ok": response }),
        Err(e) => error_reply(&e),
    }
}

fn error_reply(e: &HumanizeError) -> Value {
    error!(error = %e, "request failed");
    json!({ "error": e.to_string() })
}
