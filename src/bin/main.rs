use crossterm::style::Stylize;
use humanize_core::config::Config;
use humanize_core::logging::init_tracing;
use humanize_core::persistence::{open_or_seed, save_snapshot};
use humanize_core::{Humanizer, MemoryLexicon, Style};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = match Config::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_level);

    let lexicon = match open_or_seed(&config.lexicon_path, config.seed_if_missing) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprintln!("[ERROR] Could not load lexicon: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let engine = Humanizer::new(lexicon);
    let mut style_override = config.default_style;

    println!("{}", "Indonesian Humanizer".bold());
    println!("Type text to rewrite. ':style casual|personal|auto', ':save', 'exit'.");

    loop {
        println!("\n{}", "=".repeat(50));
        print!("Enter text (or 'exit' to quit): ");
        if stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = input.trim();

        match line {
            "" => continue,
            s if s.eq_ignore_ascii_case("exit") => break,
            ":save" => save(&engine, &config),
            s if s.starts_with(":style") => {
                style_override = match s[":style".len()..].trim() {
                    "auto" | "" => None,
                    other => match other.parse::<Style>() {
                        Ok(style) => Some(style),
                        Err(e) => {
                            println!("{}", e.to_string().red());
                            continue;
                        }
                    },
                };
                let label = style_override.map_or("auto", Style::as_str);
                println!("Style: {}", label.yellow());
            }
            text => match engine.humanize(text, style_override) {
                Ok(response) => {
                    println!("\nDetected context: {}", response.detected_style.to_string().cyan());
                    println!("\nTranslation:");
                    println!("-> {}", response.humanized.green());
                    for change in &response.changes {
                        println!("   {} -> {}", change.original.as_str().dark_grey(), change.humanized);
                    }
                }
                Err(e) => println!("{}", format!("[ERROR] {}", e).red()),
            },
        }
    }

    println!("\nGoodbye!");
    ExitCode::SUCCESS
}

fn save(engine: &Humanizer<MemoryLexicon>, config: &Config) {
    match save_snapshot(engine.lexicon(), &config.lexicon_path) {
        Ok(()) => println!("Lexicon saved to '{}'", config.lexicon_path.display()),
        Err(e) => println!("{}", format!("[ERROR] Could not save lexicon: {}", e).red()),
    }
}
