//! Kana Keyboard Trainer - typing drills for the JIS kana layout
//!
//! Shows a sentence, waits for each key and reports mistakes inline.
//! Press ESC to stop early.

mod cli;

use clap::Parser;
use cli::{Display, InputHandler};
use kana_kb_trainer::kana::KeyKanaTable;
use kana_kb_trainer::sentences::{load_sentences, parse_sentences, prepare_pool, BUNDLED_SENTENCES};
use kana_kb_trainer::session::{KeySource, Session, SessionResult, DEFAULT_ROUNDS};
use serde_json::json;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kana-kb-trainer", version)]
#[command(about = "Kana typing drills on a US keyboard (JIS kana layout)")]
struct Args {
    /// Path to the sentence database, one sentence per line (default: bundled sentences)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Number of exercises
    #[arg(short, long, value_name = "COUNT", default_value_t = DEFAULT_ROUNDS,
          value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Write a debug log to this file
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,

    /// Print the session summary as JSON
    #[arg(long)]
    json: bool,
}

/// Send tracing output to `path`; the terminal itself is in raw mode
fn init_tracing(path: &Path) -> WorkerGuard {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("kana-kb-trainer.log"));

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kana_kb_trainer=debug")),
        )
        .init();

    guard
}

fn print_summary(result: &SessionResult, as_json: bool) {
    if as_json {
        let mistakes: Vec<_> = result
            .frequent_mistakes
            .iter()
            .map(|&((expected, typed), count)| {
                json!({ "expected": expected.to_string(), "typed": typed.to_string(), "count": count })
            })
            .collect();
        let summary = json!({
            "rounds_completed": result.rounds_completed,
            "rounds_total": result.rounds_total,
            "success_count": result.success_count,
            "fail_count": result.fail_count,
            "accuracy": result.accuracy,
            "cancelled": result.cancelled,
            "elapsed_secs": result.elapsed.as_secs_f64(),
            "keystrokes_per_minute": result.keystrokes_per_minute(),
            "frequent_mistakes": mistakes,
            "persistent_mistakes": result
                .persistent_mistakes
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>(),
        });
        println!("{}", summary);
        return;
    }

    println!(
        "Rounds: {}/{} | Correct: {} | Miss: {} | Accuracy: {:.1}% | {:.1}s",
        result.rounds_completed,
        result.rounds_total,
        result.success_count,
        result.fail_count,
        result.accuracy,
        result.elapsed.as_secs_f64()
    );

    if !result.frequent_mistakes.is_empty() {
        let pairs: Vec<String> = result
            .frequent_mistakes
            .iter()
            .map(|&((expected, typed), count)| format!("{expected}→{typed} ×{count}"))
            .collect();
        println!("Frequent mistakes: {}", pairs.join(", "));
    }

    if !result.persistent_mistakes.is_empty() {
        let chars: String = result.persistent_mistakes.iter().collect();
        println!("Keep practicing: {}", chars);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let _log_guard = args.log.as_deref().map(init_tracing);

    let table = KeyKanaTable::global();
    let lines = match &args.file {
        Some(path) => load_sentences(path)?,
        None => parse_sentences(BUNDLED_SENTENCES),
    };
    let pool = prepare_pool(&lines, table)?;
    let session = Session::new(table, pool, args.count)?;

    let result = {
        let mut display = Display::new()?;
        let mut input = InputHandler::new();
        let result = session.run(&mut input, &mut display, &mut rand::thread_rng())?;

        if !result.cancelled {
            input.next_key()?;
        }
        display.shutdown()?;
        result
    };

    print_summary(&result, args.json);
    Ok(())
}
