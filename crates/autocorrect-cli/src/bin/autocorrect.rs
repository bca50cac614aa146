// autocorrect: Interactive spelling suggestions.
//
// Prompts for one word at a time. Dictionary words are confirmed; other
// words get up to N suggestions, nearest first. Type `exit` (or send EOF)
// to quit. Blank lines are ignored rather than ranked as an empty word.
//
// Usage:
//   autocorrect [-d DICT] [OPTIONS]
//
// Options:
//   -d, --dict PATH              Dictionary file
//   -t, --threshold N            Maximum edit distance (default: 3)
//   -n, --max-suggestions N      Suggestions shown per word (default: 5)
//   -h, --help                   Print help

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use autocorrect_engine::{Autocorrect, Correction};

const EXIT_COMMAND: &str = "exit";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if autocorrect_cli::wants_help(&args) {
        println!("autocorrect: Interactive spelling suggestions.");
        println!();
        println!("Usage: autocorrect [-d DICT] [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -d, --dict PATH          Dictionary file (default: $AUTOCORRECT_DICT,");
        println!("                           dictionaries/large.txt, dictionaries/english.txt)");
        println!("  -t, --threshold N        Maximum edit distance (default: 3)");
        println!("  -n, --max-suggestions N  Suggestions shown per word (default: 5)");
        println!("  -h, --help               Print this help");
        return;
    }

    let env_threshold = std::env::var(autocorrect_cli::THRESHOLD_ENV).ok();
    let (common, rest) = autocorrect_cli::parse_common(&args, env_threshold.as_deref())
        .unwrap_or_else(|e| autocorrect_cli::fatal(&e));
    if let Some(unknown) = rest.first() {
        autocorrect_cli::fatal(&format!("unexpected argument: {unknown}"));
    }

    let dictionary = autocorrect_cli::load(common.dict_path.as_deref())
        .unwrap_or_else(|e| autocorrect_cli::fatal(&e));
    let autocorrect = Autocorrect::new(Arc::new(dictionary), common.options);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let _ = writeln!(
        out,
        "Type your words below we will correct them! (type '{EXIT_COMMAND}' to quit)"
    );

    let mut line = String::new();
    loop {
        let _ = write!(out, "Enter a word: ");
        let _ = out.flush();

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        }

        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if word == EXIT_COMMAND {
            let _ = writeln!(out, "Quitting now.");
            break;
        }

        match autocorrect.check(word) {
            Correction::Correct => {
                let _ = writeln!(
                    out,
                    "Word found in the dictionary, looks like you spelled it right!"
                );
                let _ = writeln!(out);
            }
            Correction::Suggestions(suggestions) => {
                let _ = writeln!(out, "Did you mean: ");
                for s in &suggestions {
                    let _ = writeln!(out, " - {s}");
                }
                let _ = writeln!(out);
            }
            Correction::NoMatches => {
                let _ = writeln!(out, "No matches found.");
            }
        }
    }
}
