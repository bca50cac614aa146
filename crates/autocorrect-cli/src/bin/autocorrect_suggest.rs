// autocorrect-suggest: Spelling suggestions for words from arguments or stdin.
//
// Correctly spelled words are printed as-is; misspelled words are followed
// by their suggestions, nearest first.
//
// Usage:
//   autocorrect-suggest [-d DICT] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict PATH              Dictionary file
//   -t, --threshold N            Maximum edit distance (default: 3)
//   -n, --max-suggestions N      Maximum number of suggestions (default: 5)
//   --json                       One JSON object per word
//   -h, --help                   Print help

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use autocorrect_engine::{Autocorrect, Correction};
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    word: &'a str,
    #[serde(flatten)]
    correction: &'a Correction,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if autocorrect_cli::wants_help(&args) {
        println!("autocorrect-suggest: Generate spelling suggestions.");
        println!();
        println!("Usage: autocorrect-suggest [-d DICT] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict PATH          Dictionary file");
        println!("  -t, --threshold N        Maximum edit distance (default: 3)");
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 5, 0 = all)");
        println!("  --json                   Print one JSON object per word");
        println!("  -h, --help               Print this help");
        return;
    }

    let env_threshold = std::env::var(autocorrect_cli::THRESHOLD_ENV).ok();
    let (common, rest) = autocorrect_cli::parse_common(&args, env_threshold.as_deref())
        .unwrap_or_else(|e| autocorrect_cli::fatal(&e));

    let mut json = false;
    let mut words: Vec<String> = Vec::new();
    for arg in rest {
        if arg == "--json" {
            json = true;
        } else if arg.starts_with('-') {
            autocorrect_cli::fatal(&format!("unknown option: {arg}"));
        } else {
            words.push(arg);
        }
    }

    let dictionary = autocorrect_cli::load(common.dict_path.as_deref())
        .unwrap_or_else(|e| autocorrect_cli::fatal(&e));
    let autocorrect = Autocorrect::new(Arc::new(dictionary), common.options);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut suggest_word = |word: &str| {
        let correction = autocorrect.check(word);
        if json {
            let report = Report {
                word,
                correction: &correction,
            };
            match serde_json::to_string(&report) {
                Ok(line) => {
                    let _ = writeln!(out, "{line}");
                }
                Err(e) => eprintln!("error serializing result for {word}: {e}"),
            }
            return;
        }
        match correction {
            Correction::Correct => {
                let _ = writeln!(out, "{word} (correct)");
            }
            Correction::NoMatches => {
                let _ = writeln!(out, "{word}: (no suggestions)");
            }
            Correction::Suggestions(suggestions) => {
                let _ = writeln!(out, "{word}:");
                for s in &suggestions {
                    let _ = writeln!(out, "  {s}");
                }
            }
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            suggest_word(word);
        }
    } else {
        for word in &words {
            suggest_word(word);
        }
    }
}
