// autocorrect-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use autocorrect_core::{ConfigError, Dictionary, load_dictionary};
use autocorrect_engine::AutocorrectOptions;

/// Environment variable naming a dictionary file.
pub const DICT_ENV: &str = "AUTOCORRECT_DICT";

/// Environment variable overriding the default threshold.
pub const THRESHOLD_ENV: &str = "AUTOCORRECT_THRESHOLD";

/// Directory searched relative to the working directory.
const DICT_DIR: &str = "dictionaries";

/// Dictionary file names tried inside [`DICT_DIR`], in order.
const DICT_NAMES: &[&str] = &["large.txt", "english.txt"];

/// Options shared by every autocorrect tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonArgs {
    pub dict_path: Option<String>,
    pub options: AutocorrectOptions,
}

/// Find and load the dictionary.
///
/// An explicit `dict_path` must exist. Without one, the search order is:
/// 1. `AUTOCORRECT_DICT` environment variable
/// 2. `./dictionaries/large.txt`
/// 3. `./dictionaries/english.txt`
pub fn load(dict_path: Option<&str>) -> Result<Dictionary, String> {
    if let Some(path) = dict_path {
        return load_dictionary(path).map_err(|e| e.to_string());
    }

    let search_paths = build_search_paths(std::env::var(DICT_ENV).ok().as_deref());
    for path in &search_paths {
        if path.is_file() {
            return load_dictionary(path).map_err(|e| e.to_string());
        }
    }

    Err(format!(
        "could not find a dictionary in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate dictionary files.
fn build_search_paths(env_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(p) = env_path {
        paths.push(PathBuf::from(p));
    }
    for name in DICT_NAMES {
        paths.push(PathBuf::from(DICT_DIR).join(name));
    }
    paths
}

/// Parse a threshold value. Negative numbers are rejected rather than
/// treated as "match nothing".
pub fn parse_threshold(value: &str) -> Result<usize, String> {
    let n: i64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid number for --threshold: {value}"))?;
    usize::try_from(n).map_err(|_| ConfigError::InvalidThreshold(n).to_string())
}

/// Parse a suggestion limit (`0` means unlimited).
pub fn parse_max_suggestions(value: &str) -> Result<usize, String> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidMaxSuggestions(value.to_string()).to_string())
}

/// Parse `-d/--dict`, `-t/--threshold` and `-n/--max-suggestions` (each
/// also accepted as `--flag=VALUE`).
///
/// `env_threshold` is the value of `AUTOCORRECT_THRESHOLD`, used when no
/// threshold flag is given. Returns the parsed options and the remaining
/// arguments.
pub fn parse_common(
    args: &[String],
    env_threshold: Option<&str>,
) -> Result<(CommonArgs, Vec<String>), String> {
    let mut dict_path = None;
    let mut threshold = None;
    let mut max_suggestions = None;
    let mut remaining = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((f, v)) if f.starts_with("--") => (f, Some(v.to_string())),
            _ => (arg.as_str(), None),
        };
        let slot = match flag {
            "-d" | "--dict" => &mut dict_path,
            "-t" | "--threshold" => &mut threshold,
            "-n" | "--max-suggestions" => &mut max_suggestions,
            _ => {
                remaining.push(arg.clone());
                continue;
            }
        };
        let value = match inline {
            Some(v) => v,
            None => iter
                .next()
                .cloned()
                .ok_or_else(|| format!("{flag} requires a value"))?,
        };
        *slot = Some(value);
    }

    let mut options = AutocorrectOptions::default();
    if let Some(t) = threshold.as_deref().or(env_threshold) {
        options.threshold = parse_threshold(t)?;
    }
    if let Some(n) = max_suggestions.as_deref() {
        options.max_suggestions = parse_max_suggestions(n)?;
    }

    Ok((CommonArgs { dict_path, options }, remaining))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
