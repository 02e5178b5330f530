// govde-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use govde_tr::{TurkishStemmer, WordLists};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the word list directory.
const DATA_PATH_ENV: &str = "GOVDE_DATA_PATH";

/// Environment variable with the log filter. `RUST_LOG` is used when unset.
const LOG_ENV: &str = "GOVDE_LOG";

/// Install a stderr log subscriber. The filter comes from `GOVDE_LOG`, then
/// `RUST_LOG`, and defaults to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Search for word list files and create a stemmer.
///
/// Search order:
/// 1. `data_path` argument (if provided)
/// 2. `GOVDE_DATA_PATH` environment variable
/// 3. `~/.govde`
/// 4. `/usr/share/govde`
/// 5. Current working directory
///
/// The first directory holding at least one list file is used. Without one
/// the stemmer runs with empty lists.
pub fn load_stemmer(data_path: Option<&str>) -> Result<TurkishStemmer, String> {
    let search_paths = build_search_paths(data_path);

    for dir in &search_paths {
        if WordLists::has_any_file(dir) {
            info!(dir = %dir.display(), "loading word lists");
            let lists = WordLists::from_dir(dir).map_err(|e| e.to_string())?;
            return Ok(TurkishStemmer::new(lists));
        }
    }

    debug!(searched = search_paths.len(), "no word lists found");
    Ok(TurkishStemmer::default())
}

/// Build the list of directories to search for word list files.
fn build_search_paths(data_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = data_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DATA_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".govde"));
    }

    paths.push(PathBuf::from("/usr/share/govde"));

    // local development
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--data-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(data_path, remaining_args)`.
pub fn parse_data_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut data_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--data-path=") {
            data_path = Some(val.to_string());
        } else if arg == "--data-path" || arg == "-d" {
            match iter.next() {
                Some(val) => data_path = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((data_path, remaining))
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

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn data_path_short_flag() {
        let (path, rest) = parse_data_path(&args(&["-d", "/tmp/lists", "--all"])).unwrap();
        assert_eq!(path.as_deref(), Some("/tmp/lists"));
        assert_eq!(rest, args(&["--all"]));
    }

    #[test]
    fn data_path_long_forms() {
        let (path, _) = parse_data_path(&args(&["--data-path=/a"])).unwrap();
        assert_eq!(path.as_deref(), Some("/a"));
        let (path, _) = parse_data_path(&args(&["--data-path", "/b"])).unwrap();
        assert_eq!(path.as_deref(), Some("/b"));
    }

    #[test]
    fn data_path_missing_value() {
        assert_eq!(
            parse_data_path(&args(&["-d"])).unwrap_err(),
            "-d requires a value"
        );
    }

    #[test]
    fn no_data_path() {
        let (path, rest) = parse_data_path(&args(&["--all"])).unwrap();
        assert!(path.is_none());
        assert_eq!(rest, args(&["--all"]));
    }

    #[test]
    fn help_flag() {
        assert!(wants_help(&args(&["--all", "-h"])));
        assert!(wants_help(&args(&["--help"])));
        assert!(!wants_help(&args(&["--all"])));
    }

    #[test]
    fn explicit_path_is_searched_first() {
        let paths = build_search_paths(Some("/opt/lists"));
        assert_eq!(paths[0], PathBuf::from("/opt/lists"));
        assert!(paths.contains(&PathBuf::from("/usr/share/govde")));
    }

    #[test]
    fn load_from_test_lists() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../govde-tr/tests/data/lists");
        let stemmer = load_stemmer(Some(dir)).unwrap();
        assert!(stemmer.word_lists().protected_words.contains("milli"));
        assert_eq!(stemmer.stem("evlerde"), "ev");
    }
}
