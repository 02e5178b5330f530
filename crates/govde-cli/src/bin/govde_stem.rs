// govde-stem: Stem Turkish words read from stdin.
//
// Words are separated by whitespace. Each word is lowercased with Turkish
// rules and printed with its stem, one word per line.
//
// Usage:
//   govde-stem [-d DATA_PATH] [--all]
//
// Options:
//   -d, --data-path PATH   Directory containing the word list files
//   --all                  Print every candidate stem, best first
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use govde_core::character::turkish_lowercase;

fn main() {
    govde_cli::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_path, args) =
        govde_cli::parse_data_path(&args).unwrap_or_else(|e| govde_cli::fatal(&e));

    if govde_cli::wants_help(&args) {
        println!("govde-stem: Stem Turkish words.");
        println!();
        println!("Usage: govde-stem [-d DATA_PATH] [--all]");
        println!();
        println!("Reads words from stdin and prints each word with its stem,");
        println!("separated by a tab.");
        println!();
        println!("Options:");
        println!("  -d, --data-path PATH   Directory containing the word list files");
        println!("  --all                  Print every candidate stem, best first");
        println!("  -h, --help             Print this help");
        return;
    }

    let mut show_all = false;
    for arg in &args {
        match arg.as_str() {
            "--all" => show_all = true,
            other => govde_cli::fatal(&format!("unknown option: {other}")),
        }
    }

    let stemmer =
        govde_cli::load_stemmer(data_path.as_deref()).unwrap_or_else(|e| govde_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };

        for word in line.split_whitespace() {
            let word = turkish_lowercase(word);
            let result = if show_all {
                let candidates = stemmer.candidates(&word);
                if candidates.is_empty() {
                    writeln!(out, "{word}\t{word}")
                } else {
                    writeln!(out, "{word}\t{}", candidates.join("\t"))
                }
            } else {
                writeln!(out, "{word}\t{}", stemmer.stem(&word))
            };
            if let Err(e) = result {
                // closed pipe, e.g. `| head`
                if e.kind() == io::ErrorKind::BrokenPipe {
                    return;
                }
                govde_cli::fatal(&format!("failed to write output: {e}"));
            }
        }
    }

    let _ = out.flush();
}
