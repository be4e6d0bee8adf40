use bucket_split_core::{
    print_size, sanitize_user_path, split, CoreError, ExclusionSet, ExitStatusLike,
    RealFileSystem, SplitReport, SplitRequest,
};
use std::env;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug)]
struct SplitConfig {
    source_dir: PathBuf,
    part_count: usize,
    exclude_patterns: Vec<String>,
    verbose: bool,
}

#[derive(Debug)]
enum Invocation {
    Run(SplitConfig),
    PrintHelp,
    PrintVersion,
}

#[derive(Debug, PartialEq, Eq)]
struct CliError(String);

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn print_help(prog: &str) {
    println!(
        "\
usage: {prog} [-h] [--version] [-v] [--exclude PATTERN]... DIRECTORY NUM_PARTS

Split the immediate children of DIRECTORY into NUM_PARTS sibling
directories named DIRECTORY-1 .. DIRECTORY-N, balancing total byte size.
Each child is moved whole; children matching an exclude pattern are left
in place.

options:
  -h, --help            show this help message and exit
  --version             show program's version number and exit
  -v, --verbose         enable debug logging on stderr
  --exclude PATTERN     glob matched against child base names; matching
                        children are neither measured nor moved (repeatable)
"
    );
}

fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    let mut exclude_patterns = Vec::new();
    let mut verbose = false;
    let mut positional = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "--help" | "-h" => return Ok(Invocation::PrintHelp),
            "--version" => return Ok(Invocation::PrintVersion),
            "--verbose" | "-v" => verbose = true,
            "--exclude" => {
                if i + 1 >= args.len() {
                    return Err(CliError("missing value for --exclude".to_string()));
                }
                exclude_patterns.push(args[i + 1].clone());
                i += 1;
            }
            _ if arg.starts_with("--exclude=") => {
                exclude_patterns.push(arg["--exclude=".len()..].to_string());
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(CliError(format!("unrecognized arguments: {}", arg)));
            }
            _ => positional.push(arg.clone()),
        }
        i += 1;
    }

    if positional.len() != 2 {
        return Err(CliError(format!(
            "expected DIRECTORY and NUM_PARTS, got {} positional arguments",
            positional.len()
        )));
    }

    let part_count = positional[1]
        .parse::<usize>()
        .ok()
        .filter(|count| *count >= 1)
        .ok_or_else(|| {
            CliError(format!(
                "NUM_PARTS must be a positive integer: {}",
                positional[1]
            ))
        })?;

    Ok(Invocation::Run(SplitConfig {
        source_dir: PathBuf::from(&positional[0]),
        part_count,
        exclude_patterns,
        verbose,
    }))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(report: &SplitReport) {
    for bucket in &report.buckets {
        println!(
            "{}  {}  ({} items)",
            sanitize_user_path(&bucket.dir),
            print_size(bucket.accumulated_size),
            bucket.item_count
        );
    }
    println!(
        "total: {} across {} buckets",
        print_size(report.total_size()),
        report.buckets.len()
    );
}

fn run() -> i32 {
    let args: Vec<String> = env::args().skip(1).collect();
    let program = env::args().next().unwrap_or_else(|| "bucket-split".to_string());

    let config = match parse_args(&args) {
        Ok(Invocation::PrintHelp) => {
            print_help(&program);
            return ExitStatusLike::Ok.as_code() as i32;
        }
        Ok(Invocation::PrintVersion) => {
            println!("bucket-split {}", VERSION);
            return ExitStatusLike::Ok.as_code() as i32;
        }
        Ok(Invocation::Run(config)) => config,
        Err(error) => {
            eprintln!("{}: {}", program, error);
            eprintln!("try '{} --help' for usage", program);
            return ExitStatusLike::Usage.as_code() as i32;
        }
    };

    init_tracing(config.verbose);

    let exclude = match ExclusionSet::new(&config.exclude_patterns) {
        Ok(exclude) => exclude,
        Err(error) => {
            eprintln!("{}: {}", program, error);
            return ExitStatusLike::Usage.as_code() as i32;
        }
    };

    let request = SplitRequest::new(config.source_dir, config.part_count).with_exclude(exclude);
    match split(&RealFileSystem, &request) {
        Ok(report) => {
            print_summary(&report);
            ExitStatusLike::Ok.as_code() as i32
        }
        Err(error @ (CoreError::InvalidInput(_) | CoreError::NotFound(_))) => {
            eprintln!("{}: {}", program, error);
            ExitStatusLike::Usage.as_code() as i32
        }
        Err(error) => {
            eprintln!("{}: {}", program, error);
            ExitStatusLike::Error.as_code() as i32
        }
    }
}

fn main() {
    std::process::exit(run());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_directory_and_part_count() {
        let parsed = parse_args(&strings(&["/data/archive", "3"])).unwrap();
        match parsed {
            Invocation::Run(config) => {
                assert_eq!(config.source_dir, PathBuf::from("/data/archive"));
                assert_eq!(config.part_count, 3);
                assert!(config.exclude_patterns.is_empty());
                assert!(!config.verbose);
            }
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn collects_repeated_exclude_patterns() {
        let parsed = parse_args(&strings(&[
            "--exclude",
            "*.tmp",
            "dir",
            "--exclude=*.bak",
            "2",
        ]))
        .unwrap();
        match parsed {
            Invocation::Run(config) => {
                assert_eq!(config.exclude_patterns, vec!["*.tmp", "*.bak"]);
                assert_eq!(config.part_count, 2);
            }
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn help_and_version_win_over_other_arguments() {
        assert!(matches!(
            parse_args(&strings(&["dir", "--help", "2"])),
            Ok(Invocation::PrintHelp)
        ));
        assert!(matches!(
            parse_args(&strings(&["--version"])),
            Ok(Invocation::PrintVersion)
        ));
    }

    #[test]
    fn rejects_missing_positionals() {
        assert!(parse_args(&strings(&["dir"])).is_err());
        assert!(parse_args(&strings(&[])).is_err());
        assert!(parse_args(&strings(&["dir", "2", "extra"])).is_err());
    }

    #[test]
    fn rejects_non_positive_part_counts() {
        for bad in ["0", "two", "1.5", ""] {
            let err = parse_args(&strings(&["dir", bad])).unwrap_err();
            assert!(err.0.contains("NUM_PARTS"), "unexpected error: {err}");
        }
    }

    #[test]
    fn rejects_exclude_without_value() {
        let err = parse_args(&strings(&["dir", "2", "--exclude"])).unwrap_err();
        assert_eq!(err, CliError("missing value for --exclude".to_string()));
    }

    #[test]
    fn rejects_unknown_flags() {
        let err = parse_args(&strings(&["dir", "2", "--frobnicate"])).unwrap_err();
        assert!(err.0.contains("unrecognized"));
    }
}
