use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use services::{HttpContentGateway, HttpScoringGateway, SessionEngine};
use storage::sqlite::SqliteSessionStore;

mod display;
mod repl;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidBaseUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    db_url: String,
    base_url: String,
    resume: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--base-url <url>] [--resume]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:trainer.sqlite3");
    eprintln!("  --base-url http://127.0.0.1:5000");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRAINER_DB_URL, TRAINER_API_BASE_URL");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("TRAINER_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://trainer.sqlite3".into(), normalize_sqlite_url);
        let mut base_url = std::env::var("TRAINER_API_BASE_URL")
            .ok()
            .unwrap_or_else(|| "http://127.0.0.1:5000".into());
        let mut resume = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--base-url" => {
                    let value = require_value(args, "--base-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidBaseUrl { raw: value });
                    }
                    base_url = value;
                }
                "--resume" => resume = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            base_url,
            resume,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    format!("sqlite://{path}")
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(&mut std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    prepare_sqlite_file(&args.db_url)?;
    let store = Arc::new(SqliteSessionStore::open(&args.db_url).await?);

    let content = Arc::new(HttpContentGateway::new(args.base_url.clone()));
    let scoring = Arc::new(HttpScoringGateway::new(args.base_url));

    let engine = if args.resume {
        SessionEngine::restore(store, content, scoring, Utc::now()).await?
    } else {
        SessionEngine::start(store, content, scoring, Utc::now()).await?
    };

    repl::run(engine).await
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
