use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use docpoint::config::Settings;
use docpoint::error::QueryError;
use docpoint::vfs::{FileId, Overlay};
use docpoint::{Workspace, document_at};

#[derive(Parser, Debug)]
#[command(name = "docpoint", version, about)]
struct Args {
    /// Filename and byte offset of the item to document, e.g. foo.go:#123
    #[arg(long)]
    pos: String,

    /// Print the result as a JSON object
    #[arg(long)]
    json: bool,

    /// Show unexported fields and methods
    #[arg(short = 'u', long = "unexported")]
    unexported: bool,

    /// Maximum length of a line in the output (in Unicode code points)
    #[arg(long, default_value_t = 80)]
    linelength: usize,

    /// Read an archive of modified files from standard input
    #[arg(long)]
    modified: bool,

    #[arg(long, short)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<String>,
}

fn default_log_path() -> PathBuf {
    let dir = dirs_or_tmp();
    dir.join("docpoint.log")
}

fn dirs_or_tmp() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        let dir = PathBuf::from(home).join(".docpoint");
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    std::env::temp_dir()
}

fn init_tracing(
    args: &Args,
    settings: &Settings,
) {
    let level = settings.logging.level.as_filter();
    let stderr_filter = if args.verbose {
        EnvFilter::new("docpoint=debug")
    } else {
        EnvFilter::new(format!("docpoint={level}"))
    };
    let file_filter = if args.verbose {
        EnvFilter::new("docpoint=debug")
    } else {
        EnvFilter::new(format!("docpoint={level}"))
    };

    let log_path = args
        .log_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(default_log_path);

    let file_appender = tracing_appender::rolling::never(
        log_path.parent().unwrap_or(Path::new(".")),
        log_path
            .file_name()
            .unwrap_or(std::ffi::OsStr::new("docpoint.log")),
    );

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(false)
        .with_filter(file_filter);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(stderr_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .init();
}

/// Parse the search position as provided on the command line.
/// It should be of the form: foo.go:#123
fn parse_pos(pos: &str) -> Result<(PathBuf, usize), QueryError> {
    if pos.is_empty() {
        return Err(QueryError::BadPosition("<empty>".into()));
    }
    let sep = pos.rfind(':').ok_or_else(|| QueryError::BadPosition(pos.into()))?;
    // need at least 2 characters after the ':'
    // (the # sign and the offset)
    if sep + 2 >= pos.len() || pos.as_bytes()[sep + 1] != b'#' {
        return Err(QueryError::BadPosition(pos.into()));
    }
    let offset: usize = pos[sep + 2..]
        .parse()
        .map_err(|_| QueryError::BadPosition(pos.into()))?;
    Ok((PathBuf::from(&pos[..sep]), offset))
}

fn run(
    args: &Args,
    settings: &Settings,
) -> Result<String, QueryError> {
    let (path, offset) = parse_pos(&args.pos)?;

    let overlay = if args.modified {
        Overlay::from_archive(&mut std::io::stdin().lock())?
    } else {
        Overlay::empty()
    };

    debug!(pos = %args.pos, "running query");

    let workspace = Workspace::load(&path, &overlay, &settings.loader)?;
    let file = FileId::from_path(&path);
    let doc = document_at(&workspace, &file, offset, args.unexported)?;

    if args.json {
        serde_json::to_string(&doc).map_err(|err| QueryError::LoadFailed {
            file: file.as_str().to_string(),
            reason: err.to_string(),
        })
    } else {
        Ok(doc.to_text(args.linelength))
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let start = parse_pos(&args.pos)
        .ok()
        .and_then(|(path, _)| path.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    let settings = Settings::discover(&start);
    init_tracing(&args, &settings);

    match run(&args, &settings) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        },
    }
}
