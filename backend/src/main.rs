//! ROTTEN CLI - serve the trimming API or trim archives locally
//!
//! # Commands
//!
//! ```bash
//! rotten serve                                  # Start HTTP server (port 3000)
//! rotten trim chats.zip --description "Alice and Bob in London"
//! rotten inspect chats.zip                      # List entries and what would be kept
//! ```

use clap::{Args, Parser, Subcommand};
use rotten::api::logs::{log_error, log_info, log_success, log_warning};
use rotten::{
    is_text_name, read_entries, trim_file, ArchiveError, ArchiveLimits, PassThroughTrimmer,
    Query, QueryFields, ServerConfig, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PORT,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rotten")]
#[command(about = "Relevance Optimized Text Trimming - development server and CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "ROTTEN_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Largest accepted archive, in bytes
        #[arg(long, env = "ROTTEN_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
        max_upload_bytes: u64,

        /// Serve the built frontend from this directory
        #[arg(long, env = "ROTTEN_STATIC_DIR")]
        static_dir: Option<PathBuf>,
    },

    /// Trim a local archive
    Trim {
        /// Input zip archive
        input: PathBuf,

        /// Output file (default: <input>-trimmed.zip)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// List the entries of an archive and whether they would be kept
    Inspect {
        /// Input zip archive
        input: PathBuf,
    },
}

#[derive(Args)]
struct QueryArgs {
    /// Natural-language description (takes precedence over the fields)
    #[arg(short, long)]
    description: Option<String>,

    #[arg(long, default_value = "")]
    outcome: String,

    #[arg(long, default_value = "")]
    date: String,

    #[arg(long, default_value = "")]
    people: String,

    #[arg(long, default_value = "")]
    events: String,

    #[arg(long, default_value = "")]
    location: String,
}

impl QueryArgs {
    fn into_query(self) -> Query {
        match self.description {
            Some(text) => Query::NaturalLanguage(text),
            None => Query::Structured(QueryFields {
                desired_outcome: self.outcome,
                important_date: self.date,
                important_people: self.people,
                important_events: self.events,
                important_location: self.location,
            }),
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            max_upload_bytes,
            static_dir,
        } => {
            let mut config = ServerConfig::new(port);
            config.limits.max_archive_bytes = max_upload_bytes;
            config.static_dir = static_dir;
            rotten::server::start_server(config).await
        }

        Commands::Trim {
            input,
            output,
            query,
        } => cmd_trim(&input, output.as_deref(), query.into_query()),

        Commands::Inspect { input } => cmd_inspect(&input),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "archive".to_string());
    input.with_file_name(format!("{}-trimmed.zip", stem))
}

fn cmd_trim(
    input: &Path,
    output: Option<&Path>,
    query: Query,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.map(Path::to_path_buf).unwrap_or_else(|| default_output(input));

    log_info(format!("📄 Trimming: {}", input.display()));
    log_info(format!("   Query: {}", query.describe()));

    let outcome = trim_file(
        input,
        &output,
        &query,
        &PassThroughTrimmer,
        &ArchiveLimits::default(),
    )?;

    if outcome.count() == 0 {
        log_warning("No text or JSON files kept");
    }
    for name in &outcome.kept {
        log_info(format!("   + {}", name));
    }
    log_success(format!(
        "Kept {} file(s), dropped {} → {}",
        outcome.count(),
        outcome.dropped,
        output.display()
    ));
    Ok(())
}

fn cmd_inspect(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fs::read(input).map_err(ArchiveError::from)?;
    let entries = read_entries(&bytes, &ArchiveLimits::default())?;

    log_info(format!("📦 {} ({} bytes, {} entries)", input.display(), bytes.len(), entries.len()));
    for entry in &entries {
        let mark = if is_text_name(&entry.name) { "keep" } else { "drop" };
        println!("   {:<4}  {:>10}  {}", mark, entry.contents.len(), entry.name);
    }
    Ok(())
}
