use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use identity_output::config::{Config, CONFIG_FILE_NAME};
use identity_output::error::Result;
use identity_output::identity::{Author, AuthorId, AuthorInfo, Status};
use identity_output::output::author::project_status;
use identity_output::output::ByteEncoding;

#[derive(Parser)]
#[command(
    name = "identity-output",
    about = "Render messenger author identities as JSON",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an author as a JSON object
    Author {
        /// Display name
        #[arg(long)]
        name: String,

        /// Public key as hex
        #[arg(long)]
        public_key: String,

        /// Author id as 64 hex characters (defaults to all zeroes)
        #[arg(long)]
        id: Option<String>,

        /// Author format version
        #[arg(long, default_value_t = identity_output::identity::FORMAT_VERSION)]
        format_version: u8,

        /// Trust status; adds an authorInfo entry
        #[arg(long)]
        status: Option<String>,

        /// Local alias, used together with --status
        #[arg(long, requires = "status")]
        alias: Option<String>,

        /// Byte encoding (array, hex, base64)
        #[arg(long)]
        bytes: Option<String>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,

        /// Config file path
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Write output to file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print the output form of a status name
    Status {
        /// Status name, any case
        name: String,
    },

    /// List all author statuses
    ListStatuses {
        /// Output format (table, json)
        #[arg(long, short = 'f', default_value = "table")]
        format: String,
    },

    /// Generate a starter .identity-output.toml config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Author {
            name,
            public_key,
            id,
            format_version,
            status,
            alias,
            bytes,
            pretty,
            config,
            output,
        } => cmd_author(AuthorArgs {
            name,
            public_key,
            id,
            format_version,
            status,
            alias,
            bytes,
            pretty,
            config,
            output,
        }),
        Commands::Status { name } => cmd_status(name),
        Commands::ListStatuses { format } => cmd_list_statuses(format),
        Commands::Init { force } => cmd_init(force),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

struct AuthorArgs {
    name: String,
    public_key: String,
    id: Option<String>,
    format_version: u8,
    status: Option<String>,
    alias: Option<String>,
    bytes: Option<String>,
    pretty: bool,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn cmd_author(args: AuthorArgs) -> Result<i32> {
    let config = match &args.config {
        Some(path) => Config::load_explicit(path)?,
        None => Config::load(Path::new(CONFIG_FILE_NAME))?,
    };
    let mut options = config.render;

    if args.pretty {
        options.pretty = true;
    }
    if let Some(bytes) = args.bytes {
        match ByteEncoding::from_str_lenient(&bytes) {
            Some(encoding) => options.bytes = encoding,
            None => tracing::warn!(
                encoding = %bytes,
                fallback = ?options.bytes,
                "unknown byte encoding, using config default"
            ),
        }
    }

    let id = match args.id {
        Some(hex_id) => hex_id.parse::<AuthorId>()?,
        None => AuthorId::new([0; AuthorId::LENGTH]),
    };
    let public_key = hex::decode(args.public_key.trim())?;
    let author = Author::new(args.format_version, id, args.name, public_key)?;

    let info = match args.status {
        Some(name) => Some(AuthorInfo::new(Status::parse(&name)?, args.alias)),
        None => None,
    };

    let mut rendered = identity_output::render_author(&author, info.as_ref(), &options)?;
    rendered.push('\n');

    match args.output {
        Some(out) => std::fs::write(&out, &rendered)?,
        None => print!("{}", rendered),
    }

    Ok(0)
}

fn cmd_status(name: String) -> Result<i32> {
    let status = Status::parse(&name)?;
    println!("{}", project_status(status));
    Ok(0)
}

fn cmd_list_statuses(format_str: String) -> Result<i32> {
    match format_str.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&Status::ALL)?;
            println!("{}", json);
        }
        _ => {
            println!("{:<12} OUTPUT", "NAME");
            println!("{}", "-".repeat(24));
            for status in Status::ALL {
                println!("{:<12} {}", status.name(), project_status(status));
            }
        }
    }

    Ok(0)
}

fn cmd_init(force: bool) -> Result<i32> {
    if !Config::write_starter(Path::new(CONFIG_FILE_NAME), force)? {
        eprintln!("{} already exists. Use --force to overwrite.", CONFIG_FILE_NAME);
        return Ok(1);
    }

    println!("Created {}", CONFIG_FILE_NAME);

    Ok(0)
}
