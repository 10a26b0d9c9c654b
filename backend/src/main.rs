//! Matrix CLI - serve or run matrix operations
//!
//! # Main Commands
//!
//! ```bash
//! matrix serve                         # Start HTTP server (port 5000)
//! matrix apply multiply input.csv      # Run one operation on a CSV file
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! matrix validate input.csv            # Check a CSV file is a valid matrix
//! matrix operations                    # Show available operations
//! ```

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use matrix::{
    config::DEFAULT_PORT, handle, operations_description, parse_grid_file, Grid, Operation,
    Route, ServerConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "matrix")]
#[command(about = "Echo, transpose, flatten, sum and multiply CSV matrices", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Run one operation on a CSV file and print the result
    Apply {
        /// Operation: echo, invert, flatten, sum or multiply
        operation: String,

        /// Input CSV file
        input: PathBuf,
    },

    /// Check that a CSV file holds a valid square integer matrix
    Validate {
        /// Input CSV file
        input: PathBuf,
    },

    /// Show available operations
    Operations,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matrix=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { host, port } => cmd_serve(ServerConfig::new(host, port)).await,
        Commands::Apply { operation, input } => cmd_apply(&operation, &input),
        Commands::Validate { input } => cmd_validate(&input),
        Commands::Operations => cmd_operations(),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    matrix::server::start_server(config).await?;
    Ok(())
}

fn cmd_apply(operation: &str, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let op = Operation::from_id(operation).ok_or_else(|| {
        let known: Vec<&str> = Operation::ALL.iter().map(Operation::id).collect();
        format!("unknown operation '{}' (expected one of: {})", operation, known.join(", "))
    })?;

    let response = handle(Route::Operation(op), parse_grid_file(input));
    if !response.status.is_success() {
        return Err(response.body.trim_start_matches("error: ").into());
    }

    print!("{}", response.body);
    if !response.body.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn cmd_validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid::from_rows(parse_grid_file(input)?)?;
    eprintln!("{}: valid {}x{} matrix", input.display(), grid.size(), grid.size());
    Ok(())
}

fn cmd_operations() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", operations_description());
    Ok(())
}
