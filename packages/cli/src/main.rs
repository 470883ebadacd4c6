#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the Ezrelo address tools.
//!
//! `ezrelo normalize` runs the address normalizer over arguments or stdin,
//! `ezrelo serve` starts the API server. Without a subcommand the user
//! picks a tool from an interactive menu.

mod normalize;

use clap::{Parser, Subcommand};
use dialoguer::Select;
use ezrelo_server::ServerConfig;

#[derive(Parser)]
#[command(name = "ezrelo", about = "Ezrelo address tools")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize addresses given as arguments, or one per line on stdin
    Normalize {
        /// Addresses to normalize
        addresses: Vec<String>,
        /// Print the API response object instead of the bare address
        #[arg(long)]
        json: bool,
    },
    /// Start the API server
    Serve {
        /// Interface to bind (overrides `BIND_ADDR`)
        #[arg(long)]
        bind: Option<String>,
        /// Port to listen on (overrides `PORT`)
        #[arg(long)]
        port: Option<u16>,
    },
}

/// Top-level tool selection for the interactive menu.
enum Tool {
    Normalize,
    Server,
}

impl Tool {
    const ALL: &[Self] = &[Self::Normalize, Self::Server];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Normalize => "Normalize an address",
            Self::Server => "Start server",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Normalize { addresses, json }) => {
            if addresses.is_empty() {
                normalize::run_stdin(json)?;
            } else {
                normalize::run_args(&addresses, json)?;
            }
        }
        Some(Commands::Serve { bind, port }) => {
            let config = serve_config(ServerConfig::from_env(), bind, port);
            serve(config).await?;
        }
        None => interactive().await?,
    }

    Ok(())
}

async fn interactive() -> Result<(), Box<dyn std::error::Error>> {
    println!("Ezrelo Toolchain");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Tool::ALL[idx] {
        Tool::Normalize => normalize::interactive()?,
        Tool::Server => {
            tokio::task::spawn_blocking(|| {
                actix_web::rt::System::new().block_on(ezrelo_server::interactive::run())
            })
            .await??;
        }
    }

    Ok(())
}

/// Runs the server on its own Actix system so it does not nest inside the
/// Tokio runtime.
async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    tokio::task::spawn_blocking(move || {
        actix_web::rt::System::new().block_on(ezrelo_server::run_server(config))
    })
    .await??;

    Ok(())
}

fn serve_config(env: ServerConfig, bind: Option<String>, port: Option<u16>) -> ServerConfig {
    ServerConfig {
        bind_addr: bind.unwrap_or(env.bind_addr),
        port: port.unwrap_or(env.port),
    }
}
