//! Interactive mode for the server.
//!
//! Prompts the user for bind address and port before starting the server.

use dialoguer::{Confirm, Input};

use crate::{DEFAULT_BIND_ADDR, DEFAULT_PORT, ServerConfig};

/// Runs the server in interactive mode, prompting for configuration.
///
/// Defaults for the prompts come from `BIND_ADDR` and `PORT` (see
/// [`ServerConfig::from_env`]). The chosen values are passed straight to
/// [`super::run_server`].
///
/// # Errors
///
/// Returns an `std::io::Result` error if the underlying server fails to
/// start.
#[allow(clippy::future_not_send)]
pub async fn run() -> std::io::Result<()> {
    println!("Ezrelo Server");
    println!();

    let defaults = ServerConfig::from_env();

    let bind_addr: String = Input::new()
        .with_prompt("Bind address")
        .default(defaults.bind_addr)
        .interact_text()
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let port: u16 = Input::new()
        .with_prompt("Port")
        .default(defaults.port)
        .interact_text()
        .unwrap_or(DEFAULT_PORT);

    if !Confirm::new()
        .with_prompt(format!("Start server on {bind_addr}:{port}?"))
        .default(true)
        .interact()
        .unwrap_or(true)
    {
        println!("Cancelled.");
        return Ok(());
    }

    super::run_server(ServerConfig { bind_addr, port }).await
}
