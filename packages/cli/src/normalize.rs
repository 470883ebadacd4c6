//! The `normalize` tool: addresses from arguments, stdin, or a prompt.

use std::error::Error;
use std::io::{self, BufRead};

use dialoguer::Input;
use ezrelo_server_models::ApiVerifiedAddress;

/// Normalizes one address and formats it for printing.
///
/// With `json` set, the output is the same object the HTTP endpoint
/// returns.
///
/// # Errors
///
/// * If `address` is empty or only whitespace
/// * If JSON serialization fails
pub fn render(address: &str, json: bool) -> Result<String, Box<dyn Error>> {
    let result = ezrelo_address::verify(address)?;

    if json {
        let response = ApiVerifiedAddress::new(address.to_string(), result);
        Ok(serde_json::to_string(&response)?)
    } else {
        Ok(result.normalized)
    }
}

/// Prints the normalized form of each address argument.
///
/// # Errors
///
/// * If any address is blank
pub fn run_args(addresses: &[String], json: bool) -> Result<(), Box<dyn Error>> {
    for address in addresses {
        println!("{}", render(address, json)?);
    }
    Ok(())
}

/// Reads one address per line from stdin. Blank lines are skipped.
///
/// # Errors
///
/// * If reading stdin fails
pub fn run_stdin(json: bool) -> Result<(), Box<dyn Error>> {
    for (idx, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            log::warn!("Skipping blank line {}", idx + 1);
            continue;
        }
        println!("{}", render(&line, json)?);
    }
    Ok(())
}

/// Prompts for addresses until a blank one is entered.
///
/// # Errors
///
/// * If the terminal prompt fails
pub fn interactive() -> Result<(), Box<dyn Error>> {
    println!("Enter addresses to normalize (blank to finish).");
    println!();

    loop {
        let address: String = Input::new()
            .with_prompt("Address")
            .allow_empty(true)
            .interact_text()?;

        if address.trim().is_empty() {
            return Ok(());
        }

        println!("  {}", render(&address, false)?);
    }
}
