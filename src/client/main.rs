// src/client/main.rs

use std::process::ExitCode;

use autholas::client::report::{outcome_lines, tip_line};
use autholas::client::{AuthClient, Credentials};
use autholas::config::AutholasConfig;
use autholas::errors::AutholasResult;
use autholas::hardware::{compute_fingerprint, short_fingerprint};
use autholas::logging::init_logging;
use autholas::prompt::{Prompt, TerminalPrompt};

const BANNER: &str = "\
═════════════════════════════════
      Autholas Login System
        Rust Example Code
═════════════════════════════════";

/// Interactive login against the Autholas API.
///
/// Reads configuration (`autholas.toml` / `AUTHOLAS_*`), asks for a username
/// and password, and logs in with this machine's fingerprint. Exits 1 if
/// the login fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> AutholasResult<ExitCode> {
    let config = AutholasConfig::load()?;
    config.validate()?;
    init_logging(&config.logging)?;

    println!("{BANNER}");

    let mut prompt = TerminalPrompt::new();
    let username = prompt.ask("Username:")?;
    let password = prompt.ask_password("Password:")?;
    let hwid = compute_fingerprint();

    println!("Device ID: {}...", short_fingerprint(&hwid));
    println!("Authenticating...");

    let client = AuthClient::new(config.api)?;
    let result = client
        .authenticate(&Credentials::new(username.clone(), password, hwid))
        .await;

    for line in outcome_lines(&result, &username) {
        println!("{line}");
    }

    if let Some(session_token) = result.session_token() {
        println!("\nAuthentication successful!");
        println!("Starting application...");
        start_application(session_token);
        return Ok(ExitCode::SUCCESS);
    }

    println!("\nAuthentication failed.");
    if let Some(tip) = tip_line(&result) {
        println!("{tip}");
    }
    prompt.ask("Press Enter to exit...")?;
    Ok(ExitCode::from(1))
}

/// Placeholder for the application that runs after a successful login.
fn start_application(session_token: &str) {
    println!("Application started successfully!");
    println!("Session token: {session_token}");
}
