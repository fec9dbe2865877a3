use std::io::{self, Write};

use colored::Colorize;

use crate::{
    config,
    error::{Error, Result},
    info,
    management::ProfileManager,
    subsonic::{CatalogClient, SubsonicClient},
    success, warning,
};

fn prompt(message: &str) -> Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{message}")?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Interactive first-time configuration.
///
/// Asks for the server URL, username and password, lets the user choose
/// between encrypted and plain-text password storage, writes the config file
/// and finally pings the server with the new settings.
pub async fn setup() -> Result<()> {
    let path = config::config_path();

    eprintln!("{}", "subcli - First Time Configuration".bold());
    eprintln!();

    if async_fs::metadata(&path).await.is_ok() {
        let answer = prompt("Configuration file already exists. Overwrite? (y/N): ")?;
        if !answer.eq_ignore_ascii_case("y") {
            info!("Setup cancelled.");
            return Ok(());
        }
    }

    let url = prompt("Subsonic Server URL (e.g., https://music.example.com): ")?;
    ProfileManager::check_field("URL", &url)?;

    let username = prompt("Username: ")?;
    ProfileManager::check_field("username", &username)?;

    let password = rpassword::prompt_password("Password (hidden): ")?;
    ProfileManager::check_field("password", &password)?;

    eprintln!();
    eprintln!("Password Storage Options:");
    eprintln!("  1. Encrypted (recommended)");
    eprintln!("  2. Plain text (less secure)");
    let choice = prompt("Choose option (1-2) [1]: ")?;
    let encrypt = choice.is_empty() || choice == "1";

    let manager = ProfileManager::from_setup(&path, &url, &username, &password, encrypt)?;
    manager.persist().await?;

    success!("Configuration saved successfully!");
    info!("Config location: {}", manager.path().display());

    info!("Testing connection...");
    let client = SubsonicClient::new(manager.credentials()?)?;
    if let Err(e) = client.ping().await {
        warning!("Please check your credentials and try again.");
        return Err(match e {
            Error::Connection(_) => e,
            other => Error::Connection(other.to_string()),
        });
    }

    success!("Connection test successful!");
    info!("You're all set! Try running:");
    info!("  {} --shuffle | mpv --playlist=-", config::CLIENT_NAME);
    Ok(())
}
