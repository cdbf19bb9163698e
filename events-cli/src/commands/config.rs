use anyhow::{Context, Result};
use events_core::config::ClientConfig;
use owo_colors::OwoColorize;

/// `config` runs before a client is built, so a broken `base_url` can still be replaced.
pub fn run(config: &ClientConfig, set_base_url: Option<String>) -> Result<()> {
    let config_path = ClientConfig::config_path()?;

    if let Some(url) = set_base_url {
        let saved = ClientConfig::persist_base_url(&config_path, &url)
            .context("Failed to save config")?;
        println!("{}", format!("Saved base_url = {}", saved.base_url).green());
        return Ok(());
    }

    println!("{}", "Paths".bold());
    println!("  Config:   {}", config_path.display());
    println!();
    println!("{}", "Settings".bold());
    println!("  Backend:  {}", config.base_url);
    println!("  Navigate delay: {} ms", config.navigate_delay_ms);
    println!("  Request timeout: {} s", config.request_timeout_secs);

    Ok(())
}
