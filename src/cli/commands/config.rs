//! Configuration inspection command.

use std::path::Path;

use crate::config::{self, Config, ConfigError};

/// Print the effective configuration, optionally creating a default file
pub fn cmd_config(current: &Config, path: Option<&Path>, init: bool) -> anyhow::Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config::config_path().ok_or(ConfigError::NoConfigDir)?,
    };

    if init {
        if path.exists() {
            println!("Config file already exists: {:?}", path);
        } else {
            config::save(&Config::default(), &path)?;
            println!("✓ Wrote default config to {:?}", path);
        }
        return Ok(());
    }

    let status = if path.exists() { "" } else { " (not present, using defaults)" };
    println!("# Config file: {}{}", path.display(), status);
    println!();
    print!("{}", toml::to_string_pretty(current)?);

    // Catch invalid settings here rather than on the first render
    if let Err(e) = current.retry.to_policy() {
        eprintln!("✗ {}", e);
    }
    if let Err(e) = current.musicbrainz.timeout() {
        eprintln!("✗ {}", e);
    }

    Ok(())
}
