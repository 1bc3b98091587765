use crate::persistence::{ensure_dir, get_data_dir, LOG_FILE};
use crate::ticker;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Resolved runtime settings
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    /// Ring the terminal bell when the countdown finishes
    pub sound: bool,
    pub poll_rate: Duration,
}

impl Config {
    /// Resolve the data directory and create it if needed
    pub fn resolve(dir_override: Option<&Path>, no_sound: bool) -> Result<Self> {
        let data_dir = get_data_dir(dir_override)?;
        ensure_dir(&data_dir)?;
        Ok(Self {
            data_dir,
            sound: !no_sound,
            poll_rate: ticker::poll_duration(),
        })
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

/// Send tracing output to the log file in the data directory.
/// The terminal belongs to the UI, so nothing is written to stderr.
pub fn init_logging(config: &Config) -> Result<()> {
    let path = config.log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("data");

        let config = Config::resolve(Some(&dir), false).unwrap();
        assert_eq!(config.data_dir, dir);
        assert!(dir.is_dir());
        assert!(config.sound);
        assert_eq!(config.poll_rate, Duration::from_millis(250));
        assert_eq!(config.log_path(), dir.join("stargaze.log"));
    }

    #[test]
    fn test_no_sound() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config::resolve(Some(temp_dir.path()), true).unwrap();
        assert!(!config.sound);
    }
}
