use std::path::PathBuf;

use clap::Parser;

/// hinglish-control: settings panel for the Hinglish translator
#[derive(Parser, Debug, Clone)]
#[command(name = "hinglish-control")]
#[command(version)]
#[command(about = "Manage the Groq API key, translation preferences and theme", long_about = None)]
pub struct Cli {
    /// Directory holding config.toml, storage.json and logs
    #[arg(short = 'C', long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Explicit config file (must exist)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Settings storage file. Overrides storage.path
    #[arg(long, value_name = "FILE")]
    pub storage_file: Option<PathBuf>,

    /// Keep settings in memory only; nothing is written to disk
    #[arg(long, default_value_t = false)]
    pub ephemeral: bool,

    /// Chat-completions endpoint used to validate the API key
    #[arg(long, env = "HINGLISH_CONTROL_ENDPOINT", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["hinglish-control"]);
        assert!(cli.config_dir.is_none());
        assert!(cli.config.is_none());
        assert!(cli.storage_file.is_none());
        assert!(!cli.ephemeral);
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_ephemeral_flag() {
        let cli = Cli::parse_from(["hinglish-control", "--ephemeral"]);
        assert!(cli.ephemeral);
    }

    #[test]
    fn test_config_dir_flag() {
        let cli = Cli::parse_from(["hinglish-control", "-C", "/tmp/test"]);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/test")));
    }

    #[test]
    fn test_storage_and_log_flags() {
        let cli = Cli::parse_from([
            "hinglish-control",
            "--storage-file", "/tmp/storage.json",
            "--log-level", "debug",
        ]);
        assert_eq!(cli.storage_file, Some(PathBuf::from("/tmp/storage.json")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
