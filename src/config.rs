use std::path::PathBuf;

/// Environment variable naming the TUI log file.
pub(crate) const LOG_FILE_VAR: &str = "TALLY_LOG_FILE";

/// Startup settings resolved from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    /// Start from the two sample records rather than an empty ledger.
    pub(crate) seed: bool,
    /// Where TUI logs go. CLI runs always log to stderr.
    pub(crate) log_file: Option<PathBuf>,
    /// Command and its arguments, global flags removed. Empty means TUI.
    pub(crate) command: Vec<String>,
}

impl Config {
    pub(crate) fn from_env() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let log_file = std::env::var_os(LOG_FILE_VAR).map(PathBuf::from);
        Self::from_parts(args, log_file)
    }

    pub(crate) fn from_parts(args: Vec<String>, log_file: Option<PathBuf>) -> Self {
        let seed = !args.iter().any(|a| a == "--empty");
        let command = args.into_iter().filter(|a| a != "--empty").collect();
        Self {
            seed,
            log_file: log_file.filter(|p| !p.as_os_str().is_empty()),
            command,
        }
    }

    pub(crate) fn is_tui(&self) -> bool {
        self.command.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_is_seeded_tui() {
        let config = Config::from_parts(Vec::new(), None);
        assert!(config.seed);
        assert!(config.is_tui());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_empty_flag_anywhere() {
        let config = Config::from_parts(args(&["list", "--empty", "--type", "income"]), None);
        assert!(!config.seed);
        assert_eq!(config.command, args(&["list", "--type", "income"]));
        assert!(!config.is_tui());

        let config = Config::from_parts(args(&["--empty"]), None);
        assert!(!config.seed);
        assert!(config.is_tui());
    }

    #[test]
    fn test_log_file_kept_unless_blank() {
        let config = Config::from_parts(Vec::new(), Some(PathBuf::from("/tmp/tally.log")));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/tally.log")));

        let config = Config::from_parts(Vec::new(), Some(PathBuf::new()));
        assert!(config.log_file.is_none());
    }
}
