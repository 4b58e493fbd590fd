use std::path::PathBuf;

use clap::Parser;

/// ratepulse - central-bank policy rate collector
///
/// Collects the policy rate for a fixed set of countries from official
/// sources (FRED, BOK ECOS, BOJ, ECB, central-bank pages), falling back to
/// curated data per country, and writes `rates_data.json` plus `data.js`
/// for the downstream display.
#[derive(Debug, Parser)]
#[command(name = "ratepulse", version, about = "Central-bank policy rate collector")]
pub struct Cli {
    /// Skip live fetching entirely and emit the curated manual data only.
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Key-value credential file read for API keys the environment leaves
    /// unset (`NAME=VALUE` lines, `#` comments).
    #[arg(long, value_name = "PATH", default_value = ".env")]
    pub env_file: PathBuf,

    /// Directory receiving rates_data.json and data.js.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub out_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_current_directory_and_dot_env() {
        let cli = Cli::parse_from(["ratepulse"]);
        assert!(!cli.offline);
        assert_eq!(cli.env_file, PathBuf::from(".env"));
        assert_eq!(cli.out_dir, PathBuf::from("."));
    }

    #[test]
    fn offline_flag_is_recognized() {
        let cli = Cli::parse_from(["ratepulse", "--offline", "--out-dir", "/tmp/rates"]);
        assert!(cli.offline);
        assert_eq!(cli.out_dir, PathBuf::from("/tmp/rates"));
    }
}
