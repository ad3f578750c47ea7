//! Command-line argument parsing for the replay tool
//!
//! Supports:
//! - Loading a page fixture and an optional interaction script
//! - Choosing pointer capabilities (hover intent on/off)
//! - Overriding the user config file

use clap::Parser;
use std::path::PathBuf;

/// Replay dropdown interactions against a page fixture
#[derive(Parser, Debug)]
#[command(
    name = "dropdown-control",
    version,
    about = "Replay dropdown interactions against a page fixture"
)]
pub struct CliArgs {
    /// Page fixture (YAML)
    #[arg(value_name = "PAGE")]
    pub page: PathBuf,

    /// Interaction script (YAML) to replay
    #[arg(short, long, value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Simulate a hover-capable, fine pointer (enables hover intent)
    #[arg(long)]
    pub hover: bool,

    /// Config file to use instead of the user config
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Extra time (ms) to let pending hover timers run after the last step
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    pub settle_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_positional() {
        let args = CliArgs::try_parse_from(["dropdown-control", "header.page.yaml", "--hover"])
            .unwrap();
        assert_eq!(args.page, PathBuf::from("header.page.yaml"));
        assert!(args.hover);
        assert!(args.script.is_none());
        assert_eq!(args.settle_ms, 1000);
    }

    #[test]
    fn test_page_flag_is_rejected() {
        assert!(CliArgs::try_parse_from(["dropdown-control", "--page", "x.yaml"]).is_err());
    }
}
