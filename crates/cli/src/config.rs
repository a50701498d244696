//! Command-line flags and environment configuration.

use std::path::PathBuf;

use anyhow::{Context, bail};

pub const PREFS_PATH_ENV: &str = "LARDER_PREFS_PATH";
pub const LOG_FORMAT_ENV: &str = "LARDER_LOG_FORMAT";
pub const DEFAULT_PREFS_PATH: &str = "preferences.json";

pub const HELP_TEXT: &str = "larder - inventory manager for a small shop

USAGE:
    larder [OPTIONS]

OPTIONS:
    -p, --prefs <PATH>    Preferences file (default: $LARDER_PREFS_PATH or preferences.json)
    -b, --batch           Read commands from stdin, one per line, without line editing
        --no-save         Do not write the inventory or preferences on exit
    -h, --help            Print this help
    -V, --version         Print the version

ENVIRONMENT:
    LARDER_PREFS_PATH     Preferences file used when --prefs is not given
    LARDER_LOG_FORMAT     `text` (default) or `json`
    RUST_LOG              Log filter (default: warn)

Type `help` at the prompt for the command language.
";

/// Options parsed from the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub prefs_path: Option<PathBuf>,
    pub batch_mode: bool,
    pub no_save: bool,
    pub show_help: bool,
    pub show_version: bool,
}

impl CliConfig {
    /// Parses the arguments after the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-V" | "--version" => config.show_version = true,
                "-b" | "--batch" => config.batch_mode = true,
                "--no-save" => config.no_save = true,
                "-p" | "--prefs" => {
                    let path = args.next().with_context(|| format!("{arg} requires a path"))?;
                    config.prefs_path = Some(PathBuf::from(path));
                }
                other => bail!("unknown option: {other}"),
            }
        }

        Ok(config)
    }

    /// The flag wins over the environment, which wins over the default.
    pub fn prefs_path(&self) -> PathBuf {
        self.prefs_path.clone().unwrap_or_else(|| {
            std::env::var(PREFS_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_PREFS_PATH))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<CliConfig> {
        CliConfig::parse(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn no_arguments_is_interactive_with_saving() {
        assert_eq!(parse(&[]).unwrap(), CliConfig::default());
    }

    #[test]
    fn reads_flags() {
        let config = parse(&["-b", "--no-save", "--prefs", "shop/prefs.json"]).unwrap();
        assert!(config.batch_mode);
        assert!(config.no_save);
        assert_eq!(config.prefs_path(), PathBuf::from("shop/prefs.json"));
    }

    #[test]
    fn prefs_flag_needs_a_value() {
        let err = parse(&["-p"]).unwrap_err();
        assert_eq!(err.to_string(), "-p requires a path");
    }

    #[test]
    fn unknown_option_is_an_error() {
        assert!(parse(&["--verbose"]).is_err());
    }
}
