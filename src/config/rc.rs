use crate::component::AppProps;
use crate::error::{AppError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const RC_FILE_NAME: &str = ".counterrc";

pub struct RcLoader;

impl RcLoader {
    /// Get the path to the RC file
    /// Looks for .counterrc in:
    /// 1. Current directory
    /// 2. Home directory (~/.counterrc)
    pub fn get_rc_path() -> Option<PathBuf> {
        let current_rc = Path::new(RC_FILE_NAME);
        if current_rc.exists() {
            return Some(current_rc.to_path_buf());
        }

        if let Ok(home) = env::var("HOME") {
            let home_rc = Path::new(&home).join(RC_FILE_NAME);
            if home_rc.exists() {
                return Some(home_rc);
            }
        }

        None
    }

    /// Load the implicit RC file, falling back to defaults
    pub fn load_config() -> AppProps {
        let mut config = AppProps::default();

        if let Some(rc_path) = Self::get_rc_path() {
            match fs::read_to_string(&rc_path) {
                Ok(content) => {
                    debug!(path = %rc_path.display(), "loading rc file");
                    Self::parse_config_content(&content, &mut config);
                }
                Err(err) => {
                    warn!(path = %rc_path.display(), %err, "could not read rc file");
                }
            }
        }

        config
    }

    /// Load an explicitly named RC file; failing to read it is an error
    pub fn load_from_path(path: &Path) -> Result<AppProps> {
        let content = fs::read_to_string(path).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = AppProps::default();
        Self::parse_config_content(&content, &mut config);
        Ok(config)
    }

    /// Parse the content of an RC file
    fn parse_config_content(content: &str, config: &mut AppProps) {
        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with('"') {
                continue;
            }

            Self::parse_config_line(line, config);
        }
    }

    /// Parse a single configuration line
    fn parse_config_line(line: &str, config: &mut AppProps) {
        let line = strip_inline_comment(line).trim();

        let setting = line.strip_prefix("set ").unwrap_or(line).trim();

        // Bare flags, vim-style
        match setting {
            "help" | "show_help" => {
                config.show_help = true;
                return;
            }
            "nohelp" | "noshow_help" => {
                config.show_help = false;
                return;
            }
            _ => {}
        }

        let Some((key, value)) = setting.split_once('=') else {
            warn!(setting, "ignoring unrecognized rc line");
            return;
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "initial_count" | "initialcount" | "initialCount" => match value.parse::<i64>() {
                Ok(count) => config.initial_count = count,
                Err(_) => warn!(value, "ignoring invalid initial_count"),
            },
            "item" => {
                if value.is_empty() {
                    warn!("ignoring empty item");
                } else {
                    config.items.push(value.to_string());
                }
            }
            "help" | "show_help" => match parse_bool(value) {
                Some(flag) => config.show_help = flag,
                None => warn!(value, "ignoring invalid show_help"),
            },
            _ => warn!(key, "ignoring unknown rc setting"),
        }
    }

    /// Generate a sample RC file content
    pub fn generate_sample_rc() -> String {
        r#"# counter-demo configuration file (.counterrc)
# Lines starting with # or " are comments

# Value the counter starts from
set initial_count=1

# Items shown by the list component, one per line, keyed by position
# item=first
# item=second

# Show the key hint line (or set nohelp to hide it)
set help

# Alternative key=value syntax:
# initialcount=10
# show_help=false
"#
        .to_string()
    }
}

/// A `#` starts a comment only at the start of the line or after whitespace
fn strip_inline_comment(line: &str) -> &str {
    let mut prev_is_space = true;
    for (pos, ch) in line.char_indices() {
        if ch == '#' && prev_is_space {
            return &line[..pos];
        }
        prev_is_space = ch.is_whitespace();
    }
    line
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
