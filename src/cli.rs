use crate::component::AppProps;
use clap::Parser;
use std::path::PathBuf;

/// Counter and list components rendered in the terminal
#[derive(Debug, Parser)]
#[command(name = "counter-demo", version, about)]
pub struct Cli {
    /// Value the counter starts from
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub initial_count: Option<i64>,

    /// Item to show in the list (repeatable); replaces items from the rc file
    #[arg(short, long = "item")]
    pub items: Vec<String>,

    /// Read settings from this file instead of .counterrc
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (RUST_LOG controls the level)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Hide the key hint line
    #[arg(long)]
    pub no_help: bool,

    /// Print a sample .counterrc and exit
    #[arg(long)]
    pub print_rc: bool,
}

impl Cli {
    /// Layer command-line overrides on top of the loaded config
    pub fn into_props(self, mut props: AppProps) -> AppProps {
        if let Some(initial_count) = self.initial_count {
            props.initial_count = initial_count;
        }
        if !self.items.is_empty() {
            props.items = self.items;
        }
        if self.no_help {
            props.show_help = false;
        }

        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("counter-demo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let config = AppProps {
            initial_count: 8,
            items: vec!["rc".to_string()],
            show_help: true,
        };
        let props = parse(&[]).into_props(config);
        assert_eq!(props.initial_count, 8);
        assert_eq!(props.items, vec!["rc"]);
        assert!(props.show_help);
    }

    #[test]
    fn test_flags_override_config() {
        let config = AppProps {
            initial_count: 8,
            items: vec!["rc".to_string()],
            show_help: true,
        };
        let props = parse(&["-n", "-3", "--item", "a", "-i", "b", "--no-help"]).into_props(config);
        assert_eq!(props.initial_count, -3);
        assert_eq!(props.items, vec!["a", "b"]);
        assert!(!props.show_help);
    }

    #[test]
    fn test_defaults_give_root_composition() {
        let props = parse(&[]).into_props(AppProps::default());
        assert_eq!(props, AppProps::default());
    }

    #[test]
    fn test_rejects_non_integer_count() {
        let result = Cli::try_parse_from(["counter-demo", "--initial-count", "one"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
