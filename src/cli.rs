use std::fmt;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a bundled index template and print its request body
    Render {
        template: TemplateName,

        /// Pretty-print the JSON body
        #[arg(long)]
        pretty: bool,

        /// Nest the body under the template name
        #[arg(long)]
        with_name: bool,
    },
    /// List the bundled index templates
    List,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateName {
    Book,
    Library,
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateName::Book => write!(f, "book"),
            TemplateName::Library => write!(f, "library"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from(["estemplate", "-vv", "render", "library", "--pretty"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Render {
                template,
                pretty,
                with_name,
            }) => {
                assert_eq!(template, TemplateName::Library);
                assert!(pretty);
                assert!(!with_name);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
