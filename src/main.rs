mod cli;
mod index_templates;

use clap::{CommandFactory, Parser, ValueEnum};
use estemplate::Source;

use crate::cli::{Cli, Commands, TemplateName};

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn render(name: TemplateName, pretty: bool, with_name: bool) -> Result<String, Box<dyn std::error::Error>> {
    let template = index_templates::template(name);
    template.validate(with_name)?;
    log::info!("[root] {} template validated", name);
    let body = template.source(with_name)?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&body)?
    } else {
        serde_json::to_string(&body)?
    };
    Ok(rendered)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Some(Commands::Render {
            template,
            pretty,
            with_name,
        }) => println!("{}", render(template, pretty, with_name)?),
        Some(Commands::List) => {
            for name in TemplateName::value_variants() {
                println!("{}", name);
            }
        }
        None => Cli::command().print_help()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn test_render_compact() {
        let rendered = render(TemplateName::Book, false, false).unwrap();
        assert!(!rendered.contains('\n'));
        let body: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(body["index_patterns"], "book-*");
    }

    #[test]
    fn test_render_pretty_with_name() {
        let rendered = render(TemplateName::Library, true, true).unwrap();
        assert!(rendered.contains('\n'));
        let body: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(body["library"]["version"], 1);
    }
}
