use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;

use xl8_cli::cli::commands::translate;
use xl8_cli::cli::{Args, Command};
use xl8_cli::output::{self, OutputConfig};
use xl8_cli::translation::{print_languages, validate_language};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        None => {
            if let Some(ref lang) = args.to {
                validate_language(lang)?;
            }

            let options = translate::TranslateOptions {
                text: args.text,
                to: args.to,
                model: args.model,
                endpoint: args.endpoint,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
