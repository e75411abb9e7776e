use clap::{Parser, Subcommand};

use site_server::sitedata::merge::deep_merge;
use site_server::sitedata::sanitize::sanitize_features;
use site_server::sitedata::source::load_override;
use site_server::sitedata::store::embedded_defaults;
use site_server::sitedata::validation::validate;

#[derive(Parser)]
#[command(name = "site-cli")]
#[command(about = "Inspect and validate site configuration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a customer override through merge → sanitize → validate
    Validate {
        /// Override source: file path or http(s) URL
        source: String,
    },
    /// Print the validated compiled-in defaults
    Defaults,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let defaults = embedded_defaults()?;

    match cli.command {
        Commands::Validate { source } => {
            let client = reqwest::Client::new();
            let override_value = load_override(&client, Some(&source)).await?;

            let mut merged = deep_merge(&defaults, &override_value);
            sanitize_features(&mut merged);

            match validate(&merged) {
                Ok(data) => {
                    println!("{}", serde_json::to_string_pretty(&data)?);
                    eprintln!("OK: override merges into a valid site config");
                }
                Err(e) => {
                    eprintln!("Invalid site config ({} error(s)):", e.errors.len());
                    for error in &e.errors {
                        eprintln!("  {error}");
                    }
                    std::process::exit(1);
                }
            }
        }
        Commands::Defaults => {
            let data = validate(&defaults)?;
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
    }

    Ok(())
}
