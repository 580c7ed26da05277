use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use recipe_sanitize::{
    render, sanitize, sanitize_json_ld, sanitize_json_ld_file, OutputFormat, Recipe,
    SanitizeConfig, SanitizeError,
};
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-sanitize", version, about = "Normalize scraped recipe metadata")]
struct Cli {
    /// Config file (defaults to ./recipe-sanitize.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sanitize the recipe of a JSON-LD document
    Recipe {
        /// JSON-LD file, stdin when omitted
        input: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum)]
        format: Option<Format>,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Run a single field normalizer
    Field {
        #[arg(value_enum)]
        kind: FieldKind,
        /// Raw value; author and image values are read as JSON when they parse
        value: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Html,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Html => OutputFormat::Html,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldKind {
    Author,
    Common,
    Image,
    Ingredient,
    Time,
    Yield,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Cli::parse())?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), SanitizeError> {
    let config = SanitizeConfig::load(cli.config.as_deref())?;

    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    env_logger::Builder::from_env(env).init();
    debug!("{config:?}");

    match cli.command {
        Command::Recipe {
            input,
            format,
            pretty,
        } => {
            let recipe = match input {
                Some(path) => sanitize_json_ld_file(&path)?,
                None => {
                    let mut text = String::new();
                    std::io::stdin().read_to_string(&mut text)?;
                    sanitize_json_ld(&text)?
                }
            };

            match format.map(OutputFormat::from).unwrap_or(config.format) {
                OutputFormat::Json => println!("{}", to_json(&recipe, pretty || config.pretty)?),
                OutputFormat::Html => print!("{}", render::to_html(&recipe)),
            }
        }
        Command::Field { kind, value } => {
            let raw = Some(value.as_str());
            let output = match kind {
                FieldKind::Author => serde_json::to_value(sanitize::author(&json_or_string(&value)))?,
                FieldKind::Image => serde_json::to_value(sanitize::image(&json_or_string(&value)))?,
                FieldKind::Common => Value::String(sanitize::common(&value)),
                FieldKind::Ingredient => serde_json::to_value(sanitize::ingredient(&value))?,
                FieldKind::Time => serde_json::to_value(sanitize::time(raw))?,
                FieldKind::Yield => serde_json::to_value(sanitize::recipe_yield(raw))?,
            };
            println!("{output}");
        }
    }

    Ok(())
}

fn json_or_string(value: &str) -> Value {
    serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()))
}

fn to_json(recipe: &Recipe, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(recipe)
    } else {
        serde_json::to_string(recipe)
    }
}
