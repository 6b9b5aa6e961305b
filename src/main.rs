use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fieldkit::{query_to_options, Attributes, Catalog, Config, Resolved, TranslationResolver};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Escape HTML entities in a string
    Escape { value: String },
    /// Decode HTML entities in a string
    Decode { value: String },
    /// Render a JSON attribute map as an HTML attribute string
    Attrs {
        /// Path to a JSON file holding an object of attribute name/value pairs
        path: PathBuf,

        /// Classes to add before rendering
        #[arg(long)]
        class: Vec<String>,
    },
    /// Flatten a JSON records file into an option list
    Options {
        /// Path to a JSON file holding an array of records
        path: PathBuf,

        /// Field to use as option value
        #[arg(long)]
        value: Option<String>,

        /// Field to use as option key
        #[arg(long)]
        key: Option<String>,
    },
    /// Resolve a translation key against a catalog file
    Translate {
        key: String,

        /// Path to a YAML or JSON catalog file
        #[arg(short, long)]
        catalog: PathBuf,

        /// Fallback used when the key is absent
        #[arg(short, long)]
        fallback: Option<String>,

        /// Path to a YAML config file (namespace prefix)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Escape { value } => {
            println!("{}", fieldkit::escape(&value));
        }
        Commands::Decode { value } => {
            println!("{}", fieldkit::decode(&value));
        }
        Commands::Attrs { path, class } => {
            attrs(&path, &class)?;
        }
        Commands::Options { path, value, key } => {
            options(&path, value.as_deref(), key.as_deref())?;
        }
        Commands::Translate {
            key,
            catalog,
            fallback,
            config,
        } => {
            translate(&key, &catalog, fallback.as_deref(), config.as_deref())?;
        }
    }

    Ok(())
}

fn attrs(path: &std::path::Path, classes: &[String]) -> Result<()> {
    info!("Loading attribute map from {:?}", path);
    let content = std::fs::read_to_string(path).context("Failed to read attribute file")?;
    let map: serde_json::Value =
        serde_json::from_str(&content).context("Failed to parse JSON attribute map")?;

    let object = map
        .as_object()
        .ok_or_else(|| anyhow::anyhow!("Attribute file must hold a JSON object"))?;

    let mut attributes = Attributes::new();
    for (name, value) in object {
        match value {
            serde_json::Value::Null => {
                attributes.unset(name.clone());
            }
            serde_json::Value::Bool(true) => {
                attributes.flag(name.clone());
            }
            serde_json::Value::Bool(false) => {}
            serde_json::Value::String(text) => {
                attributes.set(name.clone(), text.clone());
            }
            other => {
                attributes.set(name.clone(), other.to_string());
            }
        }
    }
    for class in classes {
        attributes.add_class(class);
    }

    match attributes.render() {
        Some(rendered) => println!("{}", rendered.trim_start()),
        None => warn!("No attributes rendered"),
    }
    Ok(())
}

fn options(path: &std::path::Path, value: Option<&str>, key: Option<&str>) -> Result<()> {
    info!("Loading records from {:?}", path);
    let content = std::fs::read_to_string(path).context("Failed to read records file")?;
    let records: serde_json::Value =
        serde_json::from_str(&content).context("Failed to parse JSON records")?;

    match query_to_options(records, value, key) {
        Resolved::Options(options) => {
            for (key, value) in options.iter() {
                println!("{}={}", key, value);
            }
        }
        Resolved::Passthrough(original) => {
            warn!("No options produced, input passed through");
            println!("{}", original);
        }
    }
    Ok(())
}

fn translate(
    key: &str,
    catalog_path: &std::path::Path,
    fallback: Option<&str>,
    config_path: Option<&std::path::Path>,
) -> Result<()> {
    info!("Loading catalog from {:?}", catalog_path);
    let catalog = Catalog::load(catalog_path).context("Failed to load catalog")?;

    let config = match config_path {
        Some(path) => Config::load(path).context("Failed to load config")?,
        None => Config::default(),
    };

    let resolver = TranslationResolver::new(&catalog, config);
    match resolver.translate(key, fallback) {
        Some(translated) => println!("{}", translated),
        None => warn!("Empty key, nothing to translate"),
    }
    Ok(())
}
