//! Dictload CLI - load ECDICT-style dictionary files into a database

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dictload::config::{self, LoadConfig, StoreTarget};
use dictload::storage::open_store;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "dictload")]
#[command(version = "0.0.1")]
#[command(about = "Dictionary dataset loader - parse ECDICT-style files into SQLite or MongoDB")]
#[command(long_about = r#"
Dictload parses four dictionary source files and bulk-loads them into a
database, in a fixed order:
  words (CSV) -> lemmas (text) -> wordroots (JSON) -> resemble (text)

Example usage:
  dictload load --database en_cn_dict.db --words ecdict.csv
  dictload load --mongo-uri mongodb://localhost:27017/ --db-name en_cn_dict
  dictload stats --database en_cn_dict.db
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse all four source files and load them into the store
    Load {
        /// Path to a dictload.toml config file (flags override its values)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// SQLite database file (default backend)
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// MongoDB connection URI; selects the document backend
        #[arg(long)]
        mongo_uri: Option<String>,

        /// MongoDB database name
        #[arg(long, default_value = "en_cn_dict")]
        db_name: String,

        /// Tabular word file (CSV with header row)
        #[arg(long)]
        words: Option<PathBuf>,

        /// Lemma mapping file
        #[arg(long)]
        lemmas: Option<PathBuf>,

        /// Word-root JSON file
        #[arg(long)]
        wordroots: Option<PathBuf>,

        /// Resemble group file
        #[arg(long)]
        resemble: Option<PathBuf>,
    },

    /// Show record counts for the four datasets
    Stats {
        /// Path to a dictload.toml config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// SQLite database file (default backend)
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// MongoDB connection URI; selects the document backend
        #[arg(long)]
        mongo_uri: Option<String>,

        /// MongoDB database name
        #[arg(long, default_value = "en_cn_dict")]
        db_name: String,
    },

    /// Write a starter dictload.toml
    Init {
        /// Where to write the config file
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Load {
            config,
            database,
            mongo_uri,
            db_name,
            words,
            lemmas,
            wordroots,
            resemble,
        } => {
            let mut load_config =
                resolve_store(config.as_deref(), database, mongo_uri, db_name)?;
            if let Some(words) = words {
                load_config.inputs.words = words;
            }
            if let Some(lemmas) = lemmas {
                load_config.inputs.lemmas = lemmas;
            }
            if let Some(wordroots) = wordroots {
                load_config.inputs.wordroots = wordroots;
            }
            if let Some(resemble) = resemble {
                load_config.inputs.resemble = resemble;
            }

            println!("🚀 Loading dictionary sources into {}", describe_target(&load_config.store));

            let report = dictload::loader::run(&load_config)?;

            for source in &report.sources {
                match &source.result {
                    Ok(inserted) => println!("📄 {}: {} inserted", source.dataset, inserted),
                    Err(e) => println!("❌ {}: {}", source.dataset, e),
                }
            }

            println!();
            println!("{}", report.stats);

            if !report.all_ok() {
                anyhow::bail!(
                    "{} of {} sources failed",
                    report.failed_count(),
                    report.sources.len()
                );
            }
            println!("✅ Load complete!");
        }

        Commands::Stats { config, database, mongo_uri, db_name } => {
            let load_config = resolve_store(config.as_deref(), database, mongo_uri, db_name)?;
            let mut store = open_store(&load_config.store)?;
            let stats = store.stats()?;

            println!("📊 Dictload Statistics ({})", describe_target(&load_config.store));
            println!("------------------------------------");
            println!("{}", stats);
        }

        Commands::Init { path, force } => {
            let path = path.unwrap_or_else(config::default_config_path);
            config::write_config(&path, &LoadConfig::default(), force)?;
            println!("✅ Wrote starter config to {}", path.display());
        }
    }

    Ok(())
}

/// Merge the optional config file with the store-selection flags.
///
/// Precedence: `--mongo-uri` wins over `--database`, which wins over the
/// config file, which wins over the built-in SQLite default.
fn resolve_store(
    config_path: Option<&std::path::Path>,
    database: Option<PathBuf>,
    mongo_uri: Option<String>,
    db_name: String,
) -> anyhow::Result<LoadConfig> {
    let mut load_config = config::load_config(config_path)?.unwrap_or_default();

    if let Some(uri) = mongo_uri {
        load_config.store = StoreTarget::Mongo { uri, database: db_name };
    } else if let Some(database) = database {
        load_config.store = StoreTarget::Sqlite { database };
    }

    Ok(load_config)
}

fn describe_target(target: &StoreTarget) -> String {
    match target {
        StoreTarget::Sqlite { database } => format!("sqlite ({})", database.display()),
        StoreTarget::Mongo { uri, database } => format!("mongodb ({} / {})", uri, database),
    }
}
