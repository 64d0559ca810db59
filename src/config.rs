use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Full configuration for one load run: where to write and what to read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub store: StoreTarget,
    pub inputs: InputPaths,
}

/// Storage backend selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StoreTarget {
    /// Relational store in a local database file
    Sqlite { database: PathBuf },
    /// Document store reached over the network
    Mongo { uri: String, database: String },
}

/// The four input file paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputPaths {
    pub words: PathBuf,
    pub lemmas: PathBuf,
    pub wordroots: PathBuf,
    pub resemble: PathBuf,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            store: StoreTarget::Sqlite { database: PathBuf::from("en_cn_dict.db") },
            inputs: InputPaths::default(),
        }
    }
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            words: PathBuf::from("ecdict.csv"),
            lemmas: PathBuf::from("lemma.en.txt"),
            wordroots: PathBuf::from("wordroot.txt"),
            resemble: PathBuf::from("resemble.txt"),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("dictload.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<LoadConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: LoadConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &LoadConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_toml_roundtrip() {
        let config = LoadConfig {
            store: StoreTarget::Mongo {
                uri: "mongodb://localhost:27017/".to_string(),
                database: "en_cn_dict".to_string(),
            },
            inputs: InputPaths::default(),
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: LoadConfig = toml::from_str(&toml_str).unwrap();
        match parsed.store {
            StoreTarget::Mongo { uri, database } => {
                assert_eq!(uri, "mongodb://localhost:27017/");
                assert_eq!(database, "en_cn_dict");
            }
            StoreTarget::Sqlite { .. } => panic!("expected mongo target"),
        }
        assert_eq!(parsed.inputs.words, PathBuf::from("ecdict.csv"));
    }

    #[test]
    fn test_backend_tag_selects_variant() {
        let toml_str = r#"
            [store]
            backend = "sqlite"
            database = "dict.db"

            [inputs]
            words = "ecdict.csv"
            lemmas = "lemma.en.txt"
            wordroots = "wordroot.txt"
            resemble = "resemble.txt"
        "#;
        let config: LoadConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(config.store, StoreTarget::Sqlite { .. }));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(Some(Path::new("does-not-exist.toml"))).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_write_config_respects_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictload.toml");
        let config = LoadConfig::default();

        write_config(&path, &config, false).unwrap();
        assert!(write_config(&path, &config, false).is_err());
        write_config(&path, &config, true).unwrap();

        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert!(matches!(loaded.store, StoreTarget::Sqlite { .. }));
    }
}
