use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_top_entries")]
    pub top_chart_entries: usize,
    #[serde(default = "default_chart_file")]
    pub chart_file: String,
}

fn default_currency() -> String {
    "$".to_string()
}
fn default_top_entries() -> usize {
    3
}
fn default_chart_file() -> String {
    "top_ngos.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::config_dir().to_string_lossy().to_string(),
            currency: default_currency(),
            top_chart_entries: default_top_entries(),
            chart_file: default_chart_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ngotrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".ngotrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ngotrack.conf")
    }

    /// Path of the NGO storage file inside the active data dir
    pub fn ngo_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("ngos.json")
    }

    /// Path of the donation history storage file inside the active data dir
    pub fn donation_file(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("donations.json")
    }

    /// Path of the chart artifact written after each donation
    pub fn chart_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.chart_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize the configuration file and the data directory.
    ///
    /// With `is_test` the config file is not written, so test runs using
    /// `--data-dir` never touch the user configuration.
    pub fn init_all(custom_dir: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let data_dir = match custom_dir {
            Some(d) => {
                let p = PathBuf::from(&d);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => dir.clone(),
        };
        fs::create_dir_all(&data_dir)?;

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Data dir:    {:?}", data_dir);

        Ok(config)
    }
}
