//! Record store: the persistence boundary between the in-memory collections
//! and the two JSON files on disk. NGOs and the donation history live in
//! independent files with independent lifecycles; every save is a full
//! overwrite of one file.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::donation::Donation;
use crate::models::ngo::Ngo;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// The fixed seed set used when no NGO storage exists yet.
pub fn seed_ngos() -> Vec<Ngo> {
    vec![
        Ngo::new("Save the Earth", "Environment"),
        Ngo::new("Help Kids", "Education"),
        Ngo::new("Animal Care", "Animals"),
    ]
}

pub struct RecordStore {
    ngo_path: PathBuf,
    donation_path: PathBuf,
}

impl RecordStore {
    pub fn new(cfg: &Config) -> Self {
        Self {
            ngo_path: cfg.ngo_file(),
            donation_path: cfg.donation_file(),
        }
    }

    /// Store rooted at an arbitrary directory, using the standard file names.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            ngo_path: dir.join("ngos.json"),
            donation_path: dir.join("donations.json"),
        }
    }

    /// Write the seed NGOs and an empty history for files that do not exist
    /// yet. Existing files are left untouched.
    pub fn ensure_initialized(&self) -> AppResult<()> {
        if !self.ngo_path.exists() {
            self.save_ngos(&seed_ngos())?;
        }
        if !self.donation_path.exists() {
            self.save_donations(&[])?;
        }
        Ok(())
    }

    pub fn load_ngos(&self) -> AppResult<Vec<Ngo>> {
        load_or(&self.ngo_path, seed_ngos)
    }

    pub fn save_ngos(&self, ngos: &[Ngo]) -> AppResult<()> {
        save(&self.ngo_path, ngos)
    }

    pub fn load_donations(&self) -> AppResult<Vec<Donation>> {
        load_or(&self.donation_path, Vec::new)
    }

    pub fn save_donations(&self, history: &[Donation]) -> AppResult<()> {
        save(&self.donation_path, history)
    }
}

/// Read and parse a JSON collection, falling back to `default` when the file
/// does not exist. A file that exists but does not parse propagates as
/// MalformedStorage: no repair is attempted.
fn load_or<T, F>(path: &Path, default: F) -> AppResult<Vec<T>>
where
    T: DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    if !path.exists() {
        return Ok(default());
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| AppError::MalformedStorage {
        path: path.display().to_string(),
        source: e,
    })
}

/// Overwrite the file with the full collection, pretty printed. The parent
/// directory is created when missing so a `--data-dir` override works
/// without a prior `init`.
fn save<T: Serialize>(path: &Path, records: &[T]) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(records).map_err(|e| AppError::MalformedStorage {
        path: path.display().to_string(),
        source: e,
    })?;
    fs::write(path, json)?;
    Ok(())
}
