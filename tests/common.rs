#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ngo() -> Command {
    cargo_bin_cmd!("ngotrack")
}

/// Create a unique, empty test data dir inside the system temp dir
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ngotrack", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn ngo_file(dir: &str) -> PathBuf {
    PathBuf::from(dir).join("ngos.json")
}

pub fn donation_file(dir: &str) -> PathBuf {
    PathBuf::from(dir).join("donations.json")
}

/// Parse the persisted NGO collection
pub fn read_ngos(dir: &str) -> serde_json::Value {
    let content = fs::read_to_string(ngo_file(dir)).expect("read ngos.json");
    serde_json::from_str(&content).expect("parse ngos.json")
}

/// Parse the persisted donation history
pub fn read_donations(dir: &str) -> serde_json::Value {
    let content = fs::read_to_string(donation_file(dir)).expect("read donations.json");
    serde_json::from_str(&content).expect("parse donations.json")
}

/// Record a donation via the CLI
pub fn donate(dir: &str, index: &str, donor: &str, amount: &str) {
    ngo()
        .args([
            "--data-dir",
            dir,
            "donate",
            "--ngo",
            index,
            "--donor",
            donor,
            "--amount",
            amount,
        ])
        .assert()
        .success();
}
