//! Registry, ledger and donation workflow tests against the library API.

use ngotrack::core::donate::DonateLogic;
use ngotrack::core::{ledger, registry};
use ngotrack::errors::AppError;
use ngotrack::models::donation::Donation;
use ngotrack::models::ngo::Ngo;
use ngotrack::store::{RecordStore, seed_ngos};

use std::env;
use std::fs;
use std::path::PathBuf;

fn test_dir(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_ngotrack_core", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

#[test]
fn test_add_rejects_empty_fields_without_mutation() {
    let dir = test_dir("add_empty");
    let store = RecordStore::from_dir(&dir);
    let mut ngos = seed_ngos();

    let err = registry::add(&mut ngos, &store, "", "x").unwrap_err();
    assert!(matches!(err, AppError::EmptyField(_)));

    let err = registry::add(&mut ngos, &store, "x", "   ").unwrap_err();
    assert!(matches!(err, AppError::EmptyField(_)));

    assert_eq!(ngos, seed_ngos());
    assert!(!dir.join("ngos.json").exists());
}

#[test]
fn test_add_trims_and_persists() {
    let dir = test_dir("add_trim");
    let store = RecordStore::from_dir(&dir);
    let mut ngos = Vec::new();

    registry::add(&mut ngos, &store, "  Food Bank ", " Hunger ").unwrap();

    assert_eq!(ngos[0].name, "Food Bank");
    assert_eq!(ngos[0].cause, "Hunger");
    assert_eq!(store.load_ngos().unwrap(), ngos);
}

#[test]
fn test_remove_at_out_of_range_leaves_collection_unchanged() {
    let dir = test_dir("remove_oob");
    let store = RecordStore::from_dir(&dir);
    let mut ngos = seed_ngos();

    for index in [0, 4, 99] {
        let err = registry::remove_at(&mut ngos, &store, index).unwrap_err();
        assert!(matches!(err, AppError::InvalidSelection(_)));
    }
    assert_eq!(ngos, seed_ngos());

    let mut empty: Vec<Ngo> = Vec::new();
    let err = registry::remove_at(&mut empty, &store, 1).unwrap_err();
    assert!(matches!(err, AppError::NoNgos));
}

#[test]
fn test_remove_at_uses_insertion_order() {
    let dir = test_dir("remove_order");
    let store = RecordStore::from_dir(&dir);
    let mut ngos = seed_ngos();
    // give the last NGO the highest total, so a donation-sorted view would
    // disagree with insertion order
    ngos[2].donations = 100.0;

    let removed = registry::remove_at(&mut ngos, &store, 1).unwrap();
    assert_eq!(removed.name, "Save the Earth");
    assert_eq!(ngos.len(), 2);
}

#[test]
fn test_find_by_cause_exact_case_insensitive() {
    let ngos = seed_ngos();

    let hits = registry::find_by_cause(&ngos, "education");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Help Kids");

    assert!(registry::find_by_cause(&ngos, "Edu").is_empty());
    assert!(registry::find_by_cause(&ngos, "Space").is_empty());
}

#[test]
fn test_sorted_view_is_stable_on_ties() {
    let mut ngos = seed_ngos();
    ngos[0].donations = 10.0;
    ngos[1].donations = 10.0;
    ngos[2].donations = 50.0;

    let view = registry::sorted_view(&ngos);
    let names: Vec<&str> = view.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["Animal Care", "Save the Earth", "Help Kids"]);
}

#[test]
fn test_donate_scenario_from_seed_data() {
    let dir = test_dir("donate_seed");
    let store = RecordStore::from_dir(&dir);
    let mut ngos = seed_ngos();
    let mut history = Vec::new();

    let record =
        DonateLogic::apply(&store, &mut ngos, &mut history, 2, "Alice", 25.0).unwrap();

    assert_eq!(record.ngo, "Help Kids");
    assert_eq!(record.donor, "Alice");
    assert_eq!(record.amount, 25.0);

    assert_eq!(ngos[1].donations, 25.0);
    assert_eq!(history.len(), 1);

    // both collections hit the disk
    assert_eq!(store.load_ngos().unwrap(), ngos);
    assert_eq!(store.load_donations().unwrap(), history);
}

#[test]
fn test_donate_rejects_invalid_amounts_before_any_mutation() {
    let dir = test_dir("donate_bad_amount");
    let store = RecordStore::from_dir(&dir);
    let mut ngos = seed_ngos();
    let mut history: Vec<Donation> = Vec::new();

    for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let err =
            DonateLogic::apply(&store, &mut ngos, &mut history, 1, "Alice", amount).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidAmount(_)
        ));
    }

    assert_eq!(ngos, seed_ngos());
    assert!(history.is_empty());
    assert!(!dir.join("ngos.json").exists());
    assert!(!dir.join("donations.json").exists());
}

#[test]
fn test_donate_rejects_bad_selection_before_any_mutation() {
    let dir = test_dir("donate_bad_sel");
    let store = RecordStore::from_dir(&dir);
    let mut ngos = seed_ngos();
    let mut history: Vec<Donation> = Vec::new();

    let err = DonateLogic::apply(&store, &mut ngos, &mut history, 0, "Alice", 5.0).unwrap_err();
    assert!(matches!(err, AppError::InvalidSelection(_)));
    let err = DonateLogic::apply(&store, &mut ngos, &mut history, 4, "Alice", 5.0).unwrap_err();
    assert!(matches!(err, AppError::InvalidSelection(_)));

    let mut empty: Vec<Ngo> = Vec::new();
    let err = DonateLogic::apply(&store, &mut empty, &mut history, 1, "Alice", 5.0).unwrap_err();
    assert!(matches!(err, AppError::NoNgos));

    assert_eq!(ngos, seed_ngos());
    assert!(!dir.join("ngos.json").exists());
}

#[test]
fn test_ledger_lookups_are_case_insensitive_exact() {
    let history = vec![
        Donation::new("Help Kids".into(), "Alice".into(), 25.0),
        Donation::new("Animal Care".into(), "Bob".into(), 10.0),
        Donation::new("Help Kids".into(), "alice".into(), 5.0),
    ];

    assert_eq!(ledger::find_by_donor(&history, "ALICE").len(), 2);
    assert_eq!(ledger::find_by_donor(&history, "Ali").len(), 0);
    assert_eq!(ledger::find_by_ngo(&history, "help kids").len(), 2);
    assert_eq!(ledger::find_by_ngo(&history, "Help").len(), 0);
}
