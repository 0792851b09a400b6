#![forbid(unsafe_code)]

use std::sync::Arc;
use std::thread;

use milkyway_kernel_contracts::{Event, Validator, ValidatorType};
use milkyway_storage::repo::ValidatorRepo;
use milkyway_storage::{StorageError, ValidatorStore};
use serde_json::json;

fn good() -> Validator {
    let mut v = Validator::new("X", ValidatorType::Good, "good one");
    v.add_event(Event::new(
        112073,
        "staking.Rewarded",
        json!({"stash": "X", "amount": 14783456789_i64}),
    ));
    v
}

#[test]
fn at_store_db_01_save_then_get_by_type_round_trips() {
    let s = ValidatorStore::new();
    let v = good();
    s.save(v.clone());

    let got = s.get_by_type("good").unwrap();
    assert_eq!(*got, v);
}

#[test]
fn at_store_db_02_get_by_type_missing_is_not_found() {
    let s = ValidatorStore::new();
    s.save(good());
    assert!(matches!(
        s.get_by_type("missing"),
        Err(StorageError::NotFound { .. })
    ));
}

#[test]
fn at_store_db_03_get_by_stash_scans_rows() {
    let s = ValidatorStore::new();
    s.save(good());
    s.save(Validator::new("Y", ValidatorType::Bad, "bad one"));

    assert_eq!(s.get_by_stash("Y").unwrap().validator_type, ValidatorType::Bad);
    assert!(matches!(
        s.get_by_stash("unknown-stash"),
        Err(StorageError::NotFound { .. })
    ));
}

#[test]
fn at_store_db_04_save_overwrites_same_type() {
    let s = ValidatorStore::new();
    s.save(good());
    s.save(Validator::new("Z", ValidatorType::Good, "replacement"));

    assert_eq!(s.get_all().len(), 1);
    assert_eq!(s.get_by_type("good").unwrap().stash, "Z");
    assert!(s.get_by_stash("X").is_err());
}

#[test]
fn at_store_db_05_update_missing_fails_and_leaves_store_unchanged() {
    let s = ValidatorStore::new();
    s.save(good());
    let before: Vec<Validator> = s.get_all().iter().map(|v| (**v).clone()).collect();

    let err = s
        .update(Validator::new("N", ValidatorType::Neutral, "never saved"))
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));

    let after: Vec<Validator> = s.get_all().iter().map(|v| (**v).clone()).collect();
    assert_eq!(before, after);
    assert!(s.get_by_type("neutral").is_err());
}

#[test]
fn at_store_db_06_update_existing_replaces_row() {
    let s = ValidatorStore::new();
    s.save(good());

    let mut v = (*s.get_by_type("good").unwrap()).clone();
    v.add_event(Event::new(112080, "staking.EraPaid", json!({})));
    s.update(v).unwrap();

    assert_eq!(s.get_by_type("good").unwrap().events.len(), 2);
}

#[test]
fn at_store_db_07_held_snapshot_is_not_mutated_by_later_writes() {
    let s = ValidatorStore::new();
    s.save(good());
    let held = s.get_by_type("good").unwrap();

    let mut v = (*held).clone();
    v.add_event(Event::new(1, "imOnline.HeartbeatReceived", json!({})));
    s.update(v).unwrap();

    assert_eq!(held.events.len(), 1);
    assert_eq!(s.get_by_type("good").unwrap().events.len(), 2);
}

#[test]
fn at_store_db_08_concurrent_readers_and_writer() {
    let s = Arc::new(ValidatorStore::new());
    s.save(good());

    let writer = {
        let s = Arc::clone(&s);
        thread::spawn(move || {
            for block in 0..200u64 {
                let mut v = (*s.get_by_type("good").unwrap()).clone();
                v.add_event(Event::new(block, "session.NewSession", json!({})));
                s.save(v);
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let s = Arc::clone(&s);
            thread::spawn(move || {
                for _ in 0..200 {
                    let v = s.get_by_type("good").unwrap();
                    assert!(!v.events.is_empty());
                    assert_eq!(v.events[0].block, 112073);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
    assert_eq!(s.get_by_type("good").unwrap().events.len(), 201);
}
