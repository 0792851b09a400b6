#![forbid(unsafe_code)]

use milkyway_kernel_contracts::ValidatorType;
use milkyway_storage::repo::ValidatorRepo;
use milkyway_storage::sample_data::{BAD_STASH, GOOD_STASH, NEUTRAL_STASH};
use milkyway_storage::ValidatorStore;

#[test]
fn at_seed_db_01_three_archetypes_keyed_by_type() {
    let s = ValidatorStore::with_sample_data();
    assert_eq!(s.len(), 3);

    assert_eq!(s.get_by_type("good").unwrap().stash, GOOD_STASH);
    assert_eq!(s.get_by_type("neutral").unwrap().stash, NEUTRAL_STASH);
    assert_eq!(s.get_by_type("bad").unwrap().stash, BAD_STASH);
    assert_eq!(
        s.get_by_stash(BAD_STASH).unwrap().validator_type,
        ValidatorType::Bad
    );
}

#[test]
fn at_seed_db_02_event_counts_per_archetype() {
    let s = ValidatorStore::with_sample_data();
    assert_eq!(s.get_by_type("good").unwrap().events.len(), 40);
    assert_eq!(s.get_by_type("neutral").unwrap().events.len(), 33);
    assert_eq!(s.get_by_type("bad").unwrap().events.len(), 37);
}

#[test]
fn at_seed_db_03_blocks_stay_in_archetype_bands() {
    let s = ValidatorStore::with_sample_data();
    let bands = [("good", 112_000u64), ("neutral", 113_000), ("bad", 114_000)];
    for (key, base) in bands {
        let v = s.get_by_type(key).unwrap();
        assert!(v
            .events
            .iter()
            .all(|e| e.block >= base && e.block < base + 1_000));
    }
}

#[test]
fn at_seed_db_04_archetype_behaviour() {
    let s = ValidatorStore::with_sample_data();
    let good = s.get_by_type("good").unwrap();
    let neutral = s.get_by_type("neutral").unwrap();
    let bad = s.get_by_type("bad").unwrap();

    assert!(good.is_active() && !good.has_been_slashed());
    assert!(neutral.is_active() && !neutral.has_been_slashed());
    assert!(!bad.is_active() && bad.has_been_slashed());

    assert_eq!(good.total_rewards(), 44_990_987_653);
    assert_eq!(neutral.total_rewards(), 18_556_790_011);
    assert_eq!(bad.total_rewards(), 0);
}
