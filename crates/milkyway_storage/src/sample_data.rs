#![forbid(unsafe_code)]

//! Fixed sample history for the three validator archetypes.
//!
//! Good validators live in blocks 112000+, neutral in 113000+, bad in 114000+.

use milkyway_kernel_contracts::{Event, Validator, ValidatorType};
use serde_json::{json, Value};

pub const GOOD_STASH: &str = "5F3sa2TJc...Good";
pub const NEUTRAL_STASH: &str = "5DAAnrj7V...Neutral";
pub const BAD_STASH: &str = "5HGjWAeFD...Bad";

fn ev(block: u64, event_type: &str, data: Value) -> Event {
    Event::new(block, event_type, data)
}

fn build(stash: &str, validator_type: ValidatorType, description: &str, events: Vec<Event>) -> Validator {
    let mut validator = Validator::new(stash, validator_type, description);
    for event in events {
        validator.add_event(event);
    }
    validator
}

pub fn sample_validators() -> Vec<Validator> {
    vec![good_validator(), neutral_validator(), bad_validator()]
}

pub fn good_validator() -> Validator {
    let s = GOOD_STASH;
    let events = vec![
        // bonding
        ev(112034, "staking.Bonded", json!({"stash": s, "amount": 500_000_000_000_i64})),
        ev(112035, "staking.ValidatorPrefsSet", json!({"stash": s, "prefs": {"commission": 0}})),
        ev(112040, "staking.StakersElected", json!({})),
        ev(112041, "staking.OldSlashingReportDiscarded", json!({"session_index": 229})),
        // always online
        ev(112048, "session.NewSession", json!({"session_index": 230})),
        ev(112049, "imOnline.HeartbeatReceived", json!({"authority_id": s})),
        ev(112050, "imOnline.AllGood", json!({})),
        ev(112051, "session.NewSession", json!({"session_index": 231})),
        ev(112052, "imOnline.HeartbeatReceived", json!({"authority_id": s})),
        ev(112053, "imOnline.AllGood", json!({})),
        // payouts
        ev(112072, "staking.PayoutStarted", json!({"era_index": 1004, "validator_stash": s, "page": 0, "next": null})),
        ev(112073, "staking.Rewarded", json!({"stash": s, "dest": "Stash", "amount": 14_783_456_789_i64})),
        ev(112074, "staking.EraPaid", json!({"era_index": 1004, "validator_payout": 14_783_456_789_i64, "remainder": 201_654_321})),
        ev(112075, "staking.PayoutStarted", json!({"era_index": 1005, "validator_stash": s, "page": 0, "next": null})),
        ev(112076, "staking.Rewarded", json!({"stash": s, "dest": "Stash", "amount": 15_219_876_543_i64})),
        ev(112077, "staking.EraPaid", json!({"era_index": 1005, "validator_payout": 15_219_876_543_i64, "remainder": 180_123_457})),
        ev(112078, "staking.PayoutStarted", json!({"era_index": 1006, "validator_stash": s, "page": 0, "next": null})),
        ev(112079, "staking.Rewarded", json!({"stash": s, "dest": "Stash", "amount": 14_987_654_321_i64})),
        ev(112080, "staking.EraPaid", json!({"era_index": 1006, "validator_payout": 14_987_654_321_i64, "remainder": 123_456_789})),
        // democracy
        ev(112090, "democracy.Proposed", json!({"proposal_index": 45, "deposit": 50_000_000_000_i64})),
        ev(112091, "democracy.Seconded", json!({"seconder": s, "proposal_index": 45})),
        ev(112092, "democracy.Seconded", json!({"seconder": s, "proposal_index": 46})),
        ev(112093, "democracy.Proposed", json!({"proposal_index": 46, "deposit": 75_000_000_000_i64})),
        ev(112094, "democracy.Started", json!({"referendum_index": 22, "threshold": "SuperMajorityApprove"})),
        ev(112095, "democracy.Voted", json!({"voter": s, "ref_index": 22, "vote": {"Standard": {"vote": "aye", "balance": 100_000_000_000_i64}}})),
        ev(112096, "democracy.Passed", json!({"ref_index": 22})),
        ev(112097, "democracy.Started", json!({"referendum_index": 23, "threshold": "SimpleMajority"})),
        ev(112098, "democracy.Voted", json!({"voter": s, "ref_index": 23, "vote": {"Standard": {"vote": "nay", "balance": 100_000_000_000_i64}}})),
        ev(112099, "democracy.NotPassed", json!({"ref_index": 23})),
        // referenda
        ev(112120, "referenda.Submitted", json!({"referendum_index": 25, "proposal_hash": "0x1234567890abcdef"})),
        ev(112121, "referenda.DecisionDepositPlaced", json!({"referendum_index": 25, "who": s, "amount": 100_000_000_000_i64})),
        ev(112122, "referenda.DecisionStarted", json!({"referendum_index": 25, "track": 0, "conviction": "Locked1x"})),
        ev(112123, "referenda.Confirmed", json!({"referendum_index": 22})),
        ev(112124, "referenda.Confirmed", json!({"referendum_index": 25})),
        // system
        ev(112130, "system.ExtrinsicSuccess", json!({"dispatch_info": {"weight": 1_000_000, "class": "Normal", "pays_fee": true}})),
        ev(112131, "system.NewAccount", json!({"account": s})),
        ev(112132, "system.Remarked", json!({"sender": s, "hash": "0xabcdef1234567890"})),
        // babe
        ev(112140, "babe.EpochStarted", json!({"epoch_index": 1150})),
        ev(112141, "babe.EpochFinalized", json!({"epoch_index": 1149})),
        ev(112142, "babe.AuthoritiesChanged", json!({})),
    ];
    build(
        s,
        ValidatorType::Good,
        "Active every session, regular voter and delegate, always online, no slashes, earns consistent rewards, participates in governance",
        events,
    )
}

pub fn neutral_validator() -> Validator {
    let s = NEUTRAL_STASH;
    let events = vec![
        ev(113012, "staking.Bonded", json!({"stash": s, "amount": 400_000_000_000_i64})),
        ev(113013, "staking.ValidatorPrefsSet", json!({"stash": s, "prefs": {"commission": 5_000_000}})),
        ev(113014, "staking.StakersElected", json!({})),
        // inconsistent sessions
        ev(113020, "session.NewSession", json!({"session_index": 225})),
        ev(113021, "imOnline.HeartbeatReceived", json!({"authority_id": s})),
        ev(113022, "imOnline.AllGood", json!({})),
        ev(113023, "session.NewSession", json!({"session_index": 226})),
        ev(113024, "imOnline.SomeOffline", json!({"authority_ids": [s]})),
        ev(113025, "session.NewSession", json!({"session_index": 227})),
        ev(113026, "imOnline.HeartbeatReceived", json!({"authority_id": s})),
        ev(113027, "imOnline.AllGood", json!({})),
        // payouts
        ev(113050, "staking.PayoutStarted", json!({"era_index": 999, "validator_stash": s, "page": 0, "next": null})),
        ev(113051, "staking.Rewarded", json!({"stash": s, "dest": "Stash", "amount": 6_723_456_789_i64})),
        ev(113052, "staking.EraPaid", json!({"era_index": 999, "validator_payout": 6_723_456_789_i64, "remainder": 127_654_321})),
        ev(113053, "staking.PayoutStarted", json!({"era_index": 1000, "validator_stash": s, "page": 0, "next": null})),
        ev(113054, "staking.Rewarded", json!({"stash": s, "dest": "Stash", "amount": 5_845_678_901_i64})),
        ev(113055, "staking.EraPaid", json!({"era_index": 1000, "validator_payout": 5_845_678_901_i64, "remainder": 154_321_099})),
        ev(113056, "staking.PayoutStarted", json!({"era_index": 1001, "validator_stash": s, "page": 0, "next": null})),
        ev(113057, "staking.Rewarded", json!({"stash": s, "dest": "Stash", "amount": 5_987_654_321_i64})),
        ev(113058, "staking.EraPaid", json!({"era_index": 1001, "validator_payout": 5_987_654_321_i64, "remainder": 123_456_789})),
        // democracy
        ev(113090, "democracy.NotPassed", json!({"referendum_index": 20})),
        ev(113091, "democracy.Cancelled", json!({"ref_index": 21})),
        ev(113092, "democracy.Voted", json!({"voter": s, "ref_index": 25, "vote": {"Standard": {"vote": "aye", "balance": 400_000_000_000_i64}}})),
        ev(113093, "democracy.Started", json!({"referendum_index": 26, "threshold": "SimpleMajority"})),
        ev(113094, "democracy.Tabled", json!({"proposal_index": 47})),
        // referenda
        ev(113130, "referenda.Rejected", json!({"referendum_index": 20})),
        ev(113131, "referenda.TimedOut", json!({"referendum_index": 21})),
        ev(113132, "referenda.Killed", json!({"referendum_index": 22})),
        // system
        ev(113140, "system.ExtrinsicSuccess", json!({"dispatch_info": {"weight": 800_000, "class": "Normal", "pays_fee": true}})),
        ev(113141, "system.ExtrinsicFailed", json!({"dispatch_error": {"module": "System", "error": "BadOrigin"}, "dispatch_info": {"weight": 500_000, "class": "Normal", "pays_fee": true}})),
        ev(113142, "system.ExtrinsicSuccess", json!({"dispatch_info": {"weight": 600_000, "class": "Normal", "pays_fee": true}})),
        // babe
        ev(113150, "babe.EpochStarted", json!({"epoch_index": 1125})),
        ev(113151, "babe.EpochFinalized", json!({"epoch_index": 1124})),
    ];
    build(
        s,
        ValidatorType::Neutral,
        "Mostly consistent session participation, rarely participates in governance, not optimal but no slashing, occasional offline periods",
        events,
    )
}

pub fn bad_validator() -> Validator {
    let s = BAD_STASH;
    let events = vec![
        ev(114000, "staking.Bonded", json!({"stash": s, "amount": 300_000_000_000_i64})),
        ev(114001, "staking.ValidatorPrefsSet", json!({"stash": s, "prefs": {"commission": 10_000_000}})),
        ev(114002, "staking.StakersElected", json!({})),
        // offline
        ev(114005, "session.NewSession", json!({"session_index": 220})),
        ev(114006, "imOnline.SomeOffline", json!({"authority_ids": [s]})),
        ev(114007, "session.NewSession", json!({"session_index": 221})),
        ev(114008, "imOnline.SomeOffline", json!({"authority_ids": [s]})),
        ev(114009, "session.NewSession", json!({"session_index": 222})),
        ev(114010, "imOnline.SomeOffline", json!({"authority_ids": [s]})),
        // offences and slashing
        ev(114011, "offences.Offence", json!({"offender": [{"who": s, "offence": "offline"}], "kind": "offline"})),
        ev(114012, "offences.Offence", json!({"offender": [{"who": s, "offence": "equivocation"}], "kind": "equivocation"})),
        ev(114013, "offences.Offence", json!({"offender": [{"who": s, "offence": "grandpa"}], "kind": "grandpa"})),
        ev(114015, "staking.Slashed", json!({"staker": s, "amount": 12_000_000_000_i64})),
        ev(114016, "staking.SlashReported", json!({"validator": s, "fraction": "Perbill(100000000)", "slash_era": 996})),
        ev(114017, "staking.SlashReported", json!({"validator": s, "fraction": "Perbill(50000000)", "slash_era": 997})),
        ev(114018, "staking.SlashReported", json!({"validator": s, "fraction": "Perbill(25000000)", "slash_era": 998})),
        // disabling
        ev(114018, "session.ValidatorDisabled", json!({"who": s})),
        ev(114019, "session.NewSession", json!({"session_index": 223})),
        ev(114020, "session.ValidatorDisabled", json!({"who": s})),
        ev(114021, "session.NewSession", json!({"session_index": 224})),
        ev(114022, "session.ValidatorDisabled", json!({"who": s})),
        // chilled and removed
        ev(114050, "staking.Chilled", json!({"stash": s})),
        ev(114051, "staking.Kicked", json!({"nominator": s, "stash": s})),
        ev(114052, "staking.Unbonded", json!({"stash": s, "amount": 300_000_000_000_i64})),
        ev(114053, "staking.Withdrawn", json!({"stash": s, "amount": 300_000_000_000_i64})),
        ev(114054, "staking.OldSlashingReportDiscarded", json!({"session_index": 225})),
        // democracy
        ev(114060, "democracy.NotPassed", json!({"referendum_index": 18})),
        ev(114061, "democracy.Cancelled", json!({"ref_index": 19})),
        ev(114062, "democracy.ExternalTabled", json!({})),
        // referenda
        ev(114070, "referenda.Rejected", json!({"referendum_index": 18})),
        ev(114071, "referenda.Killed", json!({"referendum_index": 19})),
        ev(114072, "referenda.Cancelled", json!({"referendum_index": 20})),
        // system
        ev(114070, "system.KilledAccount", json!({"account": s})),
        ev(114071, "system.ExtrinsicFailed", json!({"dispatch_error": {"module": "Staking", "error": "NotController"}, "dispatch_info": {"weight": 300_000, "class": "Normal", "pays_fee": true}})),
        ev(114072, "system.ExtrinsicFailed", json!({"dispatch_error": {"module": "System", "error": "InsufficientFunds"}, "dispatch_info": {"weight": 200_000, "class": "Normal", "pays_fee": true}})),
        // babe
        ev(114080, "babe.EpochStarted", json!({"epoch_index": 1100})),
        ev(114081, "babe.EpochFinalized", json!({"epoch_index": 1099})),
    ];
    build(
        s,
        ValidatorType::Bad,
        "Irregular session participation, never votes, slashed, disabled, eventually chilled and removed from the network",
        events,
    )
}
