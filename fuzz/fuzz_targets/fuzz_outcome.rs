#![no_main]

use libfuzzer_sys::fuzz_target;

use ballot_governance::{derive_state, ProposalRecord, ProposalState};
use ballot_types::{Timestamp, Weight};

fn u128_at(data: &[u8], at: usize) -> u128 {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&data[at..at + 16]);
    u128::from_le_bytes(bytes)
}

fn u64_at(data: &[u8], at: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[at..at + 8]);
    u64::from_le_bytes(bytes)
}

// Layout: now[8] || quorum[16] || record bytes.
// Outcome derivation over any decodable record must respect the state ordering.
fuzz_target!(|data: &[u8]| {
    if data.len() < 24 {
        return;
    }
    let now = Timestamp::new(u64_at(data, 0));
    let quorum = Weight::new(u128_at(data, 8));
    let Ok(record) = ProposalRecord::decode(&data[24..]) else {
        return;
    };

    let state = derive_state(Some(&record), now, quorum);
    if record.voting_closes_at.is_epoch() {
        assert_eq!(state, ProposalState::None);
        return;
    }
    if record.is_open(now) {
        assert_eq!(state, ProposalState::Active);
        return;
    }
    match state {
        ProposalState::Succeeded => {
            assert!(record.snapshot_bound);
            assert!(!record.queued && !record.executed);
            assert!(record.tally.for_votes > record.tally.against_votes);
            assert!(quorum.is_zero() || record.tally.total() >= quorum);
        }
        ProposalState::Executed => assert!(record.executed),
        ProposalState::Queued => assert!(record.queued && !record.executed),
        ProposalState::Defeated => assert!(!record.queued && !record.executed),
        ProposalState::None | ProposalState::Active => panic!("closed record derived {state}"),
    }
});
