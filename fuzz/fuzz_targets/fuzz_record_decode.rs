#![no_main]

use libfuzzer_sys::fuzz_target;

use ballot_governance::ProposalRecord;

// Decoding arbitrary bytes as a stored proposal record must never panic,
// and any record that does decode must re-encode to a decodable form.
fuzz_target!(|data: &[u8]| {
    if let Ok(record) = ProposalRecord::decode(data) {
        let encoded = record.encode().expect("decoded record re-encodes");
        let again = ProposalRecord::decode(&encoded).expect("re-encoded record decodes");
        assert_eq!(again, record);
    }
});
