#![no_main]

use libfuzzer_sys::fuzz_target;

use ballot_crypto::{leaf_hash, verify_proof, SnapshotTree};
use ballot_types::{AccountId, Hash256, Weight};

// Layout: root[32] || leaf[32] || sibling[32]*.
// Arbitrary proofs must never panic, and the empty proof verifies iff leaf == root.
fuzz_target!(|data: &[u8]| {
    if data.len() < 64 {
        return;
    }
    let mut root = [0u8; 32];
    let mut leaf = [0u8; 32];
    root.copy_from_slice(&data[..32]);
    leaf.copy_from_slice(&data[32..64]);
    let root = Hash256::new(root);
    let leaf = Hash256::new(leaf);

    let proof: Vec<Hash256> = data[64..]
        .chunks_exact(32)
        .map(|chunk| {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(chunk);
            Hash256::new(bytes)
        })
        .collect();

    let _ = verify_proof(&root, &leaf, &proof);
    assert_eq!(verify_proof(&root, &leaf, &[]), root == leaf);

    // A tree built from the same bytes must accept every member's proof.
    let roster: Vec<(AccountId, Weight)> = data
        .chunks_exact(32)
        .take(64)
        .enumerate()
        .map(|(i, chunk)| {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(chunk);
            bytes[0] = i as u8;
            (AccountId::new(bytes), Weight::new(chunk.len() as u128 + i as u128))
        })
        .collect();
    if let Ok(tree) = SnapshotTree::from_roster(&roster) {
        for (account, weight) in &roster {
            let proof = tree.proof(account).expect("member has a proof");
            assert!(verify_proof(&tree.root(), &leaf_hash(account, *weight), &proof));
        }
    }
});
