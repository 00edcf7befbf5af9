//! Blake2b-256 digests.
//!
//! Every digest in the governor is Blake2b with a 32-byte output. Domain
//! tags are hashed as a plain prefix: `tagged_hash(t, [a, b])` equals
//! `blake2b_256(t || a || b)`.

use ballot_types::Hash256;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;

fn finish(hasher: Blake2b256) -> Hash256 {
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    Hash256::new(output)
}

pub fn blake2b_256(data: &[u8]) -> Hash256 {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    finish(hasher)
}

/// Hash several slices as if concatenated, without allocating.
pub fn blake2b_256_multi(parts: &[&[u8]]) -> Hash256 {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    finish(hasher)
}

/// Hash `parts` under a domain tag.
pub fn tagged_hash(tag: &[u8], parts: &[&[u8]]) -> Hash256 {
    let mut hasher = Blake2b256::new();
    hasher.update(tag);
    for part in parts {
        hasher.update(part);
    }
    finish(hasher)
}
