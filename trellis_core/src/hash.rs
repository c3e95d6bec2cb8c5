// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic hashing for render-object change detection.
//!
//! All hashes use SipHash-1-3 with zero keys, so they are stable across
//! processes and can be compared frame to frame.

use core::hash::{Hash, Hasher};

use siphasher::sip::SipHasher13;

/// Returns a fresh hasher with fixed keys, so equal inputs hash equally
/// across independently built trees and across runs.
#[inline]
#[must_use]
pub fn hasher() -> SipHasher13 {
    SipHasher13::new_with_keys(0, 0)
}

/// Hashes a single value with [`hasher`].
#[inline]
#[must_use]
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut h = hasher();
    value.hash(&mut h);
    h.finish()
}

/// Folds a child hash into a running parent hash.
#[inline]
#[must_use]
pub fn fold(acc: u64, child: u64) -> u64 {
    let mut h = hasher();
    h.write_u64(acc);
    h.write_u64(child);
    h.finish()
}
