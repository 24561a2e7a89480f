// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Index derivation using enhanced double hashing.
//!
//! Two keyed SipHash-1-3 instances are run over the element's bytes, and the
//! `i`-th probe is computed as `(h1 + i * h2 + i^3) mod m`. The cubic term
//! keeps probes apart even when `h2` happens to be a multiple of `m`.
use std::hash::Hasher;
use std::iter::FusedIterator;

use siphasher::sip::SipHasher13;

/// Keys used for SipHash.
pub const DEFAULT_KEYS: [[u8; 16]; 2] = [
    [
        136, 168, 28, 251, 141, 239, 69, 38, 166, 209, 98, 201, 2, 169, 146, 170,
    ],
    [
        103, 236, 177, 212, 54, 11, 66, 5, 194, 86, 6, 254, 82, 93, 203, 37,
    ],
];

/// A family of `k` index functions derived from two base hashes.
#[derive(Clone, Copy, Debug)]
pub struct HashFamily {
    hashers: [SipHasher13; 2],
}

impl HashFamily {
    /// Create a hash family from two SipHash keys. The keys must differ, otherwise
    /// both base hashes are equal and the family degrades to single hashing.
    pub fn with_keys(keys: [[u8; 16]; 2]) -> Self {
        Self {
            hashers: [
                SipHasher13::new_with_key(&keys[0]),
                SipHasher13::new_with_key(&keys[1]),
            ],
        }
    }

    /// Return the `k` positions in `[0, m)` of `element`.
    ///
    /// Panics if `m` is zero.
    pub fn positions(&self, element: &[u8], k: usize, m: usize) -> Positions {
        assert!(m > 0, "positions requires a non-empty range");

        let (h1, h2) = self.base_hashes(element);

        Positions {
            h1,
            h2,
            i: 0,
            k: k as u64,
            m: m as u64,
        }
    }

    /// Check whether two families produce the same positions.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.hashers[0].keys() == other.hashers[0].keys()
            && self.hashers[1].keys() == other.hashers[1].keys()
    }

    fn base_hashes(&self, element: &[u8]) -> (u64, u64) {
        let mut sip1 = self.hashers[0];
        let mut sip2 = self.hashers[1];

        sip1.write(element);
        sip2.write(element);

        (sip1.finish(), sip2.finish())
    }
}

impl Default for HashFamily {
    fn default() -> Self {
        Self::with_keys(DEFAULT_KEYS)
    }
}

/// Iterator over the probe positions of one element.
#[derive(Clone, Debug)]
pub struct Positions {
    h1: u64,
    h2: u64,
    i: u64,
    k: u64,
    m: u64,
}

impl Iterator for Positions {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.i >= self.k {
            return None;
        }
        let i = self.i;
        let r = self
            .h1
            .wrapping_add(i.wrapping_mul(self.h2))
            .wrapping_add(i.wrapping_pow(3));

        self.i += 1;

        Some((r % self.m) as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.k - self.i) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}

impl FusedIterator for Positions {}
