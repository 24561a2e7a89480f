// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A Bloom filter sized from an expected item count and a target false positive rate.

use std::f64;

use crate::bitvec::BitVec;
use crate::error::{Error, Result};
use crate::hash::HashFamily;

/// `ln 2` squared.
const LN_SQR: f64 = f64::consts::LN_2 * f64::consts::LN_2;

/// Largest bit array that can be addressed. Smaller arrays may still fail to allocate.
const MAX_BITS: usize = isize::MAX as usize;

/// A Bloom filter over byte strings.
///
/// The filter is sized once, at construction, and never grows. Items can be
/// inserted but never removed.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    bits: BitVec,
    nhashes: usize,
    fp_rate: f64,
    family: HashFamily,
}

impl BloomFilter {
    /// Return a new Bloom filter for approximately `capacity` items, with a
    /// false positive probability of `fp_rate` once that many items are inserted.
    ///
    /// Fails with [`Error::InvalidParameter`] if `capacity` is zero or `fp_rate`
    /// is not strictly between `0` and `1`.
    pub fn new(capacity: usize, fp_rate: f64) -> Result<Self> {
        Self::with_hash_family(capacity, fp_rate, HashFamily::default())
    }

    /// Like [`BloomFilter::new`], but probing with the given hash family.
    pub fn with_hash_family(capacity: usize, fp_rate: f64, family: HashFamily) -> Result<Self> {
        let (nbits, nhashes) = sizing(capacity, fp_rate)?;
        let bits = BitVec::try_new(nbits).map_err(|_| Error::TooLarge { bits: nbits as f64 })?;

        tracing::debug!(
            capacity,
            fp_rate,
            bits = nbits,
            hashes = nhashes,
            "sized bloom filter"
        );

        Ok(Self {
            bits,
            nhashes,
            fp_rate,
            family,
        })
    }

    pub(crate) fn from_parts(
        bits: BitVec,
        nhashes: usize,
        fp_rate: f64,
        family: HashFamily,
    ) -> Self {
        Self {
            bits,
            nhashes,
            fp_rate,
            family,
        }
    }

    /// Set an item in the Bloom filter. This operation is idempotent with regards
    /// to each unique item.
    pub fn insert<T: AsRef<[u8]> + ?Sized>(&mut self, item: &T) {
        let nbits = self.bits.len();

        for index in self.family.positions(item.as_ref(), self.nhashes, nbits) {
            self.bits.set(index);
        }
    }

    /// Return whether or not a given item is likely in the Bloom filter or not. There is a
    /// possibility for a false positive with the probability being under the Bloom filter's `p`
    /// value, but a false negative will never occur.
    pub fn query<T: AsRef<[u8]> + ?Sized>(&self, item: &T) -> bool {
        self.family
            .positions(item.as_ref(), self.nhashes, self.bits.len())
            .all(|index| self.bits.is_set(index))
    }

    /// Return the number of bits in this filter (`m` parameter).
    pub fn bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of hashes used (`k` parameter).
    pub fn hashes(&self) -> usize {
        self.nhashes
    }

    /// The false positive rate this filter was sized for (`p` parameter).
    pub fn false_positive_rate(&self) -> f64 {
        self.fp_rate
    }

    /// Count the approximate number of items in the filter.
    ///
    /// Saturates once every bit is set.
    pub fn count(&self) -> usize {
        let nbits = self.bits.len() as f64;
        let nbits_set = self.bits.count_ones() as f64;
        let nhashes = self.nhashes as f64;
        let count = -(nbits / nhashes) * (1. - (nbits_set / nbits)).ln();

        count.round() as usize
    }

    /// Estimate the current false positive rate from the fraction of bits set.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        let fill = self.bits.count_ones() as f64 / self.bits.len() as f64;

        fill.powi(self.nhashes as i32)
    }

    /// Return the underlying bit array as packed words.
    pub fn as_words(&self) -> &[u64] {
        self.bits.as_words()
    }
}

impl PartialEq for BloomFilter {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
            && self.nhashes == other.nhashes
            && self.family.is_compatible(&other.family)
    }
}

impl Eq for BloomFilter {}

/// Validate the parameters and return the `(m, k)` pair for a filter.
pub(crate) fn sizing(capacity: usize, fp_rate: f64) -> Result<(usize, usize)> {
    if capacity == 0 {
        return Err(Error::InvalidParameter {
            name: "capacity",
            reason: String::from("must be at least 1"),
        });
    }
    if !(fp_rate > 0. && fp_rate < 1.) {
        return Err(Error::InvalidParameter {
            name: "fp_rate",
            reason: format!("{} is not strictly between 0 and 1", fp_rate),
        });
    }
    let nbits = ideal_bits(capacity, fp_rate);
    if !nbits.is_finite() || nbits > MAX_BITS as f64 {
        return Err(Error::TooLarge { bits: nbits });
    }
    let nbits = (nbits as usize).max(1);

    Ok((nbits, optimal_hashes(nbits, capacity)))
}

fn ideal_bits(capacity: usize, fp_rate: f64) -> f64 {
    (-((fp_rate.ln() * (capacity as f64)) / LN_SQR)).ceil()
}

/// Return the optimal bit vector size for a Bloom filter given an approximate
/// size and a desired false positive rate.
pub fn optimal_bits(capacity: usize, fp_rate: f64) -> usize {
    ideal_bits(capacity, fp_rate) as usize
}

/// Return the optimal number of hash functions for a Bloom filter given a
/// bit vector size and an approximate set size. Never less than one.
///
/// Also called `k`.
pub fn optimal_hashes(nbits: usize, capacity: usize) -> usize {
    let k = ((nbits as f64 / capacity as f64) * f64::consts::LN_2).round() as usize;
    k.max(1)
}
