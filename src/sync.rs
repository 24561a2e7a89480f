//! A Bloom filter that can be filled from several threads at once.
//!
//! Bits only ever go from `0` to `1`, so concurrent inserts are a plain
//! `fetch_or` on the containing word and need no lock. A query racing an
//! insert of the same item may miss it; once every insert has returned, the
//! filter answers exactly like a [`BloomFilter`] built sequentially.
use std::sync::atomic::{AtomicU64, Ordering};

use crate::bitvec::{locate, words_for, BitVec};
use crate::bloom::{sizing, BloomFilter};
use crate::error::{Error, Result};
use crate::hash::HashFamily;

/// A Bloom filter backed by atomic words.
#[derive(Debug)]
pub struct AtomicBloomFilter {
    words: Box<[AtomicU64]>,
    nbits: usize,
    nhashes: usize,
    fp_rate: f64,
    family: HashFamily,
}

impl AtomicBloomFilter {
    /// Return a new filter sized the same way as [`BloomFilter::new`].
    pub fn new(capacity: usize, fp_rate: f64) -> Result<Self> {
        Self::with_hash_family(capacity, fp_rate, HashFamily::default())
    }

    /// Like [`AtomicBloomFilter::new`], but probing with the given hash family.
    pub fn with_hash_family(capacity: usize, fp_rate: f64, family: HashFamily) -> Result<Self> {
        let (nbits, nhashes) = sizing(capacity, fp_rate)?;
        let nwords = words_for(nbits);
        let mut words = Vec::new();

        words
            .try_reserve_exact(nwords)
            .map_err(|_| Error::TooLarge { bits: nbits as f64 })?;
        words.extend((0..nwords).map(|_| AtomicU64::new(0)));

        tracing::debug!(
            capacity,
            fp_rate,
            bits = nbits,
            hashes = nhashes,
            "sized atomic bloom filter"
        );

        Ok(Self {
            words: words.into_boxed_slice(),
            nbits,
            nhashes,
            fp_rate,
            family,
        })
    }

    /// Set an item in the filter. Safe to call from many threads.
    pub fn insert<T: AsRef<[u8]> + ?Sized>(&self, item: &T) {
        for index in self.family.positions(item.as_ref(), self.nhashes, self.nbits) {
            let (word, mask) = locate(index);
            self.words[word].fetch_or(mask, Ordering::Relaxed);
        }
    }

    /// Return whether an item is likely in the filter.
    pub fn query<T: AsRef<[u8]> + ?Sized>(&self, item: &T) -> bool {
        self.family
            .positions(item.as_ref(), self.nhashes, self.nbits)
            .all(|index| {
                let (word, mask) = locate(index);
                self.words[word].load(Ordering::Relaxed) & mask == mask
            })
    }

    /// Return the number of bits in this filter.
    pub fn bits(&self) -> usize {
        self.nbits
    }

    /// Number of hashes used.
    pub fn hashes(&self) -> usize {
        self.nhashes
    }

    /// Freeze the filter into a plain [`BloomFilter`] with the same bits.
    pub fn into_filter(self) -> BloomFilter {
        let words = self
            .words
            .into_vec()
            .into_iter()
            .map(AtomicU64::into_inner)
            .collect();

        BloomFilter::from_parts(
            BitVec::from_words(words, self.nbits),
            self.nhashes,
            self.fp_rate,
            self.family,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("word-{}", i)).collect()
    }

    #[test]
    fn test_concurrent_insert() {
        let items = words(4000);
        let filter = AtomicBloomFilter::new(items.len(), 0.01).unwrap();

        thread::scope(|s| {
            for chunk in items.chunks(500) {
                let filter = &filter;
                s.spawn(move || {
                    for item in chunk {
                        filter.insert(item);
                    }
                });
            }
        });

        for item in &items {
            assert!(filter.query(item), "item {} resulted in a false negative", item);
        }
    }

    #[test]
    fn test_matches_sequential_filter() {
        let items = words(1000);
        let atomic = AtomicBloomFilter::new(items.len(), 0.02).unwrap();
        let mut plain = BloomFilter::new(items.len(), 0.02).unwrap();

        assert_eq!(atomic.bits(), plain.bits());
        assert_eq!(atomic.hashes(), plain.hashes());

        thread::scope(|s| {
            let (left, right) = items.split_at(items.len() / 2);
            let atomic = &atomic;
            s.spawn(move || left.iter().for_each(|i| atomic.insert(i)));
            s.spawn(move || right.iter().rev().for_each(|i| atomic.insert(i)));
        });
        for item in &items {
            plain.insert(item);
        }
        let frozen = atomic.into_filter();

        assert_eq!(frozen, plain);
        assert_eq!(frozen.false_positive_rate(), 0.02);
        assert!(items.iter().all(|i| frozen.query(i)));
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            AtomicBloomFilter::new(0, 0.1),
            Err(Error::InvalidParameter { .. })
        ));
        assert!(matches!(
            AtomicBloomFilter::new(10, 1.),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_too_large_to_allocate() {
        assert!(matches!(
            AtomicBloomFilter::new(1 << 55, 0.01),
            Err(Error::TooLarge { .. })
        ));
    }
}
