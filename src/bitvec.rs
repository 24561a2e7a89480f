// Copyright (c) 2020 Helge Wrede, Alexander Schultheiß, Lukas Simon
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Bit vector functionality.
use std::collections::TryReserveError;
use std::fmt::Debug;

/// Number of bits stored in each word.
pub(crate) const WORD_BITS: usize = u64::BITS as usize;

/// Return the number of words needed to hold `nbits` bits.
pub(crate) fn words_for(nbits: usize) -> usize {
    if nbits % WORD_BITS == 0 {
        nbits / WORD_BITS
    } else {
        1 + nbits / WORD_BITS
    }
}

/// Return the word index and the mask selecting bit `index` within that word.
#[inline]
pub(crate) fn locate(index: usize) -> (usize, u64) {
    (index / WORD_BITS, 1 << (index % WORD_BITS))
}

/// A packed, grow-only bit vector.
///
/// Bits can be set but never cleared.
#[derive(Clone, PartialEq, Eq)]
pub struct BitVec {
    words: Vec<u64>,
    nbits: usize,
}

impl BitVec {
    /// Create a new bit vector of the given capacity, in bits. All bits start at zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            nbits: capacity,
            words: vec![0; words_for(capacity)],
        }
    }

    /// Like [`BitVec::new`], but fails instead of aborting when the words can't be allocated.
    pub fn try_new(capacity: usize) -> Result<Self, TryReserveError> {
        let nwords = words_for(capacity);
        let mut words = Vec::new();

        words.try_reserve_exact(nwords)?;
        words.resize(nwords, 0);

        Ok(Self {
            nbits: capacity,
            words,
        })
    }

    /// Build a bit vector of `nbits` bits from its packed words.
    ///
    /// Panics if the number of words doesn't match `nbits`.
    pub(crate) fn from_words(words: Vec<u64>, nbits: usize) -> Self {
        assert_eq!(
            words.len(),
            words_for(nbits),
            "word count does not match a length of {} bits",
            nbits
        );
        Self { words, nbits }
    }

    /// Get the length in bits of the vector.
    pub fn len(&self) -> usize {
        self.nbits
    }

    /// Check whether this vector is empty, ie. has a length of zero.
    pub fn is_empty(&self) -> bool {
        self.nbits == 0
    }

    /// Set a single bit to `1`. Returns `true` if the bit was previously unset.
    pub fn set(&mut self, index: usize) -> bool {
        self.check_bounds(index);

        let (word, mask) = locate(index);
        let was_unset = self.words[word] & mask == 0;
        self.words[word] |= mask;

        was_unset
    }

    /// Check whether a bit is set.
    pub fn is_set(&self, index: usize) -> bool {
        self.check_bounds(index);

        let (word, mask) = locate(index);
        self.words[word] & mask == mask
    }

    /// Count the number of `1` bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Count the number of `0` bits.
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// Return the packed words. Bit `i` lives in word `i / 64`, at bit `i % 64`.
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    fn check_bounds(&self, index: usize) {
        if index >= self.len() {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index,
            )
        }
    }
}

impl Debug for BitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = (0..self.nbits)
            .map(|i| if self.is_set(i) { '1' } else { '0' })
            .collect();
        write!(f, "BitVec({})", bits)
    }
}
