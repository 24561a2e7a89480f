//! A spell checker backed by a Bloom filter, a space-efficient probabilistic
//! data structure.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives. It has been shown that
//! fewer than 10 bits per element are required for a 1% false positive
//! probability, independent of the size or number of elements in the set.
//!
//! Filters are sized from the number of items expected to be inserted, `n`,
//! and a target false positive probability, `p`:
//!
//! m = ⌈-n ln p / (ln 2)<sup>2</sup>⌉ bits, and k = round(m/n · ln 2) probes.
//!
//! # Enhanced Double Hashing
//!
//! Enhanced double hashing is used to set bit positions within a bit vector.
//! The choice for double hashing was shown to be effective without any loss in
//! the asymptotic false positive probability, leading to less computation and
//! potentially less need for randomness in practice, by Adam Kirsch and
//! Michael Mitzenmacher in a paper called *Less Hashing, Same Performance: Building
//! a Better Bloom Filter*.
//!
//! The enhanced double hash takes the form of the following formula:
//!
//! g<sub>i</sub>(x) = (H<sub>1</sub>(x) + iH<sub>2</sub>(x) + f(i)) mod m, where
//! H<sub>1</sub> and H<sub>2</sub> are SipHash instantiations, and f(i) = i<sup>3</sup>
//!
//! # Example
//!
//! ```
//! use spellbloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(32, 0.01).unwrap();
//!
//! filter.insert("foo");
//! filter.insert("bar");
//!
//! assert!(filter.query("foo"));
//! assert!(filter.query("bar"));
//! filter.query("baz"); // most likely false
//!
//! assert!(BloomFilter::new(0, 0.01).is_err());
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitvec;
pub mod bloom;
pub mod checker;
pub mod dictionary;
pub mod error;
pub mod hash;
pub mod sync;

pub use bloom::BloomFilter;
pub use checker::SpellChecker;
pub use error::{Error, Result};
pub use hash::HashFamily;
pub use sync::AtomicBloomFilter;
