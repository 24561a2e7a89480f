//! A spell checker that tests words against a dictionary loaded into a Bloom filter.
//!
//! A "correct" verdict may be a false positive, at a rate bounded by the
//! probability the checker was built with. An "incorrect" verdict is always right.
use std::io::{BufRead, Write};
use std::path::Path;

use crate::bloom::BloomFilter;
use crate::dictionary;
use crate::error::{Error, Result};

/// Prompt shown before each word in interactive mode.
pub const PROMPT: &str = "Type the word to check its existence or press CTRL+D to exit: ";

/// Default false positive probability used by the spell checker, 5%.
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.05;

/// Outcome of a check loop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Words checked. Empty lines aren't counted.
    pub checked: usize,
    /// Words reported as probably present.
    pub present: usize,
}

impl Summary {
    /// Words reported as definitely absent.
    pub fn absent(&self) -> usize {
        self.checked - self.present
    }
}

/// Checks words against a dictionary.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    filter: BloomFilter,
}

impl SpellChecker {
    /// Build a checker holding every word of `words`, with the given false positive rate.
    pub fn new<S: AsRef<[u8]>>(words: &[S], fp_rate: f64) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::EmptyDictionary);
        }
        let mut filter = BloomFilter::new(words.len(), fp_rate)?;

        for word in words {
            filter.insert(word);
        }
        tracing::info!(
            words = words.len(),
            bits = filter.bits(),
            hashes = filter.hashes(),
            fp_rate,
            "dictionary loaded into filter"
        );

        Ok(Self { filter })
    }

    /// Build a checker from a word list file, one word per line.
    pub fn from_path<P: AsRef<Path>>(path: P, fp_rate: f64) -> Result<Self> {
        let words = dictionary::load(path)?;

        Self::new(&words, fp_rate)
    }

    /// Check whether `word` is probably in the dictionary.
    pub fn check(&self, word: &str) -> bool {
        self.filter.query(word)
    }

    /// The filter backing this checker.
    pub fn filter(&self) -> &BloomFilter {
        &self.filter
    }

    /// Check every line of `input` as a word, writing a verdict for each to `output`,
    /// until `input` is exhausted.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        mut output: W,
        prompt: bool,
    ) -> Result<Summary> {
        let mut summary = Summary::default();
        let mut lines = input.lines();

        loop {
            if prompt {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
            }
            let word = match lines.next() {
                Some(line) => line?,
                None => break,
            };

            if word.is_empty() {
                writeln!(output, "Please, type a word to check!")?;
                continue;
            }
            let present = self.check(&word);

            summary.checked += 1;
            if present {
                summary.present += 1;
                writeln!(output, "The word '{}' probably exists in the dictionary!", word)?;
            } else {
                writeln!(
                    output,
                    "The word '{}' probably DOES NOT exist in the dictionary!",
                    word
                )?;
            }
            if prompt {
                writeln!(output)?;
            }
            tracing::debug!(word = %word, present, "checked word");
        }
        if prompt {
            writeln!(output, "\nExiting...")?;
        }
        output.flush()?;

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write as _};

    const PRESENT: &[&str] = &[
        "abound", "abounds", "abundance", "abundant", "accessible", "bloom", "blossom",
        "bolster", "bonny", "bonus", "bonuses", "coherent", "cohesive", "colorful", "comely",
        "comfort", "gems", "generosity", "generous", "generously", "genial",
    ];

    fn output(checker: &SpellChecker, input: &str, prompt: bool) -> (Summary, String) {
        let mut out = Vec::new();
        let summary = checker.run(Cursor::new(input), &mut out, prompt).unwrap();

        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_check() {
        let checker = SpellChecker::new(PRESENT, 0.05).unwrap();

        for word in PRESENT {
            assert!(checker.check(word), "word {} resulted in a false negative", word);
        }
        assert_eq!(checker.filter().false_positive_rate(), 0.05);
    }

    #[test]
    fn test_empty_dictionary() {
        let words: &[&str] = &[];

        assert!(matches!(
            SpellChecker::new(words, 0.05),
            Err(Error::EmptyDictionary)
        ));
    }

    #[test]
    fn test_invalid_rate() {
        assert!(matches!(
            SpellChecker::new(PRESENT, 1.),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_run_batch() {
        let checker = SpellChecker::new(PRESENT, 0.01).unwrap();
        let (summary, out) = output(&checker, "bloom\n\ngenial\r\n", false);

        assert_eq!(
            out,
            "The word 'bloom' probably exists in the dictionary!\n\
             Please, type a word to check!\n\
             The word 'genial' probably exists in the dictionary!\n"
        );
        assert_eq!(summary, Summary { checked: 2, present: 2 });
        assert_eq!(summary.absent(), 0);
    }

    #[test]
    fn test_run_reports_absent() {
        let checker = SpellChecker::new(PRESENT, 0.01).unwrap();
        let words: Vec<_> = (0..100).map(|i| format!("absent-{}", i)).collect();
        let (summary, out) = output(&checker, &words.join("\n"), false);

        assert_eq!(summary.checked, 100);
        assert!(summary.absent() >= 90, "only {} words rejected", summary.absent());
        assert!(out.contains("probably DOES NOT exist"));
    }

    #[test]
    fn test_run_interactive() {
        let checker = SpellChecker::new(PRESENT, 0.05).unwrap();
        let (summary, out) = output(&checker, "gems\n", true);

        assert_eq!(
            out,
            format!(
                "{p}The word 'gems' probably exists in the dictionary!\n\n{p}\nExiting...\n",
                p = PROMPT
            )
        );
        assert_eq!(summary.checked, 1);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for word in PRESENT {
            writeln!(file, "{}", word).unwrap();
        }
        let checker = SpellChecker::from_path(file.path(), DEFAULT_FALSE_POSITIVE_RATE).unwrap();

        assert!(PRESENT.iter().all(|w| checker.check(w)));
        assert!(matches!(
            SpellChecker::from_path(file.path().with_extension("nope"), 0.05),
            Err(Error::Io(_))
        ));
    }
}
