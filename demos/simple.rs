//! Load a handful of words into a spell checker and test a few candidates.
use spellbloom::SpellChecker;

fn main() -> spellbloom::Result<()> {
    let words = ["bloom", "blossom", "bonus", "comfort", "genial"];
    let checker = SpellChecker::new(&words, 0.05)?;
    let filter = checker.filter();

    println!("Size of bit array: {}", filter.bits());
    println!("Number of hash functions: {}", filter.hashes());

    for word in ["bloom", "genial", "gloomy", "facebook"] {
        if checker.check(word) {
            println!("'{}' is probably present", word);
        } else {
            println!("'{}' is definitely not present", word);
        }
    }
    Ok(())
}
