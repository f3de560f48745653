use rand::Rng;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// The candidate set the target word is drawn from.
///
/// Immutable after construction and never empty: `from_text`/`from_file`
/// reject inputs with no usable words, so `random_word` cannot fail.
#[derive(Clone, Debug)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// The built-in ten-word bank.
    pub fn embedded() -> Self {
        Self::from_text(EMBEDDED_WORDBANK).expect("embedded word bank is non-empty")
    }

    /// Parse a newline-delimited word list. Lines are trimmed and uppercased;
    /// anything that is not a 5-letter alphabetic word is skipped.
    pub fn from_text(data: &str) -> io::Result<Self> {
        let words: Vec<String> = data
            .lines()
            .map(|line| line.trim().to_uppercase())
            .filter(|word| word.len() == 5 && word.chars().all(|c| c.is_ascii_alphabetic()))
            .collect();
        Self::from_words(words)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut words = Vec::new();
        for line in reader.lines() {
            let word = line?.trim().to_uppercase();
            if word.len() == 5 && word.chars().all(|c| c.is_ascii_alphabetic()) {
                words.push(word);
            }
        }
        Self::from_words(words)
    }

    fn from_words(words: Vec<String>) -> io::Result<Self> {
        if words.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "word bank contains no valid 5-letter words",
            ));
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Uniformly random member of the bank.
    pub fn random_word(&self) -> &str {
        self.random_word_with(&mut rand::thread_rng())
    }

    pub fn random_word_with<R: Rng>(&self, rng: &mut R) -> &str {
        // Safe to index: construction guarantees at least one word.
        &self.words[rng.gen_range(0..self.words.len())]
    }
}
