//! # BPE tokenizer
//!
//! A toy byte pair merge tokenizer with a fixed single-character vocabulary and a short list of
//! English bigram merges. It illustrates how GPT-style tokenization groups characters; it is not
//! token-accurate and the footprint estimator does not use it (estimation relies on a flat
//! characters-per-token heuristic).
//!
//! ## Behavior
//!
//! 1. Split the text into grapheme clusters (a CRLF pair or a base letter with combining marks is
//!    one piece).
//! 2. Apply each merge in list order, scanning left to right.
//! 3. Map each piece to its vocabulary id. Pieces missing from the vocabulary (every merged
//!    bigram, and any character outside printable ASCII plus `\n`, `\t`, `\r`) are dropped.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

/// Vocabulary in id order: id `n` is the `n`-th character of this string.
const VOCABULARY: &str = concat!(
    " ",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    "\n\t\r",
);

const MERGES: [(&str, &str); 46] = [
    ("t", "h"),
    ("e", "r"),
    ("i", "n"),
    ("a", "n"),
    ("r", "e"),
    ("o", "n"),
    ("a", "t"),
    ("e", "n"),
    ("n", "d"),
    ("t", "i"),
    ("e", "s"),
    ("o", "r"),
    ("a", "s"),
    ("i", "s"),
    ("i", "t"),
    ("a", "r"),
    ("a", "l"),
    ("e", "d"),
    ("n", "t"),
    ("i", "c"),
    ("a", "i"),
    ("l", "y"),
    ("c", "e"),
    ("c", "o"),
    ("d", "e"),
    ("i", "o"),
    ("l", "e"),
    ("m", "e"),
    ("o", "f"),
    ("o", "p"),
    ("p", "e"),
    ("r", "o"),
    ("s", "e"),
    ("s", "i"),
    ("s", "t"),
    ("t", "e"),
    ("t", "o"),
    ("u", "r"),
    ("v", "e"),
    ("w", "a"),
    ("w", "e"),
    ("w", "i"),
    ("y", "o"),
    ("y", "u"),
    ("z", "e"),
    ("z", "i"),
];

/// Character-level BPE tokenizer with a built-in vocabulary.
#[derive(Debug, Clone)]
pub struct BpeTokenizer {
    vocabulary: HashMap<String, u32>,
    merges: Vec<(String, String)>,
}

impl Default for BpeTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl BpeTokenizer {
    /// Builds the tokenizer from the built-in vocabulary and merge list.
    pub fn new() -> Self {
        let vocabulary = VOCABULARY
            .chars()
            .zip(0u32..)
            .map(|(c, id)| (c.to_string(), id))
            .collect();
        let merges = MERGES
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect();
        Self { vocabulary, merges }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn merge_count(&self) -> usize {
        self.merges.len()
    }

    /// Splits and merges `text` without mapping to ids.
    pub fn pieces(&self, text: &str) -> Vec<String> {
        let mut pieces: Vec<String> = text.graphemes(true).map(String::from).collect();
        for (first, second) in &self.merges {
            let mut i = 0;
            while i + 1 < pieces.len() {
                if pieces[i] == *first && pieces[i + 1] == *second {
                    let merged = pieces.remove(i + 1);
                    pieces[i].push_str(&merged);
                } else {
                    i += 1;
                }
            }
        }
        pieces
    }

    /// Token ids for `text`; pieces outside the vocabulary are skipped.
    pub fn tokenize(&self, text: &str) -> Vec<u32> {
        self.pieces(text)
            .iter()
            .filter_map(|piece| self.vocabulary.get(piece).copied())
            .collect()
    }

    pub fn count_tokens(&self, text: &str) -> usize {
        self.tokenize(text).len()
    }
}
