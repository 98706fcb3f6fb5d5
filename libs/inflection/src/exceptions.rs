/// A fixed list of lower-cased words, matched case-insensitively.
#[derive(Debug, Clone, Copy)]
pub struct WordSet(&'static [&'static str]);

impl WordSet {
    /// Every entry must already be lower case.
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self(words)
    }

    pub fn contains(&self, word: &str) -> bool {
        let lowered = word.to_lowercase();
        self.0.iter().any(|w| *w == lowered)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Nouns that share their singular and plural form.
pub const UNCOUNTABLE_WORDS: WordSet = WordSet::new(&[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "moose",
    "deer",
    "news",
]);

/// Articles, conjunctions and prepositions left in lower case by `titleize`.
pub const NON_TITLECASED_WORDS: WordSet = WordSet::new(&[
    "and", "or", "nor", "a", "an", "the", "so", "but", "to", "of", "at", "by", "from", "into", "on", "onto", "off",
    "out", "in", "over", "with", "for",
]);
