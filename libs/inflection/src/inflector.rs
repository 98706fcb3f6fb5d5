use crate::{
    FirstLetter, RuleTable, UNCOUNTABLE_WORDS, WordSet,
    case::{camelize, decapitalize, underscore},
};

/// Singular/plural conversion over a pair of rule tables, plus the
/// transforms composed from it.
///
/// An `Inflector` is immutable once built and can be shared between threads.
#[derive(Debug)]
pub struct Inflector {
    plurals: RuleTable,
    singulars: RuleTable,
    uncountables: WordSet,
}

impl Default for Inflector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflector {
    pub fn new() -> Self {
        Self::with_tables(RuleTable::plurals(), RuleTable::singulars(), UNCOUNTABLE_WORDS)
    }

    pub fn with_tables(plurals: RuleTable, singulars: RuleTable, uncountables: WordSet) -> Self {
        Self {
            plurals,
            singulars,
            uncountables,
        }
    }

    pub fn plurals(&self) -> &RuleTable {
        &self.plurals
    }

    pub fn singulars(&self) -> &RuleTable {
        &self.singulars
    }

    pub fn uncountables(&self) -> WordSet {
        self.uncountables
    }

    /// Plural form of a singular noun.
    ///
    /// ```
    /// let inflector = inflection::default();
    ///
    /// assert_eq!(inflector.pluralize("person"), "people");
    /// assert_eq!(inflector.pluralize("Hat"), "Hats");
    /// assert_eq!(inflector.pluralize("sheep"), "sheep");
    /// ```
    pub fn pluralize(&self, word: &str) -> String {
        self.pluralize_with_override(word, None)
    }

    /// Like [`Inflector::pluralize`], but returns `plural` verbatim when one
    /// is given.
    pub fn pluralize_with_override(&self, word: &str, plural: Option<&str>) -> String {
        apply_rules(word, &self.plurals, self.uncountables, plural)
    }

    /// Singular form of a plural noun.
    ///
    /// ```
    /// let inflector = inflection::default();
    ///
    /// assert_eq!(inflector.singularize("people"), "person");
    /// assert_eq!(inflector.singularize("octopi"), "octopus");
    /// ```
    pub fn singularize(&self, word: &str) -> String {
        self.singularize_with_override(word, None)
    }

    pub fn singularize_with_override(&self, word: &str, singular: Option<&str>) -> String {
        apply_rules(word, &self.singulars, self.uncountables, singular)
    }

    /// Underscored plural form of a class name.
    pub fn tableize(&self, word: &str) -> String {
        self.pluralize(&underscore(word))
    }

    /// Camel cased singular form of a table name.
    pub fn classify(&self, word: &str) -> String {
        self.singularize(&camelize(word, FirstLetter::Upper))
    }

    /// Collection holding documents of the given type: the plural of the type
    /// name with its first letter lowered.
    pub fn collection_name(&self, type_name: &str) -> String {
        decapitalize(&self.pluralize(type_name))
    }
}

fn apply_rules(word: &str, rules: &RuleTable, uncountables: WordSet, override_with: Option<&str>) -> String {
    if let Some(replacement) = override_with {
        tracing::trace!(word, replacement, "inflection overridden");
        return replacement.to_owned();
    }

    if uncountables.contains(word) {
        tracing::trace!(word, "uncountable word left as is");
        return word.to_owned();
    }

    match rules.find(word) {
        Some(rule) => {
            tracing::trace!(word, rule = rule.pattern(), "applying inflection rule");
            rule.apply(word).unwrap_or_else(|| word.to_owned())
        }
        None => {
            tracing::trace!(word, "no inflection rule matched");
            word.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_everything() {
        let inflector = Inflector::new();

        assert_eq!(inflector.pluralize_with_override("cow", Some("cows")), "cows");
        assert_eq!(inflector.pluralize_with_override("person", Some("guys")), "guys");
        assert_eq!(inflector.pluralize_with_override("sheep", Some("sheeps")), "sheeps");
        assert_eq!(inflector.singularize_with_override("guys", Some("person")), "person");
    }

    #[test]
    fn uncountables_are_checked_before_rules() {
        let inflector = Inflector::new();

        assert_eq!(inflector.pluralize("Moose"), "Moose");
        assert_eq!(inflector.singularize("series"), "series");
    }

    #[test]
    fn words_without_a_matching_singular_rule_are_unchanged() {
        let inflector = Inflector::new();

        assert_eq!(inflector.singularize("cow"), "cow");
        assert_eq!(inflector.singularize(""), "");
    }

    #[test]
    fn custom_tables() {
        let plurals = RuleTable::new(&[("(g)oose$", "${1}eese"), ("$", "s")]).unwrap();
        let singulars = RuleTable::new(&[("(g)eese$", "${1}oose"), ("s$", "")]).unwrap();
        let inflector = Inflector::with_tables(plurals, singulars, WordSet::new(&["aircraft"]));

        assert_eq!(inflector.pluralize("Goose"), "Geese");
        assert_eq!(inflector.singularize("geese"), "goose");
        assert_eq!(inflector.pluralize("aircraft"), "aircraft");
        assert_eq!(inflector.pluralize("sheep"), "sheeps");
    }

    #[test]
    fn collection_name_from_type_name() {
        let inflector = Inflector::new();

        assert_eq!(inflector.collection_name("JAccount"), "jAccounts");
        assert_eq!(inflector.collection_name("JName"), "jNames");
        assert_eq!(inflector.collection_name("JActivity"), "jActivities");
    }
}
