//! English word inflection: singular/plural nouns and the casing conventions
//! used for class, table and key names.
//!
//! Pluralization is driven by ordered rule tables where the first matching
//! rule wins. Everything else is either a string transform or a composition
//! of the two.

mod case;
mod error;
mod exceptions;
mod inflector;
mod ordinal;
mod rules;
mod transform;

pub use case::{
    FirstLetter, camelize, camelize_preserving_case, capitalize, capitalize_preserving_case, dasherize, decapitalize,
    demodulize, foreign_key, foreign_key_without_underscore, humanize, titleize, underscore,
};
pub use error::InflectionError;
pub use exceptions::{NON_TITLECASED_WORDS, UNCOUNTABLE_WORDS, WordSet};
pub use inflector::Inflector;
pub use ordinal::ordinalize;
pub use rules::{InflectionRule, PLURAL_RULES, RuleTable, SINGULAR_RULES};
pub use transform::{Transform, TransformOptions};

use once_cell::sync::Lazy;

static DEFAULT: Lazy<Inflector> = Lazy::new(Inflector::new);

/// Inflector built from the built-in rule tables.
pub fn default() -> &'static Inflector {
    &DEFAULT
}

/// Plural form of `word`, see [`Inflector::pluralize`].
pub fn pluralize(word: &str) -> String {
    default().pluralize(word)
}

/// Singular form of `word`, see [`Inflector::singularize`].
pub fn singularize(word: &str) -> String {
    default().singularize(word)
}

/// `MessageBusProperty` -> `message_bus_properties`.
pub fn tableize(word: &str) -> String {
    default().tableize(word)
}

/// `message_bus_properties` -> `MessageBusProperty`.
pub fn classify(word: &str) -> String {
    default().classify(word)
}

/// `JAccount` -> `jAccounts`.
pub fn collection_name(type_name: &str) -> String {
    default().collection_name(type_name)
}
