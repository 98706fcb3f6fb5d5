use crate::{
    FirstLetter, InflectionError, Inflector,
    case::{
        camelize, camelize_preserving_case, capitalize, capitalize_preserving_case, dasherize, decapitalize, demodulize,
        foreign_key, foreign_key_without_underscore, humanize, titleize, underscore,
    },
    ordinal::ordinalize,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Every operation the inflector exposes, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    Pluralize,
    Singularize,
    Camelize,
    Underscore,
    Humanize,
    Capitalize,
    Decapitalize,
    Dasherize,
    Titleize,
    Demodulize,
    Tableize,
    Classify,
    ForeignKey,
    Ordinalize,
    CollectionName,
}

impl Transform {
    pub const ALL: &'static [Transform] = &[
        Transform::Pluralize,
        Transform::Singularize,
        Transform::Camelize,
        Transform::Underscore,
        Transform::Humanize,
        Transform::Capitalize,
        Transform::Decapitalize,
        Transform::Dasherize,
        Transform::Titleize,
        Transform::Demodulize,
        Transform::Tableize,
        Transform::Classify,
        Transform::ForeignKey,
        Transform::Ordinalize,
        Transform::CollectionName,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Transform::Pluralize => "pluralize",
            Transform::Singularize => "singularize",
            Transform::Camelize => "camelize",
            Transform::Underscore => "underscore",
            Transform::Humanize => "humanize",
            Transform::Capitalize => "capitalize",
            Transform::Decapitalize => "decapitalize",
            Transform::Dasherize => "dasherize",
            Transform::Titleize => "titleize",
            Transform::Demodulize => "demodulize",
            Transform::Tableize => "tableize",
            Transform::Classify => "classify",
            Transform::ForeignKey => "foreign_key",
            Transform::Ordinalize => "ordinalize",
            Transform::CollectionName => "collection_name",
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transform {
    type Err = InflectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_lowercase();

        Transform::ALL
            .iter()
            .copied()
            .find(|transform| transform.as_str() == normalized)
            .ok_or_else(|| InflectionError::UnknownTransform(s.to_owned()))
    }
}

/// Optional flags of the individual transforms. Each transform reads the
/// flags that apply to it and ignores the others.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformOptions {
    /// `camelize`, `humanize`: keep the first letter in lower case.
    pub lower_first: bool,
    /// `camelize`, `capitalize`: do not lower-case the input first.
    pub preserve_case: bool,
    /// `foreign_key`: join the name and `id` without an underscore.
    pub drop_id_underscore: bool,
    /// `pluralize`, `singularize`: returned instead of the rule table result.
    pub override_with: Option<String>,
}

impl TransformOptions {
    fn first_letter(&self) -> FirstLetter {
        if self.lower_first {
            FirstLetter::Lower
        } else {
            FirstLetter::Upper
        }
    }
}

impl Inflector {
    /// Runs `transform` on `word`.
    pub fn apply(&self, transform: Transform, word: &str, options: &TransformOptions) -> String {
        let override_with = options.override_with.as_deref();

        match transform {
            Transform::Pluralize => self.pluralize_with_override(word, override_with),
            Transform::Singularize => self.singularize_with_override(word, override_with),
            Transform::Camelize if options.preserve_case => camelize_preserving_case(word, options.first_letter()),
            Transform::Camelize => camelize(word, options.first_letter()),
            Transform::Underscore => underscore(word),
            Transform::Humanize => humanize(word, options.first_letter()),
            Transform::Capitalize if options.preserve_case => capitalize_preserving_case(word),
            Transform::Capitalize => capitalize(word),
            Transform::Decapitalize => decapitalize(word),
            Transform::Dasherize => dasherize(word),
            Transform::Titleize => titleize(word),
            Transform::Demodulize => demodulize(word),
            Transform::Tableize => self.tableize(word),
            Transform::Classify => self.classify(word),
            Transform::ForeignKey if options.drop_id_underscore => foreign_key_without_underscore(word),
            Transform::ForeignKey => foreign_key(word),
            Transform::Ordinalize => ordinalize(word),
            Transform::CollectionName => self.collection_name(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for transform in Transform::ALL {
            assert_eq!(transform.to_string().parse::<Transform>().unwrap(), *transform);
        }
    }

    #[test]
    fn parsing_accepts_dashes_and_any_case() {
        assert_eq!("foreign-key".parse::<Transform>().unwrap(), Transform::ForeignKey);
        assert_eq!(" Pluralize ".parse::<Transform>().unwrap(), Transform::Pluralize);
        assert!(matches!(
            "conjugate".parse::<Transform>(),
            Err(InflectionError::UnknownTransform(name)) if name == "conjugate"
        ));
    }

    #[test]
    fn options_select_variants() {
        let inflector = Inflector::new();
        let defaults = TransformOptions::default();
        let lower = TransformOptions {
            lower_first: true,
            ..Default::default()
        };
        let compact = TransformOptions {
            drop_id_underscore: true,
            ..Default::default()
        };
        let overridden = TransformOptions {
            override_with: Some("kine".to_owned()),
            ..Default::default()
        };

        assert_eq!(inflector.apply(Transform::Camelize, "message_properties", &lower), "messageProperties");
        assert_eq!(inflector.apply(Transform::Camelize, "message_properties", &defaults), "MessageProperties");
        assert_eq!(inflector.apply(Transform::ForeignKey, "MessageBusProperty", &compact), "message_bus_propertyid");
        assert_eq!(inflector.apply(Transform::Pluralize, "cow", &overridden), "kine");
        assert_eq!(inflector.apply(Transform::Pluralize, "cow", &defaults), "cows");
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: TransformOptions = serde_json::from_str(r#"{"lowerFirst": true}"#).unwrap();

        assert!(options.lower_first);
        assert_eq!(options.override_with, None);
    }
}
