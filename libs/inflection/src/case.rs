//! Conversions between casing conventions: `CamelCase`, `snake_case`,
//! human readable and title forms, and the key/namespace helpers built on
//! them.

use crate::NON_TITLECASED_WORDS;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ID_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new("(_ids|_id)$").unwrap());
static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new("([A-Z])").unwrap());
static SPACE_OR_UNDERBAR: Lazy<Regex> = Lazy::new(|| Regex::new("[ _]").unwrap());

/// Case of the first letter of a camelized or humanized result.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstLetter {
    #[default]
    Upper,
    Lower,
}

/// `message_properties` -> `MessageProperties`, `message/bus` -> `Message::Bus`.
///
/// The input is lower-cased first.
pub fn camelize(word: &str, first_letter: FirstLetter) -> String {
    camelize_preserving_case(&word.to_lowercase(), first_letter)
}

/// [`camelize`] without lower-casing the input beforehand.
pub fn camelize_preserving_case(word: &str, first_letter: FirstLetter) -> String {
    let segments: Vec<&str> = word.split('/').collect();
    let last = segments.len() - 1;

    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let skip = usize::from(first_letter == FirstLetter::Lower && i == last);

            segment
                .split('_')
                .enumerate()
                .map(|(j, piece)| {
                    if j < skip {
                        piece.to_owned()
                    } else {
                        upper_first(piece)
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("::")
}

/// `MessageProperties` -> `message_properties`, `Message::Bus` -> `message/bus`.
pub fn underscore(word: &str) -> String {
    word.split("::")
        .map(|segment| {
            let segment = UPPERCASE.replace_all(segment, "_${1}");
            segment.strip_prefix('_').unwrap_or(&*segment).to_owned()
        })
        .collect::<Vec<_>>()
        .join("/")
        .to_lowercase()
}

/// `message_property_ids` -> `Message property`.
pub fn humanize(word: &str, first_letter: FirstLetter) -> String {
    let lowered = word.to_lowercase();
    let humanized = ID_SUFFIX.replace(&lowered, "").replace('_', " ");

    match first_letter {
        FirstLetter::Upper => capitalize(&humanized),
        FirstLetter::Lower => humanized,
    }
}

/// Lower-cases everything, then upper-cases the first character.
pub fn capitalize(word: &str) -> String {
    capitalize_preserving_case(&word.to_lowercase())
}

/// Upper-cases the first character and leaves the rest alone.
pub fn capitalize_preserving_case(word: &str) -> String {
    upper_first(word)
}

/// Lower-cases the first character and leaves the rest alone.
pub fn decapitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Every space and underscore becomes a dash.
pub fn dasherize(word: &str) -> String {
    SPACE_OR_UNDERBAR.replace_all(word, "-").into_owned()
}

/// Book title casing: `message properties to keep` -> `Message Properties to Keep`.
///
/// Words in [`NON_TITLECASED_WORDS`] stay lower case unless they open the
/// title. Dashed words are capitalized piece by piece.
pub fn titleize(word: &str) -> String {
    let lowered = word.to_lowercase().replace('_', " ");

    let titled = lowered
        .split(' ')
        .map(|token| {
            token
                .split('-')
                .map(|piece| {
                    if NON_TITLECASED_WORDS.contains(piece) {
                        piece.to_owned()
                    } else {
                        capitalize(piece)
                    }
                })
                .collect::<Vec<_>>()
                .join("-")
        })
        .collect::<Vec<_>>()
        .join(" ");

    upper_first(&titled)
}

/// `Message::Bus::Properties` -> `Properties`.
pub fn demodulize(word: &str) -> String {
    word.rsplit("::").next().unwrap_or_default().to_owned()
}

/// `MessageBusProperty` -> `message_bus_property_id`.
pub fn foreign_key(word: &str) -> String {
    format!("{}_id", underscore(&demodulize(word)))
}

/// `MessageBusProperty` -> `message_bus_propertyid`.
pub fn foreign_key_without_underscore(word: &str) -> String {
    format!("{}id", underscore(&demodulize(word)))
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
