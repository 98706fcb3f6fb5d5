/// Appends an English ordinal suffix to every integer in `text`:
/// `the 1 pitch` -> `the 1st pitch`.
///
/// Text is split on whitespace and the tokens are joined back with single
/// spaces. Tokens that are not integers pass through unchanged.
pub fn ordinalize(text: &str) -> String {
    text.split_whitespace()
        .map(|token| match ordinal_suffix(token) {
            Some(suffix) => format!("{token}{suffix}"),
            None => token.to_owned(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `None` unless the token is an optionally signed run of ASCII digits.
fn ordinal_suffix(token: &str) -> Option<&'static str> {
    let digits = token.strip_prefix(['-', '+']).unwrap_or(token);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if matches!(digits.len().checked_sub(2).map(|at| &digits[at..]), Some("11" | "12" | "13")) {
        return Some("th");
    }

    let suffix = match digits.as_bytes()[digits.len() - 1] {
        b'1' => "st",
        b'2' => "nd",
        b'3' => "rd",
        _ => "th",
    };

    Some(suffix)
}
