/// Characters outside the word class that survive normalization, so terms
/// like `node.js`, `ci/cd`, `c++` and `front-end` stay intact.
const ALLOWED_PUNCTUATION: [char; 4] = ['.', '-', '/', '+'];

/// Normalizes free text into a single-spaced, lower-cased token stream.
///
/// Any character that is not an ASCII word character (`[A-Za-z0-9_]`),
/// whitespace, or one of `. - / +` becomes a space; whitespace runs collapse
/// to one space and the result is trimmed.
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| if is_kept(c) { c } else { ' ' })
        .collect();

    replaced
        .split_whitespace()
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits already-normalized text into tokens.
pub fn tokens(normalized: &str) -> Vec<&str> {
    normalized.split(' ').filter(|t| !t.is_empty()).collect()
}

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c == '_'
        || c.is_whitespace()
        || ALLOWED_PUNCTUATION.contains(&c)
}
