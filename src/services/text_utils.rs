//! Shared text helpers for rendering parsed titles

/// Connecting words left lowercase by [title_case] unless they lead the phrase.
static SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "in", "nor", "of", "on", "or", "per", "the",
    "to", "vs", "via",
];

/// Title-case a whitespace-separated phrase.
///
/// The first word is always capitalized; every later word is capitalized
/// unless it is a small connecting word, which renders fully lowercase.
///
/// # Example
/// ```
/// use media_manager::services::text_utils::title_case;
/// assert_eq!(title_case("the lord of the rings"), "The Lord of the Rings");
/// ```
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 || !SMALL_WORDS.contains(&word.to_lowercase().as_str()) {
                capitalize(word)
            } else {
                word.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
