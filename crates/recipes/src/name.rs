//! Free-text entry name normalization.

/// Normalize a hand-written entry name.
///
/// Hyphens and underscores become spaces, everything that is not an ASCII
/// letter or whitespace is dropped, whitespace runs collapse to one space and
/// each word is capitalised (`"meatBALL_-sauce!"` becomes `"Meatball Sauce"`).
/// Returns `None` if nothing is left.
pub fn normalize_name(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter_map(|c| match c {
            '-' | '_' => Some(' '),
            c if c.is_ascii_alphabetic() || c.is_whitespace() => Some(c),
            _ => None,
        })
        .collect();

    let words: Vec<String> = cleaned.split_whitespace().map(capitalize).collect();
    if words.is_empty() {
        return None;
    }
    Some(words.join(" "))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
            out
        }
        None => String::new(),
    }
}
