/// Canonicalize text for scoring: lowercase, drop everything that is not
/// alphanumeric or an apostrophe, collapse whitespace runs to single spaces.
/// Apostrophes survive so contractions stay one token.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_space = true;
    for c in text.chars() {
        if c.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else if c.is_alphanumeric() || c == '\'' {
            out.extend(c.to_lowercase());
            last_space = false;
        }
        // anything else (punctuation, symbols) is dropped outright
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

pub fn tokenize_words(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Character units for CER, with inter-word spaces stripped.
pub fn tokenize_chars(s: &str) -> Vec<char> {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
