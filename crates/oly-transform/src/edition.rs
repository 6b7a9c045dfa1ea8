//! Edition names as join keys between the events and games tables.

/// Words dropped from edition names before they are compared.
const EDITION_NOISE_WORDS: [&str; 2] = ["Olympics", "Games"];

/// Reduces `1896 Summer Olympics` to `1896 Summer`.
pub fn normalize_edition_name(name: &str) -> String {
    let mut stripped = name.to_string();
    for word in EDITION_NOISE_WORDS {
        stripped = stripped.replace(word, "");
    }
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Leading year of an edition name, e.g. `1896` for `1896 Summer`.
pub fn edition_year_from_name(name: &str) -> Option<i32> {
    name.split_whitespace().next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_noise_words() {
        assert_eq!(normalize_edition_name("1896 Summer Olympics"), "1896 Summer");
        assert_eq!(normalize_edition_name("1906  Intercalated Games"), "1906 Intercalated");
        assert_eq!(normalize_edition_name(" 2022 Winter Olympics "), "2022 Winter");
    }

    #[test]
    fn year_from_name() {
        assert_eq!(edition_year_from_name("1896 Summer"), Some(1896));
        assert_eq!(edition_year_from_name("Summer"), None);
        assert_eq!(edition_year_from_name(""), None);
    }
}
