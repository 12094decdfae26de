//! Shared naming helpers.

/// Convert a string to PascalCase (e.g., "hero_banner" -> "HeroBanner")
///
/// Underscores, dashes and whitespace all separate words.
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to snake_case (e.g., "HeroBanner" -> "hero_banner")
pub fn to_snake_case(s: &str) -> String {
    separate_words(s, '_')
}

/// Convert a string to kebab-case (e.g., "HeroBanner" -> "hero-banner")
pub fn to_kebab_case(s: &str) -> String {
    separate_words(s, '-')
}

fn separate_words(s: &str, sep: char) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c == '_' || c == '-' {
            result.push(sep);
            continue;
        }
        if c.is_uppercase() && i > 0 && !result.ends_with(sep) {
            result.push(sep);
        }
        result.extend(c.to_lowercase());
    }
    result
}
