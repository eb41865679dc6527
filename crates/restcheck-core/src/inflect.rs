//! Resource-token inflection.
//!
//! Converts snake_case resource tokens between singular and plural forms
//! for controller path segments, and normalizes CamelCase overrides to
//! snake_case. Only the final underscore-separated word inflects, so
//! `admin_user` becomes `admin_users`.
//!
//! The rule set covers the common English suffix rules plus a small table
//! of irregular and uncountable nouns. It is not a full inflection engine;
//! resource tokens outside these rules should be supplied pre-inflected.

/// Irregular (singular, plural) pairs checked before the suffix rules.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("bus", "buses"),
    ("status", "statuses"),
    ("virus", "viruses"),
    ("campus", "campuses"),
    ("hero", "heroes"),
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("echo", "echoes"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("life", "lives"),
    ("leaf", "leaves"),
    ("wolf", "wolves"),
    ("half", "halves"),
    ("shelf", "shelves"),
    ("movie", "movies"),
];

/// Words with identical singular and plural forms.
const UNCOUNTABLE: &[&str] = &[
    "sheep",
    "fish",
    "deer",
    "series",
    "species",
    "equipment",
    "information",
    "money",
    "news",
    "rice",
];

/// Pluralize the final word of a snake_case resource token.
#[must_use]
pub fn pluralize(token: &str) -> String {
    map_last_word(token, pluralize_word)
}

/// Singularize the final word of a snake_case resource token.
#[must_use]
pub fn singularize(token: &str) -> String {
    map_last_word(token, singularize_word)
}

/// Normalize a CamelCase or dashed name to snake_case.
///
/// `AdminUser` becomes `admin_user`; acronym runs split before a trailing
/// lowercase letter, so `HTTPServer` becomes `http_server`. Snake_case
/// input passes through unchanged.
#[must_use]
pub fn underscore(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            out.push('_');
            continue;
        }
        if !c.is_ascii_uppercase() {
            out.push(c);
            continue;
        }

        let after_lower = i > 0 && (chars[i - 1].is_ascii_lowercase() || chars[i - 1].is_ascii_digit());
        let acronym_end = i > 0
            && chars[i - 1].is_ascii_uppercase()
            && chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
        if after_lower || acronym_end {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
    }

    out
}

fn map_last_word(token: &str, inflect: fn(&str) -> String) -> String {
    match token.rfind('_') {
        Some(i) => format!("{}{}", &token[..=i], inflect(&token[i + 1..])),
        None => inflect(token),
    }
}

fn pluralize_word(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == word) {
        return (*plural).to_string();
    }
    if IRREGULAR.iter().any(|(_, plural)| *plural == word) {
        // Already plural.
        return word.to_string();
    }

    if ends_with_any(word, &["ss", "x", "z", "ch", "sh"]) {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !is_vowel(c)) {
            return format!("{stem}ies");
        }
    }
    if word.ends_with('s') {
        // Treat a trailing `s` outside the rules above as already plural.
        return word.to_string();
    }

    format!("{word}s")
}

fn singularize_word(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == word) {
        return (*singular).to_string();
    }
    if IRREGULAR.iter().any(|(singular, _)| *singular == word) {
        // Already singular.
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if stem.chars().last().is_some_and(|c| !is_vowel(c)) {
            return format!("{stem}y");
        }
    }
    if ends_with_any(word, &["sses", "xes", "zes", "ches", "shes"]) {
        return word[..word.len() - 2].to_string();
    }
    if word.ends_with("ss") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix('s') {
        return stem.to_string();
    }

    word.to_string()
}

fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| word.ends_with(suffix))
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}
