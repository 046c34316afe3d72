//! Name transformations shared by every generator.
//!
//! Class names keep the user's acronyms (`HTTPClient` stays `HTTPClient`),
//! so [`studly`] only upper-cases word starts. Everything that is lowered
//! (`camel`, `snake`, `kebab`) goes through `heck`.

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase};

/// Upper-case the first character, leave the rest untouched.
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character, leave the rest untouched.
pub fn lcfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// PascalCase for class names: words split on `-`, `_` and spaces are
/// capitalised and joined; inner casing is preserved.
///
/// | Input | Output |
/// |-------|--------|
/// | "user" | "User" |
/// | "blog_post" | "BlogPost" |
/// | "HTTPClient" | "HTTPClient" |
pub fn studly(s: &str) -> String {
    s.split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(ucfirst)
        .collect()
}

/// camelCase for properties and variables.
pub fn camel(s: &str) -> String {
    lcfirst(&s.to_lower_camel_case())
}

pub fn snake(s: &str) -> String {
    s.to_snake_case()
}

pub fn kebab(s: &str) -> String {
    s.to_kebab_case()
}

/// Human label for a column name: `first_name` -> `First name`.
pub fn label(field: &str) -> String {
    ucfirst(&field.replace('_', " "))
}

const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "feedback",
    "fish",
    "information",
    "media",
    "news",
    "series",
    "sheep",
    "species",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

/// English plural of the last word in `word`, preserving the leading case.
pub fn plural(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();

    if UNCOUNTABLE.iter().any(|u| lower.ends_with(u)) {
        return word.to_string();
    }

    for (singular, plural) in IRREGULAR {
        if lower == *singular {
            return if word.starts_with(|c: char| c.is_uppercase()) {
                ucfirst(plural)
            } else {
                (*plural).to_string()
            };
        }
    }

    if let Some(stem) = word.strip_suffix(['y', 'Y']) {
        let before = stem.chars().last();
        if before.is_some_and(|c| !"aeiouAEIOU".contains(c)) {
            return format!("{stem}ies");
        }
    }

    if ["s", "x", "z", "ch", "sh"].iter().any(|s| lower.ends_with(s)) {
        return format!("{word}es");
    }

    format!("{word}s")
}
