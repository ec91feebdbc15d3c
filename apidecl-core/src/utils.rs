//! Shared utility functions for code generation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
}

fn classify(c: char) -> Option<CharClass> {
    if c.is_numeric() {
        Some(CharClass::Digit)
    } else if c.is_uppercase() {
        Some(CharClass::Upper)
    } else if c.is_alphabetic() {
        Some(CharClass::Lower)
    } else {
        None
    }
}

/// Split a string into words.
///
/// Any non-alphanumeric character separates words. Inside an alphanumeric run
/// a new word starts on a lower-to-upper hump (`fooBar`), at the last capital
/// of an acronym followed by a lowercase letter (`HTTPServer`), and on every
/// letter/digit boundary (`v0`).
pub fn words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut result = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        let Some(class) = classify(c) else {
            if !current.is_empty() {
                result.push(std::mem::take(&mut current));
            }
            continue;
        };

        let prev = i.checked_sub(1).and_then(|p| classify(chars[p]));
        let next = chars.get(i + 1).and_then(|&n| classify(n));

        let boundary = match (prev, class) {
            (Some(CharClass::Lower), CharClass::Upper) => true,
            (Some(CharClass::Upper), CharClass::Upper) => next == Some(CharClass::Lower),
            (Some(CharClass::Digit), CharClass::Upper | CharClass::Lower) => true,
            (Some(CharClass::Upper | CharClass::Lower), CharClass::Digit) => true,
            _ => false,
        };

        if boundary && !current.is_empty() {
            result.push(std::mem::take(&mut current));
        }
        current.push(c);
    }

    if !current.is_empty() {
        result.push(current);
    }
    result
}

/// Uppercase the first character, leaving the rest untouched (e.g., "fooBar" -> "FooBar")
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

fn capitalize(word: &str) -> String {
    upper_first(&word.to_lowercase())
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    words(s)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    upper_first(&to_camel_case(s))
}

/// Convert a string to kebab-case (e.g., "HelloWorld" -> "hello-world")
pub fn to_kebab_case(s: &str) -> String {
    words(s)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
