/// Converts a mixed case string into an all caps string, separating words with `_`. A word
/// boundary is an uppercase character following a lowercase one.
///
/// # Examples
/// ```
/// # use missing_utilities::strings::make_all_caps;
/// assert_eq!(make_all_caps("helloWorld"), "HELLO_WORLD");
/// assert_eq!(make_all_caps("HTTPServer"), "HTTPSERVER");
/// ```
pub fn make_all_caps(mixed_case: &str) -> String {
    let mut all_caps = String::with_capacity(mixed_case.len() + 4);
    let mut found_lower = false;
    for c in mixed_case.chars() {
        if c.is_lowercase() {
            found_lower = true;
            all_caps.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            if found_lower {
                all_caps.push('_');
                found_lower = false;
            }
            all_caps.push(c);
        } else {
            all_caps.push(c);
        }
    }
    all_caps
}

/// Changes the first character of the provided string to lower case, leaving the rest unchanged.
pub fn make_lower_case(mixed_case: &str) -> String {
    let mut chars = mixed_case.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Changes the first character of the provided string to upper case, leaving the rest unchanged.
pub fn make_upper_case(mixed_case: &str) -> String {
    let mut chars = mixed_case.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts a mixed case string into an all lowercase string, separating words with `-`.
///
/// # Examples
/// ```
/// # use missing_utilities::strings::make_snake_case;
/// assert_eq!(make_snake_case("HelloWorld"), "hello-world");
/// assert_eq!(make_snake_case("helloWorld"), "hello-world");
/// ```
pub fn make_snake_case(mixed_case: &str) -> String {
    let mut snake_case = String::with_capacity(mixed_case.len() + 4);
    for c in make_lower_case(mixed_case).chars() {
        if c.is_uppercase() {
            snake_case.push('-');
            snake_case.extend(c.to_lowercase());
        } else {
            snake_case.push(c);
        }
    }
    snake_case
}

/// Makes a best effort attempt at pluralizing the provided (English) word, based only on its
/// suffix. Irregular plurals aren't handled.
///
/// # Examples
/// ```
/// # use missing_utilities::strings::make_plural;
/// assert_eq!(make_plural("box"), "boxes");
/// assert_eq!(make_plural("sky"), "skies");
/// assert_eq!(make_plural("knife"), "knives");
/// ```
pub fn make_plural(mixed_case: &str) -> String {
    // Rules are checked in order, the first matching suffix wins.
    if mixed_case.ends_with("ch") {
        format!("{}es", mixed_case)
    } else if mixed_case.ends_with("es") {
        mixed_case.to_string()
    } else if let Some(stem) = mixed_case.strip_suffix('f') {
        format!("{}ves", stem)
    } else if let Some(stem) = mixed_case.strip_suffix("fe") {
        format!("{}ves", stem)
    } else if ["s", "sh", "tz", "x"].iter().any(|suffix| mixed_case.ends_with(suffix)) {
        format!("{}es", mixed_case)
    } else if mixed_case.ends_with('y') && !mixed_case.ends_with("ey") {
        format!("{}ies", &mixed_case[..mixed_case.len() - 1])
    } else if mixed_case.ends_with('z') && !mixed_case.ends_with("zz") {
        format!("{}zes", mixed_case)
    } else {
        format!("{}s", mixed_case)
    }
}
