use tracing::trace;

use crate::strings::{make_all_caps, make_lower_case, make_snake_case, make_upper_case};

/// Words that can't be used as identifiers as-is: keywords (including reserved ones) and the
/// names of primitive types.
const RESERVED: &[&str] = &[
    "abstract", "as", "async", "await", "become", "bool", "box", "break", "char", "const",
    "continue", "crate", "do", "dyn", "else", "enum", "extern", "f32", "f64", "false", "final",
    "fn", "for", "gen", "i128", "i16", "i32", "i64", "i8", "if", "impl", "in", "isize", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "self", "static", "str", "struct", "super", "trait", "true", "try", "type", "typeof", "u128",
    "u16", "u32", "u64", "u8", "unsafe", "unsized", "use", "usize", "virtual", "where", "while",
    "yield",
];

/// Returns true if the provided word is reserved and can't be used as an identifier.
pub fn is_reserved(word: &str) -> bool {
    RESERVED.contains(&word)
}

/// Replaces every occurrence of `name`, embedded in angle brackets, within `template`. The way
/// the name is written inside the brackets determines how `value` is transformed first:
///
/// | Placeholder          | Replacement                                                |
/// |----------------------|------------------------------------------------------------|
/// | `<name>`, `<Name>`   | `value`, unchanged                                         |
/// | `<name_>`            | lower case `value`, followed by `_` if it is reserved       |
/// | `<~name>`            | lower case `value`                                         |
/// | `<~snake-name>`      | snake case `value`                                         |
/// | `<~Name>`            | upper case `value`                                         |
/// | `<~ALL_CAPS_NAME>`   | all caps `value`                                           |
///
/// # Examples
/// ```
/// # use missing_utilities::strings::replace_all;
/// let template = "struct <~Class> { <~class>: <~CLASS>, <class_>: () }";
/// assert_eq!(replace_all(template, "class", "mod"), "struct Mod { mod: MOD, mod_: () }");
/// ```
pub fn replace_all(template: &str, name: &str, value: &str) -> String {
    trace!(name, value, "replacing template placeholders");

    let mut result = template.replace(&placeholder("", &make_lower_case(name)), value);
    result = result.replace(&placeholder("", &make_upper_case(name)), value);

    let mut unique = make_lower_case(value);
    if is_reserved(&unique) {
        unique.push('_');
    }
    result = result.replace(&placeholder("", &format!("{}_", make_lower_case(name))), &unique);

    result = result.replace(&placeholder("~", &make_lower_case(name)), &make_lower_case(value));
    result = result.replace(&placeholder("~", &make_snake_case(name)), &make_snake_case(value));
    result = result.replace(&placeholder("~", &make_upper_case(name)), &make_upper_case(value));
    result.replace(&placeholder("~", &make_all_caps(name)), &make_all_caps(value))
}

fn placeholder(prefix: &str, name: &str) -> String {
    format!("<{}{}>", prefix, name)
}
