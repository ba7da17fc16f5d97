//! Checks for empty and blank texts.
//!
//! Every function accepts either a `&str` or an `Option<&str>`; `None` counts as empty.

/// true if the text is absent or empty
pub fn is_empty<'a>(text: impl Into<Option<&'a str>>) -> bool {
    text.into().map_or(true, str::is_empty)
}

/// true if the text is present and not empty
pub fn is_not_empty<'a>(text: impl Into<Option<&'a str>>) -> bool {
    !is_empty(text)
}

/// true if the text is absent, empty or consists of whitespace only
pub fn has_no_text<'a>(text: impl Into<Option<&'a str>>) -> bool {
    text.into()
        .map_or(true, |text| text.chars().all(char::is_whitespace))
}

/// true if the text contains at least one non-whitespace character
pub fn has_text<'a>(text: impl Into<Option<&'a str>>) -> bool {
    !has_no_text(text)
}
