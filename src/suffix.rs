//! File name suffix manipulation on plain strings.

/// The default separator between a file name and its suffix
pub const SUFFIX_SEPARATOR: &str = ".";

fn start_of_suffix(file_name: &str, separator: &str, first_occurrence: bool) -> Option<usize> {
    if first_occurrence {
        file_name.find(separator)
    } else {
        file_name.rfind(separator)
    }
}

/// The suffix of `file_name`, without the separator. If `first_occurrence` is true the suffix
/// starts at the first occurrence of `separator`, otherwise at the last.
///
/// ```
/// use sorted_collections::suffix::{get_suffix, SUFFIX_SEPARATOR};
/// assert_eq!(get_suffix("archive.tar.gz", SUFFIX_SEPARATOR, true), Some("tar.gz"));
/// assert_eq!(get_suffix("archive.tar.gz", SUFFIX_SEPARATOR, false), Some("gz"));
/// assert_eq!(get_suffix("README", SUFFIX_SEPARATOR, true), None);
/// ```
pub fn get_suffix<'a>(file_name: &'a str, separator: &str, first_occurrence: bool) -> Option<&'a str> {
    let index = start_of_suffix(file_name, separator, first_occurrence)?;
    Some(&file_name[index + separator.len()..])
}

/// `file_name` without its suffix, or `file_name` itself if it has none
pub fn remove_suffix<'a>(file_name: &'a str, separator: &str, first_occurrence: bool) -> &'a str {
    match start_of_suffix(file_name, separator, first_occurrence) {
        Some(index) => &file_name[..index],
        None => file_name,
    }
}

/// `file_name` with `suffix` appended. An existing suffix is retained. The separator is only
/// inserted if the name does not end with it and the suffix does not start with it.
pub fn append_suffix(file_name: &str, suffix: &str, separator: &str) -> String {
    if file_name.ends_with(separator) || suffix.starts_with(separator) {
        format!("{}{}", file_name, suffix)
    } else {
        format!("{}{}{}", file_name, separator, suffix)
    }
}
