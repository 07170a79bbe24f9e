//! Option handling for the course/instructor selectors.

/// Reserved entry appended below the real options. Selecting it opens the
/// creation popup; it is never committed as a field value.
pub const NOT_IN_LIST: &str = "Not in the list - Add new";

/// Reference lists arrive unordered from the backend.
pub fn sorted_names(mut names: Vec<String>) -> Vec<String> {
    names.sort_by_key(|name| name.to_lowercase());
    names
}

/// Case-insensitive substring filter applied on every keystroke.
pub fn filter_names(names: &[String], query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn sort_ignores_case() {
        let sorted = sorted_names(names(&["b. verma", "A. Singh", "a. kumar"]));
        assert_eq!(sorted, names(&["a. kumar", "A. Singh", "b. verma"]));
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let options = names(&["A. Singh", "R. Gupta", "P. Shunmugaraj"]);
        assert_eq!(filter_names(&options, "singh"), names(&["A. Singh"]));
        assert_eq!(filter_names(&options, "U"), names(&["R. Gupta", "P. Shunmugaraj"]));
        assert_eq!(filter_names(&options, ""), options);
        assert!(filter_names(&options, "zz").is_empty());
    }

    #[test]
    fn sentinel_never_comes_from_the_data() {
        let options = names(&["A. Singh", "R. Gupta"]);
        assert!(!filter_names(&options, "").contains(&NOT_IN_LIST.to_string()));
        assert!(!filter_names(&options, "list").contains(&NOT_IN_LIST.to_string()));
    }
}
