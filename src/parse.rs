/// Splits raw attendee text into names.
///
/// Commas and newlines are interchangeable separators, each entry is trimmed,
/// and blank entries are dropped. An empty or whitespace-only input yields an
/// empty list, which the caller represents as a "waiting for input" state.
pub fn parse_names(text: &str) -> Vec<String> {
    text.replace(',', "\n")
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas_and_newlines_are_interchangeable() {
        assert_eq!(
            parse_names("Alice,Bob\nCharlie\n\n"),
            vec!["Alice", "Bob", "Charlie"]
        );
    }

    #[test]
    fn entries_are_trimmed() {
        assert_eq!(
            parse_names("  Alice ,\tBob\n  Charlie  "),
            vec!["Alice", "Bob", "Charlie"]
        );
    }

    #[test]
    fn blank_entries_never_survive() {
        assert_eq!(parse_names(",,\n ,\n,"), Vec::<String>::new());
        assert_eq!(parse_names(""), Vec::<String>::new());
        assert_eq!(parse_names("   \n\t\n"), Vec::<String>::new());
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        assert_eq!(parse_names("Bob,Alice,Bob"), vec!["Bob", "Alice", "Bob"]);
    }
}
