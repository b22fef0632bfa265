pub mod add;
pub mod clear;
pub mod create;
pub mod delete;
pub mod list;
pub mod quit;
pub mod remove;

use anyhow::{Result, bail};

/// Reject empty flag values with a field-specific message before the engine
/// runs. Clap guarantees the flag is present, not that its value is non-empty.
pub fn check_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("The {} field must not be empty", field);
    }
    Ok(())
}

/// Split a participator list on the given delimiter, dropping empty chunks.
/// Create takes a space-separated list; add/rm take comma-separated ones.
pub fn split_participators(raw: &str, delimiter: char) -> Vec<String> {
    raw.split(delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_spaces() {
        assert_eq!(split_participators("alice bob", ' '), vec!["alice", "bob"]);
    }

    #[test]
    fn split_on_commas_trims_whitespace() {
        assert_eq!(
            split_participators("alice, bob ,carol", ','),
            vec!["alice", "bob", "carol"]
        );
    }

    #[test]
    fn split_drops_empty_chunks() {
        assert_eq!(split_participators("alice,,bob", ','), vec!["alice", "bob"]);
        assert_eq!(split_participators("  ", ' '), Vec::<String>::new());
    }
}
