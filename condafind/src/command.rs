//! Install-command extraction and validation.
//!
//! Validation here is a minimal structural gate: at least three
//! whitespace tokens, starting with `conda install`. It is deliberately
//! not a semantic or security validator; the command text is whatever
//! the remote page published, and callers hand it to a shell-free
//! process spawn. That boundary is by design and must not be silently
//! strengthened here.

use std::fmt;

use crate::document::ModulePage;

/// Literal marker identifying an install directive inside a code fragment.
pub const INSTALL_MARKER: &str = "conda install";

/// Returns the first code fragment of `page` containing the install
/// marker, trimmed of surrounding whitespace, or `None` if no fragment
/// qualifies.
pub fn extract_install_command(page: &ModulePage) -> Option<String> {
    page.code_fragments()
        .into_iter()
        .find(|fragment| fragment.contains(INSTALL_MARKER))
        .map(|fragment| fragment.trim().to_string())
}

/// Structural check: ≥ 3 whitespace tokens, starting `conda install`.
pub fn is_well_formed(command: &str) -> bool {
    let mut tokens = command.split_whitespace();
    matches!(
        (tokens.next(), tokens.next(), tokens.next()),
        (Some("conda"), Some("install"), Some(_))
    )
}

/// A validated install command.
///
/// Only constructible from a string that passed [`is_well_formed`], and
/// immutable afterwards, so a command that reaches the caller has
/// always been through the structural gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    text: String,
}

impl InstallCommand {
    /// Wraps `raw` if it passes the structural gate.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let text = raw.into();
        if is_well_formed(&text) {
            Some(Self { text })
        } else {
            None
        }
    }

    /// The command text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whitespace tokens, ready for process hand-off.
    pub fn argv(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_well_formed_accepts_channel_qualified_command() {
        assert!(is_well_formed("conda install -c conda-forge numpy"));
    }

    #[test]
    fn test_is_well_formed_rejects_other_tools() {
        assert!(!is_well_formed("pip install numpy"));
    }

    #[test]
    fn test_is_well_formed_rejects_short_commands() {
        assert!(!is_well_formed("conda"));
        assert!(!is_well_formed("conda install"));
        assert!(!is_well_formed(""));
    }

    #[test]
    fn test_is_well_formed_tokenizes_on_any_whitespace() {
        assert!(is_well_formed("conda\tinstall\n numpy"));
    }

    #[test]
    fn test_extract_returns_first_marked_fragment_trimmed() {
        let page = ModulePage::parse(
            "<code>pip install x</code><code>  conda install -c main y  </code>",
        );
        assert_eq!(
            extract_install_command(&page),
            Some("conda install -c main y".to_string())
        );
    }

    #[test]
    fn test_extract_none_without_marker() {
        let page = ModulePage::parse("<code>pip install x</code>");
        assert_eq!(extract_install_command(&page), None);
    }

    #[test]
    fn test_install_command_parse_gates_on_structure() {
        assert!(InstallCommand::parse("conda install numpy").is_some());
        assert!(InstallCommand::parse("rm -rf /").is_none());
    }

    #[test]
    fn test_install_command_argv_tokens() {
        let command = InstallCommand::parse("conda install -c main numpy").unwrap();
        assert_eq!(command.argv(), vec!["conda", "install", "-c", "main", "numpy"]);
        assert_eq!(command.to_string(), "conda install -c main numpy");
    }
}
