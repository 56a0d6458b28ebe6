//! Header row detection from column-label keywords.

use regex::Regex;

use crate::schema::Role;

/// Roles whose keywords appeared in a candidate header line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMatch {
    /// Matched roles, in pattern order (name, email, phone).
    pub roles: Vec<Role>,
}

impl HeaderMatch {
    /// Whether any keyword set matched.
    pub fn is_header(&self) -> bool {
        !self.roles.is_empty()
    }
}

/// Decides whether the first line of pasted text is a row of column labels.
///
/// Each role has its own keyword alternation. A line matching any of them is
/// treated as a header, so data rows whose values happen to be one of these
/// words (a name field reading "Contact", an address like "mail@host.com") will
/// be taken for a header too.
pub struct HeaderDetector {
    role_patterns: Vec<(Regex, Role)>,
}

impl HeaderDetector {
    /// Create a detector with the built-in keyword sets.
    pub fn new() -> Self {
        Self {
            role_patterns: Self::build_role_patterns(),
        }
    }

    fn build_role_patterns() -> Vec<(Regex, Role)> {
        vec![
            (
                Regex::new(r"(?i)\b(name|full name|customer|client|contact|person)\b").unwrap(),
                Role::Name,
            ),
            (
                Regex::new(r"(?i)\b(email|e-mail|mail|address|contact|electronic mail)\b").unwrap(),
                Role::Email,
            ),
            (
                Regex::new(r"(?i)\b(phone|tel|telephone|mobile|cell|contact|number)\b").unwrap(),
                Role::Phone,
            ),
        ]
    }

    /// Test a line against every keyword set.
    pub fn detect(&self, line: &str) -> HeaderMatch {
        let folded = line.to_lowercase();
        let roles = self
            .role_patterns
            .iter()
            .filter(|(pattern, _)| pattern.is_match(&folded))
            .map(|(_, role)| *role)
            .collect();

        HeaderMatch { roles }
    }
}

impl Default for HeaderDetector {
    fn default() -> Self {
        Self::new()
    }
}
