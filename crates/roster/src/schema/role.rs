//! Content-based field roles.

use serde::{Deserialize, Serialize};

use super::record::{Record, RecordId, is_valid_phone};

/// Semantic role of one pasted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Person or organisation name; anything that is neither phone nor email.
    Name,
    /// Phone number.
    Phone,
    /// Email address.
    Email,
}

impl Role {
    /// Get a human-readable label for the role.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Name => "name",
            Role::Phone => "phone",
            Role::Email => "email",
        }
    }
}

/// Classify a field by its content. Surrounding whitespace is ignored.
///
/// Anything containing `@` is an email, whether or not it is a valid one.
pub fn classify(field: &str) -> Role {
    let field = field.trim();
    if field.contains('@') {
        Role::Email
    } else if is_valid_phone(field) {
        Role::Phone
    } else {
        Role::Name
    }
}

/// Fields of one row keyed by role.
///
/// A role that no field classified as stays empty. When two fields share a
/// role the later one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedFields {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ClassifiedFields {
    /// Classify every field of a row, trimming each.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a str>) -> Self {
        let mut classified = Self::default();
        for field in fields {
            classified.set(classify(field), field.trim());
        }
        classified
    }

    /// Store a value under a role, replacing any previous value.
    pub fn set(&mut self, role: Role, value: impl Into<String>) {
        let slot = match role {
            Role::Name => &mut self.name,
            Role::Phone => &mut self.phone,
            Role::Email => &mut self.email,
        };
        *slot = value.into();
    }

    /// Value stored under a role.
    pub fn get(&self, role: Role) -> &str {
        match role {
            Role::Name => &self.name,
            Role::Phone => &self.phone,
            Role::Email => &self.email,
        }
    }

    /// Attach an id, producing the record these fields describe.
    pub fn into_record(self, id: RecordId) -> Record {
        Record {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("j@x.com"), Role::Email);
        assert_eq!(classify("5551234567"), Role::Phone);
        assert_eq!(classify("+445551234567"), Role::Phone);
        assert_eq!(classify("Jo"), Role::Name);
    }

    #[test]
    fn test_classify_trims() {
        assert_eq!(classify("  5551234567 "), Role::Phone);
        assert_eq!(classify(" j@x.com\t"), Role::Email);
    }

    #[test]
    fn test_malformed_values_fall_to_name() {
        assert_eq!(classify("555-0100-not-a-phone-since-dashes"), Role::Name);
        assert_eq!(classify("123"), Role::Name);
        assert_eq!(classify("555,0100"), Role::Name);
        assert_eq!(classify(""), Role::Name);
    }

    #[test]
    fn test_at_sign_wins() {
        assert_eq!(classify("not an email @ all"), Role::Email);
    }

    #[test]
    fn test_classified_fields_position_independent() {
        let a = ClassifiedFields::from_fields(["Jo", "5551234567", "j@x.com"]);
        let b = ClassifiedFields::from_fields(["j@x.com", "Jo", "5551234567"]);
        assert_eq!(a, b);
        assert_eq!(a.get(Role::Email), "j@x.com");
        assert_eq!(a.get(Role::Phone), "5551234567");
        assert_eq!(a.get(Role::Name), "Jo");
    }

    #[test]
    fn test_last_field_of_a_role_wins() {
        let fields = ClassifiedFields::from_fields(["Jo", "123", "j@x.com"]);
        assert_eq!(fields.name, "123");
        assert_eq!(fields.phone, "");
        assert_eq!(fields.email, "j@x.com");
    }

    #[test]
    fn test_into_record_keeps_values() {
        let record = ClassifiedFields::from_fields(["Jo", "5551234567", "j@x.com"])
            .into_record(RecordId::new("a"));
        assert_eq!(record.id, RecordId::new("a"));
        assert_eq!(record.name, "Jo");
        assert_eq!(record.phone, "5551234567");
        assert_eq!(record.email, "j@x.com");
    }
}
