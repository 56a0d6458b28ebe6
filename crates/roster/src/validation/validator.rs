//! Schema rules for classified fields.

use crate::schema::{ClassifiedFields, Role, is_valid_email, is_valid_phone};

/// One field that failed its rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Which field.
    pub field: Role,
    /// The offending value (empty when no field of this role was present).
    pub value: String,
}

/// Checks classified fields against the record schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordValidator;

impl RecordValidator {
    pub fn new() -> Self {
        Self
    }

    /// Pass the fields through if they satisfy the schema, or list every rule
    /// they break.
    ///
    /// Violations are reported in field order: name, phone, email.
    pub fn validate(
        &self,
        fields: ClassifiedFields,
    ) -> Result<ClassifiedFields, Vec<FieldViolation>> {
        let violations: Vec<FieldViolation> = [Role::Name, Role::Phone, Role::Email]
            .into_iter()
            .filter(|&role| !Self::check(role, fields.get(role)))
            .map(|role| FieldViolation {
                field: role,
                value: fields.get(role).to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(fields)
        } else {
            Err(violations)
        }
    }

    fn check(role: Role, value: &str) -> bool {
        match role {
            Role::Name => !value.trim().is_empty(),
            Role::Phone => is_valid_phone(value),
            Role::Email => is_valid_email(value),
        }
    }
}
