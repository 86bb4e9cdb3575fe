use thiserror::Error;

/// Failures raised while validating caller-supplied inventory and vendor data.
///
/// Identity fields are never defaulted; behavioral fields (moq, lead time,
/// rating) carry documented defaults and cannot fail validation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid item at index {index}: {reason}")]
    InvalidItem { index: usize, reason: String },
    #[error("invalid vendor at index {index}: {reason}")]
    InvalidVendor { index: usize, reason: String },
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

/// Failure of the external insight collaborator.
///
/// Always recovered locally: the assembler logs it and proceeds without
/// annotations, so this never surfaces past the engine boundary.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("insight source failure: {0}")]
pub struct InsightError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_messages_name_the_offending_index() {
        let err = DomainError::InvalidItem { index: 3, reason: "missing name".to_owned() };
        assert_eq!(err.to_string(), "invalid item at index 3: missing name");
    }

    #[test]
    fn insight_error_is_displayable() {
        let err = InsightError("timeout after 30s".to_owned());
        assert!(err.to_string().contains("timeout after 30s"));
    }
}
