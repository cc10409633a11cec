//! Validation error types

use std::fmt;

/// A single violated rule on one input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value is present but not a string
    NotAString { field: &'static str },

    /// Field is missing, null, or blank after trimming
    Empty { field: &'static str },

    /// Field is shorter than the minimum length
    TooShort { field: &'static str, min: usize },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Field contains a control character such as NUL or a line break
    ControlCharacter { field: &'static str },

    /// Value must be an integer greater than zero
    NotPositiveInteger { field: &'static str },
}

impl ValidationError {
    /// Name of the offending request field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotAString { field }
            | Self::Empty { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::ControlCharacter { field }
            | Self::NotPositiveInteger { field } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAString { field } => write!(f, "{} must be a string", field),
            Self::Empty { field } => write!(f, "{} is required", field),
            Self::TooShort { field, min } => {
                write!(f, "{} must be at least {} characters long", field, min)
            }
            Self::TooLong { field, max } => {
                write!(f, "{} must be at most {} characters long", field, max)
            }
            Self::ControlCharacter { field } => {
                write!(f, "{} must not contain control characters", field)
            }
            Self::NotPositiveInteger { field } => {
                write!(f, "{} must be a positive integer", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Every rule violated by one request, in the order the rules were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<ValidationError>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, err: ValidationError) {
        self.0.push(err);
    }

    pub fn extend(&mut self, errs: impl IntoIterator<Item = ValidationError>) {
        self.0.extend(errs);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }
}

impl From<ValidationError> for Violations {
    fn from(err: ValidationError) -> Self {
        Self(vec![err])
    }
}

impl From<Vec<ValidationError>> for Violations {
    fn from(errs: Vec<ValidationError>) -> Self {
        Self(errs)
    }
}

impl IntoIterator for Violations {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooShort {
            field: "name",
            min: 3,
        };
        assert_eq!(err.to_string(), "name must be at least 3 characters long");

        let err = ValidationError::NotPositiveInteger { field: "id" };
        assert_eq!(err.to_string(), "id must be a positive integer");

        let err = ValidationError::ControlCharacter { field: "name" };
        assert_eq!(err.to_string(), "name must not contain control characters");
    }

    #[test]
    fn violations_join_in_order() {
        let mut v = Violations::new();
        v.push(ValidationError::Empty { field: "name" });
        v.push(ValidationError::TooShort {
            field: "name",
            min: 3,
        });

        assert_eq!(v.len(), 2);
        assert_eq!(
            v.to_string(),
            "name is required; name must be at least 3 characters long"
        );
    }

    #[test]
    fn field_accessor() {
        assert_eq!(ValidationError::TooLong { field: "name", max: 50 }.field(), "name");
        assert_eq!(ValidationError::NotPositiveInteger { field: "page" }.field(), "page");
    }
}
