//! User identity and name validation
//!
//! Names are trimmed, then checked against every rule so that a single
//! response can report all of them.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ValidationError, Violations};

/// Minimum length for user names (after trimming)
pub const MIN_NAME_LEN: usize = 3;

/// Maximum length for user names (after trimming)
pub const MAX_NAME_LEN: usize = 50;

/// Store-generated primary key, always > 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Parse a path segment as a user id.
    ///
    /// Anything that is not a base-10 integer in `1..=i32::MAX` is rejected.
    ///
    /// # Example
    /// ```
    /// use usersvc_server::models::UserId;
    ///
    /// assert_eq!(UserId::parse("42").unwrap().get(), 42);
    /// assert!(UserId::parse("0").is_err());
    /// assert!(UserId::parse("abc").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        raw.parse::<i32>()
            .ok()
            .and_then(Self::new)
            .ok_or(ValidationError::NotPositiveInteger { field: "id" })
    }

    /// Wrap a raw id, returning `None` for non-positive values.
    pub fn new(id: i32) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated, trimmed user name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Validate a name taken from a string.
    ///
    /// # Rules
    /// - Leading/trailing whitespace is removed first
    /// - Must not be blank
    /// - 3 to 50 characters
    /// - No control characters (Postgres text cannot hold NUL)
    pub fn new(s: &str) -> Result<Self, Violations> {
        let trimmed = s.trim();
        let len = trimmed.chars().count();
        let mut violations = Violations::new();

        if trimmed.is_empty() {
            violations.push(ValidationError::Empty { field: "name" });
        }
        if len < MIN_NAME_LEN {
            violations.push(ValidationError::TooShort {
                field: "name",
                min: MIN_NAME_LEN,
            });
        }
        if len > MAX_NAME_LEN {
            violations.push(ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_LEN,
            });
        }
        if trimmed.chars().any(char::is_control) {
            violations.push(ValidationError::ControlCharacter { field: "name" });
        }

        if violations.is_empty() {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(violations)
        }
    }

    /// Validate the raw `name` member of a JSON body.
    ///
    /// A missing or null member is both "not a string" and "required";
    /// other non-string values only fail the string rule.
    pub fn from_json(value: Option<&Value>) -> Result<Self, Violations> {
        match value {
            Some(Value::String(s)) => Self::new(s),
            None | Some(Value::Null) => Err(Violations::from(vec![
                ValidationError::NotAString { field: "name" },
                ValidationError::Empty { field: "name" },
            ])),
            Some(_) => Err(ValidationError::NotAString { field: "name" }.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A persisted user row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// Create/update request body.
///
/// `name` stays untyped until validation so that a wrong JSON type is
/// reported as a field violation rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: Option<Value>,
}

impl UserPayload {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(Value::String(name.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn parses_positive_ids() {
        assert_eq!(UserId::parse("1").unwrap().get(), 1);
        assert_eq!(UserId::parse("2147483647").unwrap().get(), i32::MAX);
    }

    #[test]
    fn rejects_bad_ids() {
        for raw in ["0", "-1", "abc", "1.5", "", " 1", "2147483648"] {
            let err = UserId::parse(raw).unwrap_err();
            assert_eq!(err, ValidationError::NotPositiveInteger { field: "id" }, "{raw:?}");
        }
    }

    #[test]
    fn trims_name() {
        let name = UserName::new("   Ada  ").unwrap();
        assert_eq!(name.as_str(), "Ada");
    }

    #[test]
    fn blank_name_reports_every_rule() {
        let errs: Vec<_> = UserName::new("   ").unwrap_err().into_iter().collect();
        assert_eq!(
            errs,
            vec![
                ValidationError::Empty { field: "name" },
                ValidationError::TooShort { field: "name", min: 3 },
            ]
        );
    }

    #[test]
    fn short_name() {
        let errs: Vec<_> = UserName::new("x").unwrap_err().into_iter().collect();
        assert_eq!(errs, vec![ValidationError::TooShort { field: "name", min: 3 }]);
    }

    #[test]
    fn length_bounds() {
        assert!(UserName::new(&"a".repeat(3)).is_ok());
        assert!(UserName::new(&"a".repeat(50)).is_ok());

        let errs: Vec<_> = UserName::new(&"a".repeat(51)).unwrap_err().into_iter().collect();
        assert_eq!(errs, vec![ValidationError::TooLong { field: "name", max: 50 }]);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 3 characters, 9 bytes
        assert!(UserName::new("日本語").is_ok());
        // 50 characters, 100 bytes
        assert!(UserName::new(&"é".repeat(50)).is_ok());
    }

    #[test]
    fn rejects_control_characters() {
        for raw in ["a\u{0}b", "Ada\nLovelace", "Gr\u{7f}ace"] {
            let errs: Vec<_> = UserName::new(raw).unwrap_err().into_iter().collect();
            assert_eq!(errs, vec![ValidationError::ControlCharacter { field: "name" }], "{raw:?}");
        }
        // Surrounding whitespace is trimmed before the check
        assert!(UserName::new("\tAda\n").is_ok());
    }

    #[test]
    fn json_name_must_be_string() {
        let errs: Vec<_> = UserName::from_json(Some(&json!(12345)))
            .unwrap_err()
            .into_iter()
            .collect();
        assert_eq!(errs, vec![ValidationError::NotAString { field: "name" }]);
    }

    #[test]
    fn json_name_missing() {
        let missing = UserName::from_json(None).unwrap_err();
        let null = UserName::from_json(Some(&Value::Null)).unwrap_err();
        assert_eq!(missing, null);
        assert_eq!(missing.len(), 2);
    }

    #[test]
    fn user_serializes_flat() {
        let user = User {
            id: UserId::new(1).unwrap(),
            name: "Ada".into(),
        };
        assert_eq!(serde_json::to_value(&user).unwrap(), json!({"id": 1, "name": "Ada"}));
    }

    proptest! {
        #[test]
        fn prop_valid_names_round_trip_trimmed(
            core in "[A-Za-z][A-Za-z .'-]{1,47}[A-Za-z]",
            pad_left in " {0,5}",
            pad_right in "[ \t]{0,5}",
        ) {
            let raw = format!("{pad_left}{core}{pad_right}");
            let name = UserName::new(&raw).unwrap();
            prop_assert_eq!(name.as_str(), core.as_str());
        }

        #[test]
        fn prop_out_of_range_lengths_rejected(len in prop_oneof![0usize..3, 51usize..200]) {
            prop_assert!(UserName::new(&"z".repeat(len)).is_err());
        }

        #[test]
        fn prop_positive_ids_parse(id in 1i32..=i32::MAX) {
            prop_assert_eq!(UserId::parse(&id.to_string()).unwrap().get(), id);
        }

        #[test]
        fn prop_non_positive_ids_rejected(id in i32::MIN..=0i32) {
            prop_assert!(UserId::parse(&id.to_string()).is_err());
        }
    }
}
