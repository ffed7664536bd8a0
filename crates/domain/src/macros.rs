//! Macro for implementing Display and FromStr for status enums
//!
//! Statuses are rendered in the report exactly as written in the mapping and
//! parsed back case-insensitively.
//!
//! # Example
//!
//! ```rust
//! use harvestmine_domain::impl_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Outcome {
//!     Logged,
//!     Failed,
//! }
//!
//! impl_status_conversions!(Outcome {
//!     Logged => "Logged",
//!     Failed => "Failed",
//! });
//!
//! assert_eq!(Outcome::Logged.to_string(), "Logged");
//! assert_eq!("failed".parse::<Outcome>(), Ok(Outcome::Failed));
//! ```

/// Implements Display and FromStr traits for status enums
#[macro_export]
macro_rules! impl_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Pending,
        Done,
    }

    impl_status_conversions!(TestStatus {
        Pending => "Pending",
        Done => "Done",
    });

    #[test]
    fn display_uses_mapping_verbatim() {
        assert_eq!(TestStatus::Pending.to_string(), "Pending");
        assert_eq!(TestStatus::Done.to_string(), "Done");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(TestStatus::from_str("pending").unwrap(), TestStatus::Pending);
        assert_eq!(TestStatus::from_str("DONE").unwrap(), TestStatus::Done);
    }

    #[test]
    fn rejects_unknown_values() {
        let err = TestStatus::from_str("archived").unwrap_err();
        assert!(err.contains("Invalid TestStatus: archived"));
        assert!(TestStatus::from_str("").is_err());
    }
}
