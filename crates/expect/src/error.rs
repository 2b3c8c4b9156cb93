/// Errors raised by the comparator when it is handed input it cannot judge.
///
/// Both variants signal misuse of the API rather than a failed assertion.
/// The assertion layer turns them into an immediate panic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpectError {
    /// The value's representation is outside the supported scalar set.
    #[error("unsupported type for comparison {type_name}")]
    UnsupportedType { type_name: String },

    /// An ordering comparison was attempted on a Text or Boolean operand.
    #[error("can't compare {left} and {right}")]
    NotComparable { left: String, right: String },
}

impl ExpectError {
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        ExpectError::UnsupportedType {
            type_name: type_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_variant() {
        let err = ExpectError::unsupported("object");
        assert_eq!(err.to_string(), "unsupported type for comparison object");

        let err = ExpectError::NotComparable {
            left: "str".to_string(),
            right: "i64".to_string(),
        };
        assert_eq!(err.to_string(), "can't compare str and i64");
    }
}
