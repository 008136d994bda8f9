//! Library error types

use thiserror::Error;

/// Error marker for operations that never fail
///
/// This is the default error type of [`ResolvedReturn`](crate::ResolvedReturn).
#[derive(Error, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[error("no error")]
pub struct NoError;

/// Returned when a string does not name a policy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown policy '{0}', expected 'raise' or 'return'")]
pub struct ParsePolicyError(pub String);

/// Returned when a string does not name a failure strategy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown failure strategy '{0}', expected one of: in-place, functor, callable, conversion")]
pub struct ParseStrategyError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy_error_display() {
        let error = ParsePolicyError("throw".to_string());
        assert_eq!(
            error.to_string(),
            "unknown policy 'throw', expected 'raise' or 'return'"
        );
    }

    #[test]
    fn test_parse_strategy_error_display() {
        let error = ParseStrategyError("magic".to_string());
        assert!(error.to_string().starts_with("unknown failure strategy 'magic'"));
        assert!(error.to_string().contains("conversion"));
    }

    #[test]
    fn test_no_error_is_an_error_type() {
        let _: &dyn std::error::Error = &NoError;
        assert_eq!(NoError.to_string(), "no error");
        assert_eq!(NoError::default(), NoError);
    }
}
