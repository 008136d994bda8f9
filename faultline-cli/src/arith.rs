//! Division with a policy-selected failure channel
//!
//! [`DivideByError`] is wired into every failure strategy so the harness can
//! show that the strategy is invisible to callers.

use faultline::{
    failure, impl_strategies, make_failure, make_failure_via, make_failure_with, success,
    DefaultPolicy, ErrorCase, ErrorFunctor, FailureStrategy, FaultFactory, IntoFault, Policy,
    ResolvedReturn, RuntimeFault, Strategies,
};
use std::fmt;

/// What went wrong in a division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DivideErrorKind {
    /// The denominator was zero
    DivideByZero,
}

impl DivideErrorKind {
    /// Human-readable description
    pub const fn as_str(self) -> &'static str {
        match self {
            DivideErrorKind::DivideByZero => "Division by Zero",
        }
    }
}

/// Error value of a failed division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DivideByError {
    /// Failure kind
    pub kind: DivideErrorKind,
}

impl DivideByError {
    /// Create an error of the given kind
    pub const fn new(kind: DivideErrorKind) -> Self {
        Self { kind }
    }

    /// Human-readable description
    pub fn describe(&self) -> &'static str {
        self.kind.as_str()
    }
}

impl fmt::Display for DivideByError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl std::error::Error for DivideByError {}

impl FaultFactory for DivideByError {
    type Args = DivideErrorKind;
    type Fault = RuntimeFault;

    fn fault(kind: DivideErrorKind) -> RuntimeFault {
        RuntimeFault::new(kind.as_str())
    }

    fn from_args(kind: DivideErrorKind) -> Self {
        Self::new(kind)
    }
}

impl IntoFault for DivideByError {
    type Fault = RuntimeFault;

    fn to_fault(&self) -> RuntimeFault {
        RuntimeFault::new(self.describe())
    }
}

/// Helper building [`DivideByError`] outcomes for the functor strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct DivideByErrorFunctor;

impl ErrorFunctor<DivideByError> for DivideByErrorFunctor {
    type Args = DivideErrorKind;
    type Fault = RuntimeFault;

    fn fault(kind: DivideErrorKind) -> RuntimeFault {
        RuntimeFault::new(kind.as_str())
    }

    fn unexpected(kind: DivideErrorKind) -> ErrorCase<DivideByError> {
        ErrorCase::new(DivideByError::new(kind))
    }
}

impl_strategies!(
    DivideByError: in_place,
    functor(DivideByErrorFunctor),
    callable,
    conversion
);

/// Strategy used when none is configured
pub const DEFAULT_STRATEGY: FailureStrategy = match DivideByError::PREFERRED {
    Some(strategy) => strategy,
    None => panic!("DivideByError declares no failure strategy"),
};

/// Divide `numerator` by `denominator` under policy `P`
///
/// `strategy` only selects how the failure is built internally; the outcome
/// is the same for all of them.
pub fn divide_by<P: Policy>(
    strategy: FailureStrategy,
    numerator: i32,
    denominator: i32,
) -> ResolvedReturn<f64, DivideByError, P> {
    type Error = DivideByError;

    log::debug!(
        "dividing {numerator} by {denominator} ({} policy, {strategy} strategy)",
        P::KIND
    );

    if denominator == 0 {
        let kind = DivideErrorKind::DivideByZero;
        return match strategy {
            FailureStrategy::InPlace => make_failure::<f64, Error, P>(kind),
            FailureStrategy::Functor => {
                make_failure_via::<f64, Error, DivideByErrorFunctor, P>(kind)
            }
            FailureStrategy::Callable => make_failure_with::<f64, Error, P, _, _>(
                |kind| ErrorCase::new(DivideByError::new(kind)),
                |kind: DivideErrorKind| RuntimeFault::new(kind.as_str()),
                kind,
            ),
            FailureStrategy::Conversion => failure::<f64, P, _>(DivideByError::new(kind)),
        };
    }

    success::<f64, Error, P>(f64::from(numerator) / f64::from(denominator))
}

/// Divide under the build-time default policy with the preferred strategy
pub fn divide(numerator: i32, denominator: i32) -> ResolvedReturn<f64, DivideByError> {
    divide_by::<DefaultPolicy>(DEFAULT_STRATEGY, numerator, denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultline::{catch_fault, PolicyKind, Raise, Return};

    #[test]
    fn test_error_display() {
        let error = DivideByError::new(DivideErrorKind::DivideByZero);
        assert_eq!(error.to_string(), "Division by Zero");
        assert_eq!(error.describe(), "Division by Zero");
    }

    #[test]
    fn test_declared_strategies() {
        assert_eq!(DivideByError::supported(), FailureStrategy::PRECEDENCE.to_vec());
        assert_eq!(DEFAULT_STRATEGY, FailureStrategy::InPlace);
        assert_eq!(
            FailureStrategy::preferred(DivideByError::supported()),
            Some(DEFAULT_STRATEGY)
        );
    }

    #[test]
    fn test_divide_by_return() {
        for strategy in DivideByError::supported() {
            assert_eq!(divide_by::<Return>(strategy, 1, 2), Ok(0.5));
            assert_eq!(
                divide_by::<Return>(strategy, 1, 0),
                Err(DivideByError::new(DivideErrorKind::DivideByZero))
            );
        }
    }

    #[test]
    fn test_divide_by_raise() {
        for strategy in DivideByError::supported() {
            assert_eq!(divide_by::<Raise>(strategy, -3, 2), -1.5);
            let raised = catch_fault(|| divide_by::<Raise>(strategy, 1, 0)).unwrap_err();
            assert_eq!(raised.description(), "Division by Zero");
        }
    }

    #[test]
    fn test_divide_follows_default_policy() {
        let outcome =
            catch_fault(|| DefaultPolicy::into_result::<f64, DivideByError>(divide(1, 0)));
        match PolicyKind::DEFAULT {
            PolicyKind::Raise => assert!(outcome.is_err()),
            PolicyKind::Return => assert!(matches!(outcome, Ok(Err(_)))),
        }
    }
}
