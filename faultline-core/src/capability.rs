//! Capability shapes for building failures
//!
//! An error type plugs into the failure constructors through one of four
//! strategies. Each strategy is a trait (or, for callable pairs, a pair of
//! closure bounds), so a type that lacks every shape is rejected by the
//! compiler rather than at run time:
//!
//! ```compile_fail,E0277
//! use faultline::{make_failure, Raise};
//!
//! struct Opaque;
//! let _: f64 = make_failure::<f64, Opaque, Raise>(());
//! ```
//!
//! ```compile_fail,E0277
//! use faultline::{make_failure_via, Return};
//!
//! struct Opaque;
//! let _ = make_failure_via::<f64, Opaque, Opaque, Return>(());
//! ```
//!
//! ```compile_fail,E0277
//! use faultline::{make_failure_with, ErrorCase, Raise};
//!
//! struct Opaque;
//! // `i32` is not a fault
//! let _: f64 = make_failure_with::<f64, Opaque, Raise, _, _>(|()| ErrorCase(Opaque), |()| 42_i32, ());
//! ```
//!
//! ```compile_fail,E0277
//! use faultline::{failure, Return};
//!
//! struct Opaque;
//! let _ = failure::<f64, Return, _>(Opaque);
//! ```
//!
//! [`Strategies`] records which shapes a type supports. [`impl_strategies!`]
//! writes that record and checks each listed shape against the impls:
//!
//! ```compile_fail,E0277
//! #[derive(Debug)]
//! struct Opaque;
//! faultline::impl_strategies!(Opaque: conversion);
//! ```

use crate::error::ParseStrategyError;
use crate::failure::ErrorCase;
use crate::fault::Fault;
use std::fmt;
use std::str::FromStr;

/// In-place strategy: the error type builds both outcomes from raw arguments
///
/// Used by [`make_failure`](crate::make_failure).
pub trait FaultFactory: Sized {
    /// Arguments the failure is built from; use a tuple for several
    type Args;

    /// Fault raised under [`Raise`](crate::Raise)
    type Fault: Fault;

    /// Build the fault object
    fn fault(args: Self::Args) -> Self::Fault;

    /// Build the error value returned under [`Return`](crate::Return)
    fn from_args(args: Self::Args) -> Self;
}

/// Functor strategy: a helper type builds both outcomes for error type `E`
///
/// Lets `E` stay plain data. Used by
/// [`make_failure_via`](crate::make_failure_via).
pub trait ErrorFunctor<E> {
    /// Arguments the failure is built from
    type Args;

    /// Fault raised under [`Raise`](crate::Raise)
    type Fault: Fault;

    /// Build the fault object
    fn fault(args: Self::Args) -> Self::Fault;

    /// Build the tagged error case returned under [`Return`](crate::Return)
    fn unexpected(args: Self::Args) -> ErrorCase<E>;
}

/// Conversion strategy: an existing error value turns itself into a fault
///
/// Used by [`failure`](crate::failure).
pub trait IntoFault {
    /// Fault raised under [`Raise`](crate::Raise)
    type Fault: Fault;

    /// Build the fault object describing `self`
    fn to_fault(&self) -> Self::Fault;
}

/// Which strategies an error type can be built with
///
/// Every flag defaults to `false`. Implement it with [`impl_strategies!`](crate::impl_strategies)
/// so each flag is checked against the matching capability trait.
pub trait Strategies {
    /// [`FaultFactory`] is implemented
    const IN_PLACE: bool = false;
    /// Some helper implements [`ErrorFunctor`] for this type
    const FUNCTOR: bool = false;
    /// Call sites may build it from a callable pair
    const CALLABLE: bool = false;
    /// [`IntoFault`] is implemented
    const CONVERSION: bool = false;

    /// Highest-precedence supported strategy
    const PREFERRED: Option<FailureStrategy> = if Self::IN_PLACE {
        Some(FailureStrategy::InPlace)
    } else if Self::FUNCTOR {
        Some(FailureStrategy::Functor)
    } else if Self::CALLABLE {
        Some(FailureStrategy::Callable)
    } else if Self::CONVERSION {
        Some(FailureStrategy::Conversion)
    } else {
        None
    };

    /// Whether `strategy` is supported
    fn supports(strategy: FailureStrategy) -> bool {
        match strategy {
            FailureStrategy::InPlace => Self::IN_PLACE,
            FailureStrategy::Functor => Self::FUNCTOR,
            FailureStrategy::Callable => Self::CALLABLE,
            FailureStrategy::Conversion => Self::CONVERSION,
        }
    }

    /// Supported strategies, highest precedence first
    fn supported() -> Vec<FailureStrategy> {
        FailureStrategy::PRECEDENCE
            .into_iter()
            .filter(|&strategy| Self::supports(strategy))
            .collect()
    }
}

/// Implement [`Strategies`] from a list of shapes
///
/// Shapes are `in_place`, `functor(Helper)`, `callable` and `conversion`.
/// Listing a shape whose trait is not implemented fails to compile.
///
/// ```
/// use faultline::{impl_strategies, FailureStrategy, IntoFault, RuntimeFault, Strategies};
///
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl IntoFault for Timeout {
///     type Fault = RuntimeFault;
///
///     fn to_fault(&self) -> RuntimeFault {
///         RuntimeFault::new("timed out")
///     }
/// }
///
/// impl_strategies!(Timeout: callable, conversion);
///
/// assert_eq!(Timeout::PREFERRED, Some(FailureStrategy::Callable));
/// assert!(!Timeout::supports(FailureStrategy::InPlace));
/// ```
#[macro_export]
macro_rules! impl_strategies {
    (@flag $ty:ty, in_place) => {
        const IN_PLACE: bool = {
            fn assert_in_place<E: $crate::FaultFactory>() {}
            let _ = assert_in_place::<$ty>;
            true
        };
    };
    (@flag $ty:ty, functor, $helper:ty) => {
        const FUNCTOR: bool = {
            fn assert_functor<H: $crate::ErrorFunctor<E>, E>() {}
            let _ = assert_functor::<$helper, $ty>;
            true
        };
    };
    (@flag $ty:ty, callable) => {
        const CALLABLE: bool = true;
    };
    (@flag $ty:ty, conversion) => {
        const CONVERSION: bool = {
            fn assert_conversion<E: $crate::IntoFault>() {}
            let _ = assert_conversion::<$ty>;
            true
        };
    };
    ($ty:ty: $($shape:ident $(($helper:ty))?),+ $(,)?) => {
        impl $crate::Strategies for $ty {
            $($crate::impl_strategies!(@flag $ty, $shape $(, $helper)?);)+
        }
    };
}

/// The four ways of wiring an error type into the failure constructors
///
/// Declaration order is precedence order, most specific first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FailureStrategy {
    /// [`FaultFactory`] on the error type
    InPlace,
    /// [`ErrorFunctor`] on a helper type
    Functor,
    /// Two closures supplied at the call site
    Callable,
    /// [`IntoFault`] on an existing error value
    Conversion,
}

impl FailureStrategy {
    /// Every strategy, highest precedence first
    pub const PRECEDENCE: [FailureStrategy; 4] = [
        FailureStrategy::InPlace,
        FailureStrategy::Functor,
        FailureStrategy::Callable,
        FailureStrategy::Conversion,
    ];

    /// Kebab-case name, as accepted by [`FromStr`]
    pub const fn as_str(self) -> &'static str {
        match self {
            FailureStrategy::InPlace => "in-place",
            FailureStrategy::Functor => "functor",
            FailureStrategy::Callable => "callable",
            FailureStrategy::Conversion => "conversion",
        }
    }

    /// Position in [`PRECEDENCE`](Self::PRECEDENCE), 0 being the highest
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Pick the highest-precedence strategy out of `supported`
    ///
    /// Agrees with [`Strategies::PREFERRED`] for `T::supported()`.
    pub fn preferred(supported: impl IntoIterator<Item = FailureStrategy>) -> Option<Self> {
        supported.into_iter().min()
    }
}

impl fmt::Display for FailureStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailureStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "in-place" | "inplace" => Ok(FailureStrategy::InPlace),
            "functor" => Ok(FailureStrategy::Functor),
            "callable" => Ok(FailureStrategy::Callable),
            "conversion" => Ok(FailureStrategy::Conversion),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::RuntimeFault;

    #[derive(Debug)]
    struct Timeout;

    impl IntoFault for Timeout {
        type Fault = RuntimeFault;

        fn to_fault(&self) -> RuntimeFault {
            RuntimeFault::new("timed out")
        }
    }

    impl_strategies!(Timeout: conversion);

    #[derive(Debug)]
    struct Rejected;

    impl FaultFactory for Rejected {
        type Args = ();
        type Fault = RuntimeFault;

        fn fault(_: ()) -> RuntimeFault {
            RuntimeFault::new("rejected")
        }

        fn from_args(_: ()) -> Self {
            Rejected
        }
    }

    impl IntoFault for Rejected {
        type Fault = RuntimeFault;

        fn to_fault(&self) -> RuntimeFault {
            RuntimeFault::new("rejected")
        }
    }

    struct RejectedFunctor;

    impl ErrorFunctor<Rejected> for RejectedFunctor {
        type Args = ();
        type Fault = RuntimeFault;

        fn fault(_: ()) -> RuntimeFault {
            RuntimeFault::new("rejected")
        }

        fn unexpected(_: ()) -> ErrorCase<Rejected> {
            ErrorCase::new(Rejected)
        }
    }

    // Listed out of precedence order on purpose
    impl_strategies!(Rejected: conversion, functor(RejectedFunctor), in_place);

    struct Bare;

    impl Strategies for Bare {}

    #[test]
    fn test_conversion_only_type_prefers_conversion() {
        assert_eq!(Timeout::PREFERRED, Some(FailureStrategy::Conversion));
        assert_eq!(Timeout::supported(), vec![FailureStrategy::Conversion]);
        assert!(!Timeout::supports(FailureStrategy::InPlace));
        assert!(!Timeout::supports(FailureStrategy::Callable));
    }

    #[test]
    fn test_supported_follows_precedence() {
        use FailureStrategy::*;

        assert_eq!(Rejected::supported(), vec![InPlace, Functor, Conversion]);
        assert_eq!(Rejected::PREFERRED, Some(InPlace));
        assert!(!Rejected::supports(Callable));
    }

    #[test]
    fn test_preferred_agrees_with_declared_set() {
        assert_eq!(FailureStrategy::preferred(Timeout::supported()), Timeout::PREFERRED);
        assert_eq!(FailureStrategy::preferred(Rejected::supported()), Rejected::PREFERRED);
        assert_eq!(FailureStrategy::preferred(Bare::supported()), Bare::PREFERRED);
    }

    #[test]
    fn test_no_declared_strategy() {
        assert_eq!(Bare::PREFERRED, None);
        assert!(Bare::supported().is_empty());
    }

    #[test]
    fn test_precedence_order() {
        let ranks: Vec<usize> = FailureStrategy::PRECEDENCE
            .iter()
            .map(|s| s.rank())
            .collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
        assert!(FailureStrategy::InPlace < FailureStrategy::Conversion);
    }

    #[test]
    fn test_preferred_picks_most_specific() {
        use FailureStrategy::*;

        assert_eq!(FailureStrategy::preferred([Conversion, Functor]), Some(Functor));
        assert_eq!(FailureStrategy::preferred([Callable, InPlace, Conversion]), Some(InPlace));
        assert_eq!(FailureStrategy::preferred([Conversion]), Some(Conversion));
        assert_eq!(FailureStrategy::preferred([]), None);
    }

    #[test]
    fn test_strategy_names_parse() {
        for strategy in FailureStrategy::PRECEDENCE {
            assert_eq!(strategy.as_str().parse::<FailureStrategy>(), Ok(strategy));
        }
        assert_eq!("In_Place".parse::<FailureStrategy>(), Ok(FailureStrategy::InPlace));
        assert!("overload".parse::<FailureStrategy>().is_err());
    }
}
