//! Write an operation's failure logic once, pick how it surfaces per call
//!
//! An operation is written generic over a [`Policy`]. Callers choose the
//! policy at compile time:
//!
//! - [`Raise`]: the operation returns its bare success type and failures
//!   unwind to the nearest [`catch_fault`] with a [`Raised`] payload.
//! - [`Return`]: the operation returns `Result<R, E>` and failures come back
//!   as `Err`.
//!
//! [`DefaultPolicy`] is `Raise` unless the `default-return` cargo feature is
//! enabled.
//!
//! # Example
//!
//! ```rust
//! use faultline::{
//!     catch_fault, make_failure, success, FaultFactory, Policy, Raise, ResolvedReturn, Return,
//!     RuntimeFault,
//! };
//!
//! #[derive(Debug, PartialEq)]
//! struct DivideByZero;
//!
//! impl FaultFactory for DivideByZero {
//!     type Args = ();
//!     type Fault = RuntimeFault;
//!
//!     fn fault(_: ()) -> RuntimeFault {
//!         RuntimeFault::new("Division by Zero")
//!     }
//!
//!     fn from_args(_: ()) -> Self {
//!         DivideByZero
//!     }
//! }
//!
//! fn divide<P: Policy>(numerator: i32, denominator: i32) -> ResolvedReturn<f64, DivideByZero, P> {
//!     if denominator == 0 {
//!         return make_failure::<f64, DivideByZero, P>(());
//!     }
//!     success::<f64, DivideByZero, P>(f64::from(numerator) / f64::from(denominator))
//! }
//!
//! assert_eq!(divide::<Raise>(1, 2), 0.5);
//! assert_eq!(divide::<Return>(1, 2), Ok(0.5));
//! assert_eq!(divide::<Return>(1, 0), Err(DivideByZero));
//!
//! let raised = catch_fault(|| divide::<Raise>(1, 0)).unwrap_err();
//! assert_eq!(raised.description(), "Division by Zero");
//! ```
//!
//! # Failure strategies
//!
//! | Strategy | Capability | Entry point |
//! |---|---|---|
//! | in-place | [`FaultFactory`] on `E` | [`make_failure`] |
//! | functor | [`ErrorFunctor<E>`] on a helper | [`make_failure_via`] |
//! | callable pair | two closures | [`make_failure_with`] |
//! | conversion | [`IntoFault`] on an `E` value | [`failure`] |
//!
//! Each entry point names its strategy, so the author's choice is always the
//! one used. An error type declares the strategies it supports with
//! [`impl_strategies!`], and [`Strategies::PREFERRED`] applies the precedence
//! (in-place, functor, callable, conversion) when code has to pick one.

#![warn(missing_docs)]

pub mod capability;
pub mod error;
pub mod failure;
pub mod fault;
pub mod policy;
pub mod success;

pub use capability::{ErrorFunctor, FailureStrategy, FaultFactory, IntoFault, Strategies};
pub use error::{NoError, ParsePolicyError, ParseStrategyError};
pub use failure::{failure, make_failure, make_failure_via, make_failure_with, ErrorCase};
pub use fault::{catch_fault, catch_fault_of, raise, Fault, Raised, RuntimeFault};
pub use policy::{DefaultPolicy, Policy, PolicyKind, Raise, ResolvedReturn, Return};
pub use success::{success, success_unit};
