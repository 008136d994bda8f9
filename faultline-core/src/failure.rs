//! Failure constructors
//!
//! Four entry points, one per strategy. For the same `(R, E, P)` and the same
//! logical arguments they all produce the same outcome: under
//! [`Raise`](crate::Raise) they never return and unwind with the strategy's
//! fault, under [`Return`](crate::Return) they return `Err` holding the error
//! value.

use crate::capability::{ErrorFunctor, FaultFactory, IntoFault};
use crate::fault::Fault;
use crate::policy::{Policy, ResolvedReturn};
use std::convert::identity;

/// The error-bearing branch of a [`Return`](crate::Return) outcome
///
/// Functor helpers and callable pairs produce this to mark a value as the
/// error case rather than a success payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct ErrorCase<E>(pub E);

impl<E> ErrorCase<E> {
    /// Tag `error` as the error case
    pub const fn new(error: E) -> Self {
        Self(error)
    }

    /// Borrow the error value
    pub fn error(&self) -> &E {
        &self.0
    }

    /// Take the error value
    pub fn into_inner(self) -> E {
        self.0
    }

    /// Turn into an `Err`
    pub fn into_result<R>(self) -> Result<R, E> {
        Err(self.0)
    }
}

impl<E> From<E> for ErrorCase<E> {
    fn from(error: E) -> Self {
        Self(error)
    }
}

/// Fail using the in-place strategy
///
/// Raises `E::fault(args)` or returns `Err(E::from_args(args))`.
#[track_caller]
pub fn make_failure<R, E, P>(args: E::Args) -> ResolvedReturn<R, E, P>
where
    E: FaultFactory,
    P: Policy,
{
    P::fail::<R, E, _, _>(args, E::from_args, E::fault)
}

/// Fail using the functor strategy with helper `H`
///
/// Raises `H::fault(args)` or returns the error case from `H::unexpected(args)`.
#[track_caller]
pub fn make_failure_via<R, E, H, P>(args: H::Args) -> ResolvedReturn<R, E, P>
where
    H: ErrorFunctor<E>,
    P: Policy,
{
    P::fail::<R, E, _, _>(args, |args| H::unexpected(args).into_inner(), H::fault)
}

/// Fail using a callable pair supplied at the call site
///
/// Raises `to_fault(args)` or returns the error case from `to_error(args)`.
#[track_caller]
pub fn make_failure_with<R, E, P, A, F>(
    to_error: impl FnOnce(A) -> ErrorCase<E>,
    to_fault: impl FnOnce(A) -> F,
    args: A,
) -> ResolvedReturn<R, E, P>
where
    P: Policy,
    F: Fault,
{
    P::fail::<R, E, _, _>(args, |args| to_error(args).into_inner(), to_fault)
}

/// Fail with an already-built error value
///
/// Raises `error.to_fault()` or returns `Err(error)` unchanged.
#[track_caller]
pub fn failure<R, P, E>(error: E) -> ResolvedReturn<R, E, P>
where
    P: Policy,
    E: IntoFault,
{
    P::fail::<R, E, _, _>(error, identity, |error| error.to_fault())
}
