//! Failure-signaling policies and the result-type resolver
//!
//! A policy decides at compile time how an operation reports failure.
//! [`Raise`] unwinds the stack with a [`Raised`](crate::Raised) payload and
//! [`Return`] hands back a `Result`. Both are zero-sized markers; the only
//! thing that survives to run time is their [`PolicyKind`].

use crate::error::{NoError, ParsePolicyError};
use crate::fault::{raise, Fault};
use std::fmt;
use std::str::FromStr;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Raise {}
    impl Sealed for super::Return {}
}

/// Runtime mirror of a [`Policy`] marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PolicyKind {
    /// Failures unwind to the nearest enclosing handler
    Raise,
    /// Failures are returned as the `Err` case
    Return,
}

impl PolicyKind {
    /// Kind of the build-time [`DefaultPolicy`]
    pub const DEFAULT: PolicyKind = DefaultPolicy::KIND;

    /// Every policy, in declaration order
    pub const ALL: [PolicyKind; 2] = [PolicyKind::Raise, PolicyKind::Return];

    /// Lowercase name, as accepted by [`FromStr`]
    pub const fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Raise => "raise",
            PolicyKind::Return => "return",
        }
    }

    /// Whether this is the build-time default
    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }
}

impl Default for PolicyKind {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raise" => Ok(PolicyKind::Raise),
            "return" => Ok(PolicyKind::Return),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

/// Compile-time failure-signaling policy
///
/// Sealed: [`Raise`] and [`Return`] are the only implementations. Operations
/// are written once, generic over `P: Policy`, and every call site picks the
/// channel by naming the marker. Monomorphization drops the unused channel.
pub trait Policy:
    sealed::Sealed + Copy + Default + fmt::Debug + Send + Sync + 'static
{
    /// Runtime tag of this policy
    const KIND: PolicyKind;

    /// What an operation with success type `R` and error type `E` returns
    type Output<R, E>;

    /// Build the success outcome
    fn succeed<R, E>(value: R) -> Self::Output<R, E>;

    /// Build the failure outcome
    ///
    /// Exactly one of `to_error` and `to_fault` is called with `args`.
    fn fail<R, E, A, F>(
        args: A,
        to_error: impl FnOnce(A) -> E,
        to_fault: impl FnOnce(A) -> F,
    ) -> Self::Output<R, E>
    where
        F: Fault;

    /// View an outcome produced under this policy as a `Result`
    ///
    /// Lets policy-generic callers inspect outcomes uniformly; under
    /// [`Raise`] any outcome that reached the caller is a success.
    fn into_result<R, E>(output: Self::Output<R, E>) -> Result<R, E>;
}

/// Failures unwind the stack carrying a fault object
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Raise;

/// Failures are returned as `Err`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Return;

impl Policy for Raise {
    const KIND: PolicyKind = PolicyKind::Raise;

    type Output<R, E> = R;

    #[inline(always)]
    fn succeed<R, E>(value: R) -> R {
        value
    }

    #[track_caller]
    fn fail<R, E, A, F>(
        args: A,
        _to_error: impl FnOnce(A) -> E,
        to_fault: impl FnOnce(A) -> F,
    ) -> R
    where
        F: Fault,
    {
        raise(to_fault(args))
    }

    #[inline(always)]
    fn into_result<R, E>(output: R) -> Result<R, E> {
        Ok(output)
    }
}

impl Policy for Return {
    const KIND: PolicyKind = PolicyKind::Return;

    type Output<R, E> = Result<R, E>;

    #[inline(always)]
    fn succeed<R, E>(value: R) -> Result<R, E> {
        Ok(value)
    }

    #[inline]
    fn fail<R, E, A, F>(
        args: A,
        to_error: impl FnOnce(A) -> E,
        _to_fault: impl FnOnce(A) -> F,
    ) -> Result<R, E>
    where
        F: Fault,
    {
        Err(to_error(args))
    }

    #[inline(always)]
    fn into_result<R, E>(output: Result<R, E>) -> Result<R, E> {
        output
    }
}

/// Process-wide default policy, chosen by the `default-return` cargo feature
#[cfg(not(feature = "default-return"))]
pub type DefaultPolicy = Raise;

/// Process-wide default policy, chosen by the `default-return` cargo feature
#[cfg(feature = "default-return")]
pub type DefaultPolicy = Return;

/// Concrete return type of an operation for a given policy
///
/// `R` under [`Raise`], `Result<R, E>` under [`Return`]. A unit `R` gives `()`
/// and `Result<(), E>` respectively.
pub type ResolvedReturn<R, E = NoError, P = DefaultPolicy> = <P as Policy>::Output<R, E>;
