//! Raised faults and the handlers that catch them
//!
//! Under [`Raise`](crate::Raise) a failure leaves the operation by unwinding.
//! The panic payload is always a [`Raised`], which owns the fault object the
//! failing strategy built. [`catch_fault`] and [`catch_fault_of`] play the
//! role of the enclosing handler. Raising requires `panic = "unwind"`.
//!
//! Raising never runs the process panic hook, so a fault that is caught
//! leaves no trace on stderr.

use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe, Location};
use thiserror::Error;

/// An object that can be raised through the [`Raise`](crate::Raise) policy
///
/// Every thread-safe `'static` error type is a fault. Its `Display` output
/// is the fault's description.
pub trait Fault: StdError + Send + Sync + 'static {}

impl<T: StdError + Send + Sync + 'static> Fault for T {}

/// General-purpose fault carrying only a description
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{description}")]
pub struct RuntimeFault {
    description: String,
}

impl RuntimeFault {
    /// Create a fault with the given description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl From<&str> for RuntimeFault {
    fn from(description: &str) -> Self {
        Self::new(description)
    }
}

impl From<String> for RuntimeFault {
    fn from(description: String) -> Self {
        Self::new(description)
    }
}

/// Unwinding payload of a raised fault
pub struct Raised {
    fault: Box<dyn StdError + Send + Sync>,
}

impl Raised {
    /// Wrap a fault object
    pub fn new<F: Fault>(fault: F) -> Self {
        Self {
            fault: Box::new(fault),
        }
    }

    /// Description of the wrapped fault
    pub fn description(&self) -> String {
        self.fault.to_string()
    }

    /// Borrow the wrapped fault
    pub fn fault(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.fault
    }

    /// Whether the wrapped fault has concrete type `F`
    pub fn is<F: Fault>(&self) -> bool {
        self.fault.is::<F>()
    }

    /// Borrow the wrapped fault as `F`
    pub fn downcast_ref<F: Fault>(&self) -> Option<&F> {
        self.fault.downcast_ref::<F>()
    }

    /// Take the wrapped fault as `F`, or give `self` back
    pub fn downcast<F: Fault>(self) -> Result<F, Self> {
        match self.fault.downcast::<F>() {
            Ok(fault) => Ok(*fault),
            Err(fault) => Err(Self { fault }),
        }
    }

    /// Unwrap into the boxed fault object
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync> {
        self.fault
    }

    /// Continue unwinding with this payload
    pub fn resume(self) -> ! {
        panic::resume_unwind(Box::new(self))
    }
}

impl fmt::Debug for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raised").field("fault", &self.fault).finish()
    }
}

impl fmt::Display for Raised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.fault, f)
    }
}

impl StdError for Raised {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.fault)
    }
}

/// Raise `fault`, unwinding to the nearest handler
#[cold]
#[track_caller]
pub fn raise<F: Fault>(fault: F) -> ! {
    log::debug!("fault raised at {}: {fault}", Location::caller());
    panic::resume_unwind(Box::new(Raised::new(fault)))
}

/// Run `operation`, catching any raised fault
///
/// Panics that do not carry a [`Raised`] payload keep unwinding. State the
/// operation mutated before raising is observable afterwards.
pub fn catch_fault<T>(operation: impl FnOnce() -> T) -> Result<T, Raised> {
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Raised>() {
            Ok(raised) => {
                log::trace!("caught fault: {raised}");
                Err(*raised)
            }
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// Run `operation`, catching only faults of concrete type `F`
///
/// Faults of any other type continue unwinding to an outer handler.
pub fn catch_fault_of<F: Fault, T>(operation: impl FnOnce() -> T) -> Result<T, F> {
    catch_fault(operation).map_err(|raised| match raised.downcast::<F>() {
        Ok(fault) => fault,
        Err(raised) => raised.resume(),
    })
}
