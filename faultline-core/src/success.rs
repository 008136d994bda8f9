//! Success constructors

use crate::policy::{Policy, ResolvedReturn};

/// Succeed with `value`
///
/// Returns `value` itself under [`Raise`](crate::Raise) and `Ok(value)` under
/// [`Return`](crate::Return).
#[inline(always)]
pub fn success<R, E, P: Policy>(value: R) -> ResolvedReturn<R, E, P> {
    P::succeed::<R, E>(value)
}

/// Succeed without a payload
#[inline(always)]
pub fn success_unit<E, P: Policy>() -> ResolvedReturn<(), E, P> {
    P::succeed::<(), E>(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoError;
    use crate::policy::{Raise, Return};

    #[test]
    fn test_success_raise_is_identity() {
        assert_eq!(success::<_, NoError, Raise>(String::from("ok")), "ok");
    }

    #[test]
    fn test_success_return_wraps_ok() {
        assert_eq!(success::<_, NoError, Return>(0.5_f64), Ok(0.5));
    }

    #[test]
    fn test_success_unit() {
        let () = success_unit::<NoError, Raise>();
        assert_eq!(success_unit::<NoError, Return>(), Ok(()));
    }
}
