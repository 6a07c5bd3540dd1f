//! Guard predicates for gating declarative dispatch rules.
//!
//! Guards are pure boolean functions evaluated against the arguments of a
//! single dispatch call. They let table-driven handlers express conditional
//! transitions without side effects.

/// Pure predicate that determines if a dispatch rule applies.
///
/// Guards are evaluated before a table rule fires. They encapsulate
/// pre-conditions as pure functions over the per-call arguments.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Guard;
///
/// struct Inventory {
///     remaining: u32,
/// }
///
/// let has_stock = Guard::new(|inv: &Inventory| inv.remaining > 0);
///
/// assert!(has_stock.check(&Inventory { remaining: 3 }));
/// assert!(!has_stock.check(&Inventory { remaining: 0 }));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows the rule to fire for this input.
    ///
    /// This is a pure function that evaluates the predicate without
    /// any side effects.
    pub fn check(&self, input: &T) -> bool {
        (self.predicate)(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_allows_matching_inputs() {
        let guard = Guard::new(|n: &u32| *n >= 10);

        assert!(guard.check(&10));
        assert!(guard.check(&42));
        assert!(!guard.check(&9));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|n: &u32| n % 2 == 0);

        let result1 = guard.check(&4);
        let result2 = guard.check(&4);

        assert_eq!(result1, result2);
    }

    #[test]
    fn guard_works_on_unit_args() {
        let always = Guard::new(|_: &()| true);
        let never = Guard::new(|_: &()| false);

        assert!(always.check(&()));
        assert!(!never.check(&()));
    }

    #[test]
    fn guard_can_use_complex_predicates() {
        struct Request {
            amount: i64,
            approved: bool,
        }

        let guard = Guard::new(|r: &Request| r.approved && r.amount > 0);

        assert!(guard.check(&Request {
            amount: 5,
            approved: true
        }));
        assert!(!guard.check(&Request {
            amount: 5,
            approved: false
        }));
        assert!(!guard.check(&Request {
            amount: -1,
            approved: true
        }));
    }
}
