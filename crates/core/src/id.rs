//! Identifier assignment.

use crate::error::{DomainError, DomainResult};

/// Monotonic identifier sequence.
///
/// Hands out strictly increasing `u64` values. Identifiers that enter the
/// system from elsewhere (seed data) must be reported through [`observe`] so
/// the sequence never re-issues them.
///
/// [`observe`]: IdSequence::observe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Start a sequence whose first issued value is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first.max(1) }
    }

    /// Issue the next identifier.
    ///
    /// Fails once the sequence has no value left above everything it issued or
    /// observed. `u64::MAX` itself is never issued.
    pub fn next_id(&mut self) -> DomainResult<u64> {
        let id = self.next;
        if id == u64::MAX {
            return Err(exhausted(id));
        }
        self.next = id + 1;
        Ok(id)
    }

    /// Record an externally assigned identifier; later values will exceed it.
    ///
    /// `u64::MAX` is rejected: nothing could be issued after it.
    pub fn observe(&mut self, id: u64) -> DomainResult<()> {
        if id == u64::MAX {
            return Err(exhausted(id));
        }
        if id >= self.next {
            self.next = id + 1;
        }
        Ok(())
    }

    /// The value the next call to [`next_id`](IdSequence::next_id) returns.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

fn exhausted(at: u64) -> DomainError {
    DomainError::conflict(format!("id space exhausted at {at}"))
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_one_by_default() {
        let mut seq = IdSequence::default();
        assert_eq!(seq.next_id().unwrap(), 1);
        assert_eq!(seq.next_id().unwrap(), 2);
    }

    #[test]
    fn observe_skips_past_external_ids() {
        let mut seq = IdSequence::default();
        seq.observe(12).unwrap();
        assert_eq!(seq.next_id().unwrap(), 13);

        // Lower ids do not move the sequence backwards.
        seq.observe(4).unwrap();
        assert_eq!(seq.next_id().unwrap(), 14);
    }

    #[test]
    fn observing_the_largest_id_is_rejected() {
        let mut seq = IdSequence::default();
        let err = seq.observe(u64::MAX).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        // The sequence is left where it was.
        assert_eq!(seq.peek(), 1);
    }

    #[test]
    fn exhausted_sequence_errors_instead_of_repeating() {
        let mut seq = IdSequence::default();
        seq.observe(u64::MAX - 2).unwrap();
        assert_eq!(seq.next_id().unwrap(), u64::MAX - 1);
        assert!(seq.next_id().is_err());
        assert!(seq.next_id().is_err());
        assert_eq!(seq.peek(), u64::MAX);
    }

    #[test]
    fn zero_start_is_bumped_to_one() {
        let seq = IdSequence::starting_at(0);
        assert_eq!(seq.peek(), 1);
    }

    proptest! {
        #[test]
        fn issued_ids_strictly_increase(observed in proptest::collection::vec(0u64..1_000, 0..20), draws in 1usize..50) {
            let mut seq = IdSequence::default();
            for id in &observed {
                seq.observe(*id).unwrap();
            }
            let max_observed = observed.iter().copied().max().unwrap_or(0);
            let mut last = 0;
            for _ in 0..draws {
                let id = seq.next_id().unwrap();
                prop_assert!(id > last);
                prop_assert!(id > max_observed);
                last = id;
            }
        }
    }
}
