//! Idle → Pending → Complete lifecycle for a simulated backend call.
//!
//! Each trigger hands out a [`Ticket`]; a completion is only accepted for the
//! ticket of the run currently pending, so a result that arrives after a
//! reset is dropped instead of resurrecting stale output.
//!
//! Re-triggering while a run is pending is ignored. Triggering from
//! `Complete` starts a fresh run.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OperationState<T> {
    #[default]
    Idle,
    Pending,
    Complete(T),
}

/// Identifies one run of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockOperation<T> {
    run_id: u64,
    state: OperationState<T>,
}

impl<T> Default for MockOperation<T> {
    fn default() -> Self {
        Self {
            run_id: 0,
            state: OperationState::Idle,
        }
    }
}

impl<T> MockOperation<T> {
    pub fn state(&self) -> &OperationState<T> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, OperationState::Pending)
    }

    pub fn result(&self) -> Option<&T> {
        match &self.state {
            OperationState::Complete(value) => Some(value),
            _ => None,
        }
    }

    /// Start a run. Returns `None` (and changes nothing) if one is pending.
    pub fn trigger(&mut self) -> Option<Ticket> {
        if self.is_pending() {
            return None;
        }
        self.run_id += 1;
        self.state = OperationState::Pending;
        Some(Ticket(self.run_id))
    }

    /// Deliver the result for `ticket`. Stale tickets are ignored.
    pub fn complete(&mut self, ticket: Ticket, value: T) -> bool {
        if ticket.0 != self.run_id || !self.is_pending() {
            return false;
        }
        self.state = OperationState::Complete(value);
        true
    }

    /// Back to idle; any in-flight run is orphaned.
    pub fn reset(&mut self) {
        self.run_id += 1;
        self.state = OperationState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let op = MockOperation::<u8>::default();
        assert_eq!(op.state(), &OperationState::Idle);
        assert_eq!(op.result(), None);
    }

    #[test]
    fn trigger_then_complete() {
        let mut op = MockOperation::default();
        let ticket = op.trigger().expect("idle operation accepts a trigger");
        assert_eq!(op.state(), &OperationState::Pending);

        assert!(op.complete(ticket, "Leaf Rust"));
        assert_eq!(op.result(), Some(&"Leaf Rust"));
    }

    #[test]
    fn trigger_while_pending_is_ignored() {
        let mut op = MockOperation::default();
        let first = op.trigger().unwrap();
        assert!(op.trigger().is_none());

        assert!(op.complete(first, 1));
        assert_eq!(op.result(), Some(&1));
    }

    #[test]
    fn trigger_after_completion_starts_a_new_run() {
        let mut op = MockOperation::default();
        let first = op.trigger().unwrap();
        op.complete(first, 1);

        let second = op.trigger().unwrap();
        assert!(op.is_pending());
        assert!(!op.complete(first, 99));
        assert!(op.complete(second, 2));
        assert_eq!(op.result(), Some(&2));
    }

    #[test]
    fn reset_orphans_the_pending_run() {
        let mut op = MockOperation::default();
        let ticket = op.trigger().unwrap();
        op.reset();

        assert!(!op.complete(ticket, 7));
        assert_eq!(op.state(), &OperationState::Idle);
    }

    #[test]
    fn completion_without_pending_is_rejected() {
        let mut op = MockOperation::default();
        let ticket = op.trigger().unwrap();
        assert!(op.complete(ticket, 'a'));
        assert!(!op.complete(ticket, 'b'));
        assert_eq!(op.result(), Some(&'a'));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test(start_paused = true)]
    async fn disease_scan_lifecycle() {
        use std::time::Duration;

        use api::disease::{scan_plant_image, SCAN_DELAY};

        let mut op = MockOperation::default();
        let ticket = op.trigger().unwrap();
        assert!(op.is_pending());

        let started = tokio::time::Instant::now();
        let early = tokio::time::timeout(SCAN_DELAY - Duration::from_millis(1), scan_plant_image()).await;
        assert!(early.is_err());
        assert!(op.is_pending());

        let scan = scan_plant_image().await;
        assert!(started.elapsed() >= SCAN_DELAY);
        assert!(op.complete(ticket, scan));

        let result = op.result().unwrap();
        assert_eq!(result.disease.en, "Leaf Rust");
        assert_eq!(result.confidence, 87);
    }
}
