//! Page-local simulated operations (disease scan, crop prediction).

pub mod operation;

pub use operation::{MockOperation, OperationState, Ticket};
