//! Application services for the message subsystem.
//!
//! Services orchestrate domain operations and coordinate between ports.

mod admission;

pub use admission::{AdmissionResult, AdmissionService};
