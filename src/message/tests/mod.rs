//! Unit tests for the message module.
//!
//! Tests are organised by concern, covering accepted messages, each
//! rejection path, and the admission service's choice of reference time.

mod validation_tests;
