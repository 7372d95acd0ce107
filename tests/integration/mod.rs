//! Integration tests for the depcheck binary

mod helpers;
mod test_analyze;
mod test_trace;
