//! Error types and error handling for the scanner.
//!
//! Every failure carries the source [`Position`](crate::Position) it was
//! raised at. The scanner never recovers from an error; callers should
//! report it and drop the scanner.

pub mod errors;
