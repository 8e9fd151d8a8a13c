//! Application layer - tool handlers orchestrating the domain and ports.

pub mod tools;
