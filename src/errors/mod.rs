//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Front-end errors with source position information
//! - The single semantic error kind raised by the type checker
//! - A pipeline error unifying both
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
