//! # Kernel API
//!
//! This crate defines the interfaces between the buffering/dispatch core
//! and its external collaborators.
//!
//! ## Philosophy
//!
//! The core consumes collaborators through capability traits, never
//! through ambient globals:
//! - The scheduler is a trait object handed to the code that needs it
//! - Time is an explicit value type, not an ambient clock
//! - Errors are typed and propagated, not panicked
//!
//! ## Design Goals
//!
//! 1. **Testability**: every collaborator can be replaced by a test double
//! 2. **Explicitness**: no hidden state, no global lookup
//! 3. **Simplicity**: minimal surface area

pub mod error;
pub mod scheduler;
pub mod time;

pub use error::KernelError;
pub use scheduler::Scheduler;
pub use time::Duration;
