//! # Core Types
//!
//! This crate defines the fundamental identifier types shared by every
//! part of Kernwerk.
//!
//! ## Philosophy
//!
//! Identifiers are strongly typed so they cannot be confused with each
//! other or with plain integers:
//! - **Explicit over implicit**: a syscall command number is a
//!   [`CommandId`], never a bare `u32`.
//! - **Type safety first**: the type system catches identifier mix-ups
//!   at compile time.
//!
//! ## Key Types
//!
//! - [`CommandId`]: numeric identifier for a syscall command
//! - [`TaskId`]: unique identifier for an execution context
//! - [`commands`]: well-known command identifiers registered at boot

pub mod commands;
pub mod ids;

pub use ids::{CommandId, TaskId};
