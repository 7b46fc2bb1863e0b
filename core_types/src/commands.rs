//! Well-known syscall command identifiers
//!
//! Kernel subsystems register these with the dispatch table during
//! startup. User-visible services claim identifiers above the kernel
//! range at runtime.

use crate::CommandId;

/// Return from a delegated service call
pub const SERVICE_RETURN: CommandId = CommandId::from_raw(1);
/// Software-raised interrupt notification
pub const INTERRUPT: CommandId = CommandId::from_raw(2);

pub const GET_PROCESS_ID_FOR_COMMAND: CommandId = CommandId::from_raw(10);

pub const REQUEST_MESSAGE_BUFFER: CommandId = CommandId::from_raw(20);
pub const REQUEST_MEMORY: CommandId = CommandId::from_raw(21);
pub const GET_PHYSICAL_MEMORY: CommandId = CommandId::from_raw(22);
pub const TRANSLATE_VIRTUAL_TO_PHYSICAL: CommandId = CommandId::from_raw(23);

pub const CREATE_MEMORY_PROCESS: CommandId = CommandId::from_raw(40);
pub const SET_THREAD_PRIORITY: CommandId = CommandId::from_raw(41);
pub const THREAD_SLEEP: CommandId = CommandId::from_raw(42);
pub const GET_PROCESS_BY_NAME: CommandId = CommandId::from_raw(43);
pub const KILL_PROCESS: CommandId = CommandId::from_raw(44);
pub const GET_CURRENT_PROCESS_ID: CommandId = CommandId::from_raw(47);
pub const GET_CURRENT_THREAD_ID: CommandId = CommandId::from_raw(48);

pub const SET_SERVICE_STATUS: CommandId = CommandId::from_raw(50);
pub const REGISTER_SERVICE: CommandId = CommandId::from_raw(51);
pub const REGISTER_INTERRUPT: CommandId = CommandId::from_raw(52);

/// Write a diagnostic message through the kernel's fan-out output path
pub const WRITE_DEBUG_MESSAGE: CommandId = CommandId::from_raw(60);
/// Write a single diagnostic character
pub const WRITE_DEBUG_CHAR: CommandId = CommandId::from_raw(61);
