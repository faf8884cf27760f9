//! Process exit codes for askdev.
//! These codes are part of the public contract.

pub const SUCCESS: i32 = 0;
pub const NO_MATCH: i32 = 1; // Nothing known matched, or no input
pub const INTERNAL_ERROR: i32 = 2; // Console failure or other propagated error
