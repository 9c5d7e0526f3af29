//! Process exit codes.

pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, invalid configuration, unreadable input.
pub const ERROR: i32 = 2;
