//! Shared CLI constants.

/// Process exit codes used by the CLI.
///
/// Code 0 is success and 1 is the generic failure from `main`; the codes
/// here cover failure classes scripts may want to distinguish.
pub mod exit_codes {
    /// Invalid user input (matches clap's usage-error code)
    pub const INVALID_INPUT: i32 = 2;

    /// Resource not found (config, state file, backup)
    pub const NOT_FOUND: i32 = 3;

    /// Authentication failed (wrong password or unrecoverable backup)
    pub const AUTH_FAILED: i32 = 5;
}
