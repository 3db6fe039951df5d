//! Exit codes for medicctl

use medic_common::MedicError;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code for a bad knowledge base or config file
pub const EXIT_USAGE_ERROR: i32 = 64;

/// Pick the exit code for an error, looking through its context chain
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<MedicError>())
        .map(MedicError::exit_code)
        .unwrap_or(EXIT_GENERAL_ERROR)
}
