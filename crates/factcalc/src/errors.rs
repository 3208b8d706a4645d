//! Error handling and exit codes.

use factcalc_core::calculator::FactError;
use factcalc_core::constants::exit_codes;

/// Map a calculation error to its process exit code.
pub fn handle_error(err: &FactError) -> i32 {
    match err {
        FactError::InvalidArgument(_) | FactError::Calculation(_) => exit_codes::ERROR_GENERIC,
        FactError::Config(_) => exit_codes::ERROR_CONFIG,
        FactError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for any application error; non-calculation errors are generic.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FactError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
