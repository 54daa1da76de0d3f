//! Subcommand implementations.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod new;

/// Map a dialoguer failure to a [`CliError`](crate::error::CliError).
///
/// Ctrl-C and a closed stdin are user aborts, not input errors.
#[cfg(feature = "interactive")]
pub(crate) fn prompt_error(context: &str, e: dialoguer::Error) -> crate::error::CliError {
    use std::io::ErrorKind;

    match e {
        dialoguer::Error::IO(ref io)
            if matches!(io.kind(), ErrorKind::Interrupted | ErrorKind::UnexpectedEof) =>
        {
            crate::error::CliError::Cancelled
        }
        e => crate::error::CliError::InvalidInput {
            message: format!("{context}: {e}"),
            source: Some(Box::new(e)),
        },
    }
}

#[cfg(all(test, feature = "interactive"))]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::io;

    #[test]
    fn ctrl_c_maps_to_cancelled() {
        let e = dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "^C"));
        assert!(matches!(prompt_error("reading", e), CliError::Cancelled));
    }

    #[test]
    fn closed_stdin_maps_to_cancelled() {
        let e = dialoguer::Error::IO(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        assert!(matches!(prompt_error("reading", e), CliError::Cancelled));
    }

    #[test]
    fn other_io_failures_stay_input_errors() {
        let e = dialoguer::Error::IO(io::Error::other("terminal unavailable"));
        assert!(matches!(
            prompt_error("reading the name", e),
            CliError::InvalidInput { .. }
        ));
    }
}
