// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get access to everything `error_chain!` creates.
use error_chain::error_chain;

error_chain! {
    errors {
        // A value supplied by the caller can never be valid, e.g. a zero sized maze.
        Validation(reason: String) {
            description("validation error")
            display("validation error: {}", reason)
        }

        // A mandatory reference was missing where one is required.
        PreconditionViolation(reason: String) {
            description("precondition violation")
            display("precondition violation: {}", reason)
        }

        // A position, index or wall that does not exist on the grid.
        OutOfRange(reason: String) {
            description("out of range")
            display("out of range: {}", reason)
        }
    }
}

pub(crate) fn validation<S: Into<String>>(reason: S) -> Error {
    ErrorKind::Validation(reason.into()).into()
}

pub(crate) fn precondition<S: Into<String>>(reason: S) -> Error {
    ErrorKind::PreconditionViolation(reason.into()).into()
}

pub(crate) fn out_of_range<S: Into<String>>(reason: S) -> Error {
    ErrorKind::OutOfRange(reason.into()).into()
}
