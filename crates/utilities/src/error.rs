use std::error::Error;

/// The error type used by binaries and glue code, any error can be converted
/// into it with `?`.
pub type FasimError = Box<dyn Error>;
