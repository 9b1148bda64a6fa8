use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// An enumerated argument was given a value outside its allowed set.
    /// Raised by the operation wrappers before any normalization runs.
    #[error("invalid value {value:?} for argument `{argument}`: expected one of {allowed:?}")]
    InvalidArgument {
        argument: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
}

pub type Result<T> = core::result::Result<T, Error>;
