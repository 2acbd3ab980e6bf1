use thiserror::Error;

/// Errors raised by the erase overlay
///
/// Nothing here is fatal: a failed mask initialization leaves the
/// overlay without a mask, and draw calls simply skip it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EraseError {
    #[error(
        "invalid mask dimensions {width}x{height}: set positive width and height before enabling erase"
    )]
    InvalidDimensions { width: i32, height: i32 },
}
