//! Running zero-argument blocks.
//!
//! None of these catch anything: a panic in `block` unwinds straight through,
//! and an `Err` comes back untouched.

/// Executes the given `block` and returns its result.
#[inline]
pub fn eval<R>(block: impl FnOnce() -> R) -> R {
    block()
}

/// Executes `block` and discards the result.
///
/// Useful for handing a value-producing block to something that expects a
/// block returning `()`. Use [`try_discard`] when the result is a `Result`,
/// so the error is not dropped along with the value.
#[inline]
pub fn discard<T>(block: impl FnOnce() -> T) {
    let _ = block();
}

/// Executes `block`, discarding the success value and keeping the error.
///
/// ```
/// # use maia_util::block::try_discard;
/// let parsed = try_discard(|| "12".parse::<u8>());
/// assert!(parsed.is_ok());
/// let failed = try_discard(|| "x".parse::<u8>());
/// assert!(failed.is_err());
/// ```
#[inline]
pub fn try_discard<T, E>(block: impl FnOnce() -> Result<T, E>) -> Result<(), E> {
    block()?;
    Ok(())
}

/// Does nothing.
#[inline]
pub fn pass() {}
