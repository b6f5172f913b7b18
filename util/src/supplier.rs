//! Turning values into zero-argument blocks.

/// Returns a block which returns the receiver as a value when called.
///
/// The value is captured when the supplier is built. Every call hands out a
/// clone of it, so shared handles (`&T`, `Rc<T>`, `Arc<T>`) keep pointing at
/// the same referent.
///
/// ```
/// # use maia_util::supplier::AsSupplier;
/// let answer = 42u32.as_supplier();
/// assert_eq!(answer(), 42);
/// assert_eq!(answer(), 42);
/// ```
pub trait AsSupplier: Sized {
    fn as_supplier(self) -> impl Fn() -> Self
    where
        Self: Clone,
    {
        move || self.clone()
    }
    /// Single-shot supplier for values that cannot be cloned.
    fn into_supplier(self) -> impl FnOnce() -> Self {
        move || self
    }
}

impl<T> AsSupplier for T {}

/// Free-function form of [`AsSupplier::as_supplier`].
pub fn supplier<T: Clone>(value: T) -> impl Fn() -> T {
    value.as_supplier()
}
