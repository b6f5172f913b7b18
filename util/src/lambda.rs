//! Helpers for identifying a block as a lambda.
//!
//! All three functions are identities. They exist for call-sites where the
//! compiler cannot work out the signature of a closure from its context, most
//! commonly when the closure is bound to a `let` and takes a reference.

/// Identifies `block` as a lambda and hands it back unchanged.
///
/// ```
/// # use maia_util::lambda::lambda;
/// let double = lambda(|x: i32| x * 2);
/// assert_eq!(double(21), 42);
/// ```
#[inline]
pub fn lambda<F>(block: F) -> F {
    block
}

/// Pins a closure to `for<'a> Fn(&'a T) -> R`.
///
/// The result may not borrow from the argument; see [`lambda_reborrow`] for
/// that case.
#[inline]
pub fn lambda_ref<T, R, F>(block: F) -> F
where
    T: ?Sized,
    F: Fn(&T) -> R,
{
    block
}

/// Pins a closure to `for<'a> Fn(&'a T) -> &'a R`, tying the returned borrow
/// to the argument.
///
/// A plain `let` binding infers two unrelated lifetimes for such a closure and
/// rejects its body.
///
/// ```
/// # use maia_util::lambda::lambda_reborrow;
/// let name = lambda_reborrow::<(u32, String), str, _>(|pair| pair.1.as_str());
/// let entry = (7, "seven".to_owned());
/// assert_eq!(name(&entry), "seven");
/// ```
#[inline]
pub fn lambda_reborrow<T, R, F>(block: F) -> F
where
    T: ?Sized,
    R: ?Sized,
    F: for<'a> Fn(&'a T) -> &'a R,
{
    block
}
