//! Explicit-argument and receiver-style forms of a unary block.
//!
//! A plain closure `F: Fn(T) -> R` takes its argument explicitly: `block(it)`.
//! A [`ReceiverFn`] wraps the same closure but is only ever invoked *on* a
//! receiver: `it.receive(&block)`. The two forms behave identically; the
//! distinction lives purely in the types, so an API can ask for one form or the
//! other.

use std::marker::PhantomData;

/// A unary block invoked on its receiver.
///
/// - F: The wrapped block.
/// - T: The receiver type.
///
/// ```
/// # use maia_util::receiver::{Receive, to_receiver};
/// let shout = to_receiver(|s: &str| s.to_uppercase());
/// assert_eq!("hello".receive(&shout), "HELLO");
/// ```
pub struct ReceiverFn<F, T>(F, PhantomData<fn(T)>);

impl<F, T> ReceiverFn<F, T> {
    pub fn new(block: F) -> Self {
        Self(block, PhantomData)
    }
    /// Invoke the block with `receiver` as its context.
    #[inline]
    pub fn call_on<R>(&self, receiver: T) -> R
    where
        F: Fn(T) -> R,
    {
        (self.0)(receiver)
    }
    #[inline]
    pub fn call_mut_on<R>(&mut self, receiver: T) -> R
    where
        F: FnMut(T) -> R,
    {
        (self.0)(receiver)
    }
    #[inline]
    pub fn call_once_on<R>(self, receiver: T) -> R
    where
        F: FnOnce(T) -> R,
    {
        (self.0)(receiver)
    }
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F, T> From<F> for ReceiverFn<F, T> {
    fn from(block: F) -> Self {
        Self::new(block)
    }
}

impl<F: Clone, T> Clone for ReceiverFn<F, T> {
    fn clone(&self) -> Self {
        Self::new(self.0.clone())
    }
}

impl<F, T> std::fmt::Debug for ReceiverFn<F, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReceiverFn<{}>", std::any::type_name::<T>())
    }
}

/// Method-call syntax for running a [`ReceiverFn`] on a value.
pub trait Receive: Sized {
    fn receive<F, R>(self, block: &ReceiverFn<F, Self>) -> R
    where
        F: Fn(Self) -> R,
    {
        block.call_on(self)
    }
    fn receive_mut<F, R>(self, block: &mut ReceiverFn<F, Self>) -> R
    where
        F: FnMut(Self) -> R,
    {
        block.call_mut_on(self)
    }
    fn receive_once<F, R>(self, block: ReceiverFn<F, Self>) -> R
    where
        F: FnOnce(Self) -> R,
    {
        block.call_once_on(self)
    }
}

impl<T> Receive for T {}

/// Turns the explicit argument of `block` into an implicit receiver.
///
/// `block` is not called until the result is invoked on a receiver.
pub fn to_receiver<T, R, F>(block: F) -> ReceiverFn<F, T>
where
    F: Fn(T) -> R,
{
    ReceiverFn::new(block)
}

/// Turns the implicit receiver of `block` back into an explicit argument.
pub fn to_explicit<T, R, F>(block: ReceiverFn<F, T>) -> impl Fn(T) -> R
where
    F: Fn(T) -> R,
{
    move |it| block.call_on(it)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn receiver_form_forwards_receiver() {
        let area = to_receiver(|(w, h): (u32, u32)| w * h);
        assert_eq!((3u32, 4u32).receive(&area), 12);
        assert_eq!(area.call_on((5, 5)), 25);
    }

    #[test]
    fn construction_is_lazy() {
        let calls = Cell::new(0);
        let block = to_receiver(|x: i32| {
            calls.set(calls.get() + 1);
            x + 1
        });
        let explicit = to_explicit(block);
        assert_eq!(calls.get(), 0);
        assert_eq!(explicit(1), 2);
        assert_eq!(calls.get(), 1);
        assert_eq!(explicit(2), 3);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn mutable_and_once_blocks() {
        let mut seen = Vec::new();
        let mut push = ReceiverFn::new(|x: u8| seen.push(x));
        1u8.receive_mut(&mut push);
        2u8.receive_mut(&mut push);
        drop(push);
        assert_eq!(seen, vec![1, 2]);

        let owned = String::from("tail");
        let append = ReceiverFn::from(move |head: String| head + &owned);
        assert_eq!(String::from("head-").receive_once(append), "head-tail");
    }

    #[test]
    fn receiver_borrowed() {
        let words = vec!["a", "bb", "ccc"];
        let longest = to_receiver(|ws: &Vec<&str>| ws.iter().map(|w| w.len()).max());
        assert_eq!((&words).receive(&longest), Some(3));
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn debug_names_receiver() {
        let block = to_receiver(|x: u64| x);
        assert_eq!(format!("{:?}", block), "ReceiverFn<u64>");
    }
}
