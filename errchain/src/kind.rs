//! # Cause kinds
//!
//! Descriptors that decide whether a node in a cause chain is the one being
//! looked for.

use errchain_error::{Error, ErrorKind};
use std::error::Error as StdError;
use std::fmt;
use std::marker::PhantomData;

/// Something a node in a cause chain can be matched against.
pub trait CauseKind {
    /// Check whether `err` is of this kind
    fn matches(&self, err: &(dyn StdError + 'static)) -> bool;
}

impl<K: CauseKind + ?Sized> CauseKind for &K {
    fn matches(&self, err: &(dyn StdError + 'static)) -> bool {
        (**self).matches(err)
    }
}

/// An [`ErrorKind`] matches [`Error`] nodes whose kind *is a* that kind.
///
/// `ErrorKind::Fault` is the root of every kind and so matches any node,
/// even ones that are not [`Error`]s.
impl CauseKind for ErrorKind {
    fn matches(&self, err: &(dyn StdError + 'static)) -> bool {
        if *self == ErrorKind::Fault {
            return true;
        }
        err.downcast_ref::<Error>()
            .is_some_and(|e| e.kind().is_a(*self))
    }
}

/// Matches every node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyError;

impl CauseKind for AnyError {
    fn matches(&self, _err: &(dyn StdError + 'static)) -> bool {
        true
    }
}

/// Matches nodes whose concrete type is `T`.
pub struct TypeOf<T>(PhantomData<fn() -> T>);

impl<T> TypeOf<T> {
    pub const fn new() -> Self {
        TypeOf(PhantomData)
    }
}

impl<T> Default for TypeOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypeOf<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypeOf<T> {}

impl<T> fmt::Debug for TypeOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeOf<{}>", std::any::type_name::<T>())
    }
}

impl<T: StdError + 'static> CauseKind for TypeOf<T> {
    fn matches(&self, err: &(dyn StdError + 'static)) -> bool {
        err.is::<T>()
    }
}

/// Shorthand for [`TypeOf::new`]
pub const fn type_of<T>() -> TypeOf<T> {
    TypeOf::new()
}

/// Matches nodes for which the wrapped closure returns `true`.
#[derive(Clone, Copy)]
pub struct Predicate<F>(pub F);

impl<F> CauseKind for Predicate<F>
where
    F: Fn(&(dyn StdError + 'static)) -> bool,
{
    fn matches(&self, err: &(dyn StdError + 'static)) -> bool {
        (self.0)(err)
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}
