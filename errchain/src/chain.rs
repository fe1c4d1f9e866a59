//! # Cause chain search
//!
//! Walks the chain formed by `std::error::Error::source`, starting at the
//! given node and moving towards the root cause. The first node that matches
//! wins, so a node is always preferred over any of its causes.
//!
//! An absent start node is an empty chain: searching it finds nothing.
//!
//! The walk does not guard against cycles. Errors that own their source (as
//! [`Error`](errchain_error::Error) does) cannot form one, but a hand-written
//! `source()` that does will make these functions loop forever.

use crate::kind::{CauseKind, TypeOf};
use std::error::Error as StdError;
use std::iter::FusedIterator;

/// Iterator over a node and each of its causes, outermost first.
#[derive(Debug, Clone)]
pub struct Causes<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Causes<'_> {}

/// Iterate over `err` and its causes. Yields nothing when `err` is `None`.
pub fn causes<'a>(err: Option<&'a (dyn StdError + 'static)>) -> Causes<'a> {
    Causes { next: err }
}

/// Find the first node in the chain starting at `err` that matches `kind`.
///
/// The returned reference is the node itself, not a copy of it.
///
/// ```rust
/// use errchain::{first_cause, Error, ErrorKind};
///
/// let err = Error::invalid_argument("bad request")
///     .set_source(Error::parse_failed("unexpected '}'"));
///
/// let found = first_cause(Some(&err), ErrorKind::ParseFailed).unwrap();
/// assert_eq!(found.to_string(), "ParseFailed => unexpected '}'");
/// assert!(first_cause(None, ErrorKind::Fault).is_none());
/// ```
pub fn first_cause<'a, K: CauseKind>(
    err: Option<&'a (dyn StdError + 'static)>,
    kind: K,
) -> Option<&'a (dyn StdError + 'static)> {
    causes(err).find(|node| kind.matches(*node))
}

/// Check whether any node in the chain starting at `err` matches `kind`
pub fn has_cause<K: CauseKind>(err: Option<&(dyn StdError + 'static)>, kind: K) -> bool {
    first_cause(err, kind).is_some()
}

/// Find the first node in the chain whose concrete type is `T`.
///
/// ```rust
/// use errchain::{first_cause_of, Error};
///
/// let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out");
/// let err = Error::from(io);
///
/// let io = first_cause_of::<std::io::Error>(Some(&err)).unwrap();
/// assert_eq!(io.kind(), std::io::ErrorKind::TimedOut);
/// ```
pub fn first_cause_of<'a, T: StdError + 'static>(
    err: Option<&'a (dyn StdError + 'static)>,
) -> Option<&'a T> {
    first_cause(err, TypeOf::<T>::new()).and_then(|node| node.downcast_ref::<T>())
}

/// Check whether any node in the chain has the concrete type `T`
pub fn has_cause_of<T: StdError + 'static>(err: Option<&(dyn StdError + 'static)>) -> bool {
    first_cause_of::<T>(err).is_some()
}

/// The last node of the chain, `err` itself when it has no cause
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    causes(Some(err)).last().unwrap_or(err)
}

/// Method-call access to the chain functions for any concrete error type.
pub trait CauseChainExt: StdError + 'static {
    /// See [`causes`]
    fn causes(&self) -> Causes<'_>;

    /// See [`first_cause`]
    fn first_cause<K: CauseKind>(&self, kind: K) -> Option<&(dyn StdError + 'static)>;

    /// See [`has_cause`]
    fn has_cause<K: CauseKind>(&self, kind: K) -> bool;

    /// See [`first_cause_of`]
    fn first_cause_of<T: StdError + 'static>(&self) -> Option<&T>;

    /// See [`has_cause_of`]
    fn has_cause_of<T: StdError + 'static>(&self) -> bool;

    /// See [`root_cause`]
    fn root_cause(&self) -> &(dyn StdError + 'static);

    /// See [`render_trace`](crate::render_trace)
    fn render_trace(&self) -> String;
}

impl<E: StdError + 'static> CauseChainExt for E {
    fn causes(&self) -> Causes<'_> {
        causes(Some(self))
    }

    fn first_cause<K: CauseKind>(&self, kind: K) -> Option<&(dyn StdError + 'static)> {
        first_cause(Some(self), kind)
    }

    fn has_cause<K: CauseKind>(&self, kind: K) -> bool {
        has_cause(Some(self), kind)
    }

    fn first_cause_of<T: StdError + 'static>(&self) -> Option<&T> {
        first_cause_of::<T>(Some(self))
    }

    fn has_cause_of<T: StdError + 'static>(&self) -> bool {
        has_cause_of::<T>(Some(self))
    }

    fn root_cause(&self) -> &(dyn StdError + 'static) {
        root_cause(self)
    }

    fn render_trace(&self) -> String {
        crate::trace::render_trace(self)
    }
}
