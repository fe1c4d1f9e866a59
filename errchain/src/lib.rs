//! # errchain
//!
//! Inspect error cause chains.
//!
//! ## Core Concepts
//! - **Cause chain**: an error followed by each error reachable through
//!   `std::error::Error::source`
//! - **Kind**: a [`CauseKind`] that decides whether a node is the one looked for -
//!   an [`ErrorKind`] (with its is-a relation), a concrete type, or a predicate
//! - **Trace**: a multi-line rendering of the chain with recorded source locations
//!
//! ```rust
//! use errchain::{has_cause, render_trace, CauseChainExt, Error, ErrorKind};
//!
//! let err = Error::unexpected("saving profile failed")
//!     .set_source(Error::new(ErrorKind::ChannelClosed, "writer hung up"));
//!
//! assert!(err.has_cause(ErrorKind::NetworkFailed));
//! assert!(!has_cause(None, ErrorKind::Fault));
//! assert!(render_trace(&err).contains("Caused by: ChannelClosed"));
//! ```

pub mod chain;
pub mod kind;
pub mod report;
pub mod trace;

pub use chain::{
    causes, first_cause, first_cause_of, has_cause, has_cause_of, root_cause, CauseChainExt,
    Causes,
};
pub use errchain_error::{Error, ErrorKind, Result};
pub use kind::{type_of, AnyError, CauseKind, Predicate, TypeOf};
pub use report::{report, report_with};
pub use trace::{render_trace, render_trace_with, TraceOptions};
