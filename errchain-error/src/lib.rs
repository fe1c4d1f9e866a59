//! # errchain-error
//!
//! The error node used throughout errchain.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred, and what broader kinds it belongs to
//! - **Error Context**: Assist in locating the cause with rich context and the
//!   source location the error was created at
//! - **Error Source**: Wrap underlying errors so the cause chain stays walkable
//!   through `std::error::Error::source`
//!
//! ## Usage
//!
//! ```rust
//! use errchain_error::{Error, ErrorKind};
//!
//! fn load() -> Result<(), Error> {
//!     let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
//!     Err(Error::new(ErrorKind::ConfigInvalid, "cannot load settings")
//!         .with_operation("settings::load")
//!         .with_context("path", "/etc/app.toml")
//!         .set_source(io))
//! }
//!
//! let err = load().unwrap_err();
//! assert!(err.kind().is_a(ErrorKind::InvalidArgument));
//! ```

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using errchain Error
pub type Result<T> = std::result::Result<T, Error>;
