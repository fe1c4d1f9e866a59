//! # Error reporting
//!
//! Emits a rendered trace through `tracing`. The search and render functions
//! never log on their own; this is the one place that does.

use crate::chain::causes;
use crate::trace::{render_trace_with, TraceOptions};
use std::error::Error as StdError;
use tracing::error;

/// Log the trace of `err` at error level and return it.
pub fn report(err: &(dyn StdError + 'static)) -> String {
    report_with(err, &TraceOptions::default())
}

/// Log the trace of `err` rendered with `options` and return it.
pub fn report_with(err: &(dyn StdError + 'static), options: &TraceOptions) -> String {
    let trace = render_trace_with(err, options);
    let depth = causes(Some(err)).count() - 1;
    error!(
        target: "errchain::report",
        error = %err,
        causes = depth,
        "\n{}",
        trace.trim_end()
    );
    trace
}
