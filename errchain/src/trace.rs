//! # Trace rendering
//!
//! Turns an error and its causes into a multi-line, human-readable trace.
//!
//! ```text
//! InvalidArgument: bad request
//! 	at src/handler.rs:42:17
//! 	at handler::submit
//! 	  field = email
//! Caused by: ParseFailed: unexpected '@'
//! 	at src/parse.rs:88:9
//! Caused by: stream did not contain valid UTF-8
//! 	at <unknown location>
//! ```
//!
//! Every line, including the last one, ends with `\n`. Nodes that are not
//! [`Error`]s have no recorded origin; their header is their `Display` text
//! and their location line is `\tat <unknown location>`.

use crate::chain::causes;
use errchain_error::Error;
use serde::{Deserialize, Serialize};
use std::backtrace::BacktraceStatus;
use std::error::Error as StdError;
use std::fmt::Write;

/// Options controlling what [`render_trace_with`] includes.
///
/// Missing fields take their default when deserialized, so a partial
/// document like `{"max_depth": 3}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceOptions {
    /// Render each node's context key-value pairs
    pub include_context: bool,
    /// Render captured backtraces
    pub include_backtrace: bool,
    /// Maximum number of causes rendered below the top-level error.
    /// Causes past this depth are not rendered but are counted in the
    /// trailing `\t... N more causes` line.
    pub max_depth: Option<usize>,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            include_context: true,
            include_backtrace: true,
            max_depth: None,
        }
    }
}

impl TraceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(mut self, include: bool) -> Self {
        self.include_context = include;
        self
    }

    pub fn with_backtrace(mut self, include: bool) -> Self {
        self.include_backtrace = include;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Render the full trace of `err` and its causes with default options.
///
/// ```rust
/// use errchain::{render_trace, Error};
///
/// let err = Error::invalid_argument("negative timeout");
/// let trace = render_trace(&err);
///
/// assert!(trace.starts_with("InvalidArgument: negative timeout\n"));
/// assert!(trace.contains("\tat "));
/// assert!(trace.ends_with('\n'));
/// ```
pub fn render_trace(err: &(dyn StdError + 'static)) -> String {
    render_trace_with(err, &TraceOptions::default())
}

/// Render the trace of `err` and its causes.
pub fn render_trace_with(err: &(dyn StdError + 'static), options: &TraceOptions) -> String {
    let nodes: Vec<_> = causes(Some(err)).collect();
    let shown = match options.max_depth {
        Some(max) => nodes.len().min(max.saturating_add(1)),
        None => nodes.len(),
    };

    let mut out = String::new();
    for (depth, node) in nodes[..shown].iter().enumerate() {
        if depth > 0 {
            out.push_str("Caused by: ");
        }
        write_node(&mut out, *node, options);
    }

    let hidden = nodes.len() - shown;
    if hidden > 0 {
        let noun = if hidden == 1 { "cause" } else { "causes" };
        let _ = writeln!(out, "\t... {} more {}", hidden, noun);
    }
    out
}

const UNKNOWN_LOCATION: &str = "\tat <unknown location>\n";

fn write_node(out: &mut String, node: &(dyn StdError + 'static), options: &TraceOptions) {
    match node.downcast_ref::<Error>() {
        Some(err) => write_error(out, err, options),
        None => {
            let text = node.to_string();
            let _ = writeln!(out, "{}", text.trim_end_matches('\n'));
            out.push_str(UNKNOWN_LOCATION);
        }
    }
}

fn write_error(out: &mut String, err: &Error, options: &TraceOptions) {
    let _ = write!(out, "{}", err.kind());
    if !err.message().is_empty() {
        let _ = write!(out, ": {}", err.message().trim_end_matches('\n'));
    }
    out.push('\n');

    let location = err.location();
    let _ = writeln!(
        out,
        "\tat {}:{}:{}",
        location.file(),
        location.line(),
        location.column()
    );
    if !err.operation().is_empty() {
        let _ = writeln!(out, "\tat {}", err.operation());
    }

    if options.include_context {
        for (key, value) in err.context() {
            let _ = writeln!(out, "\t  {} = {}", key, value);
        }
    }

    if options.include_backtrace && err.backtrace().status() == BacktraceStatus::Captured {
        for frame in err.backtrace().to_string().lines() {
            let _ = writeln!(out, "\t{}", frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use errchain_error::ErrorKind;
    use std::io;

    #[derive(Debug, thiserror::Error)]
    #[error("upstream rejected request: {reason}")]
    struct UpstreamError {
        reason: String,
        #[source]
        source: Error,
    }

    fn quiet() -> TraceOptions {
        TraceOptions::new().with_backtrace(false)
    }

    #[test]
    fn test_trace_contains_message_and_location() {
        let err = Error::new(ErrorKind::Unsupported, "blabla");
        let trace = render_trace(&err);

        assert!(trace.contains("Unsupported"));
        assert!(trace.contains("blabla"));
        assert!(trace.contains("\tat"));
        assert!(trace.contains(file!()));
    }

    #[test]
    fn test_trace_exact_layout() {
        let line = line!() + 1;
        let err = Error::invalid_argument("bad request")
            .with_operation("handler::submit")
            .with_context("field", "email");
        let location = err.location();

        let trace = render_trace_with(&err, &quiet());
        let expected = format!(
            "InvalidArgument: bad request\n\tat {}:{}:{}\n\tat handler::submit\n\t  field = email\n",
            file!(),
            line,
            location.column()
        );
        assert_eq!(trace, expected);
    }

    #[test]
    fn test_trace_without_context() {
        let err = Error::not_found("users/7");
        let trace = render_trace_with(&err, &quiet().with_context(false));
        assert!(!trace.contains("what = users/7"));

        let trace = render_trace_with(&err, &quiet());
        assert!(trace.contains("\t  what = users/7\n"));
    }

    #[test]
    fn test_trace_renders_causes() {
        let io_err = io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        let parse = Error::parse_failed("unexpected '@'").set_source(io_err);
        let err = Error::invalid_argument("bad request").set_source(parse);

        let trace = render_trace_with(&err, &quiet());
        let lines: Vec<_> = trace.lines().collect();

        assert_eq!(lines[0], "InvalidArgument: bad request");
        assert!(lines[1].starts_with("\tat "));
        assert_eq!(lines[2], "Caused by: ParseFailed: unexpected '@'");
        assert!(lines[3].starts_with("\tat "));
        assert_eq!(lines[4], "Caused by: stream did not contain valid UTF-8");
        assert_eq!(lines[5], "\tat <unknown location>");
        assert_eq!(lines.len(), 6);
        assert!(trace.ends_with('\n'));
    }

    #[test]
    fn test_trace_foreign_root() {
        let err = UpstreamError {
            reason: "quota".into(),
            source: Error::new(ErrorKind::RateLimited, "429 from api"),
        };

        let trace = render_trace_with(&err, &quiet());
        assert!(trace.starts_with(
            "upstream rejected request: quota\n\tat <unknown location>\nCaused by: RateLimited: 429 from api\n\tat "
        ));
        assert!(trace.contains(file!()));
    }

    #[test]
    fn test_trace_of_std_error_has_location_line() {
        let err = io::Error::new(io::ErrorKind::Other, "blabla");
        let trace = render_trace(&err);

        assert_eq!(trace, "blabla\n\tat <unknown location>\n");
        assert!(trace.contains("blabla"));
        assert!(trace.contains("\tat"));
    }

    #[test]
    fn test_empty_message_header() {
        let err = Error::new(ErrorKind::Timeout, "");
        let trace = render_trace_with(&err, &quiet());
        assert!(trace.starts_with("Timeout\n\tat "));
    }

    #[test]
    fn test_max_depth() {
        let mut err = Error::new(ErrorKind::Timeout, "bottom");
        for i in 0..4 {
            err = Error::unexpected(format!("layer {}", i)).set_source(err);
        }

        let trace = render_trace_with(&err, &quiet().with_max_depth(1));
        assert!(trace.contains("layer 3"));
        assert!(trace.contains("Caused by: Unexpected: layer 2"));
        assert!(!trace.contains("layer 1"));
        assert!(trace.ends_with("\t... 3 more causes\n"));

        let trace = render_trace_with(&err, &quiet().with_max_depth(3));
        assert!(trace.ends_with("\t... 1 more cause\n"));

        let trace = render_trace_with(&err, &quiet().with_max_depth(4));
        assert!(trace.contains("bottom"));
        assert!(!trace.contains("more cause"));

        let trace = render_trace_with(&err, &quiet().with_max_depth(0));
        assert_eq!(trace.matches("Caused by").count(), 0);
        assert!(trace.ends_with("\t... 4 more causes\n"));
    }

    #[test]
    fn test_every_line_terminated() {
        let err = Error::unexpected("multi\n")
            .set_source(io::Error::new(io::ErrorKind::Other, "tail\n"));
        let trace = render_trace_with(&err, &quiet());
        assert!(trace.ends_with('\n'));
        assert!(!trace.contains("\n\n"));
    }

    #[test]
    fn test_options_defaults() {
        let options = TraceOptions::default();
        assert!(options.include_context);
        assert!(options.include_backtrace);
        assert_eq!(options.max_depth, None);
    }

    #[test]
    fn test_options_from_partial_json() {
        let options: TraceOptions = serde_json::from_str(r#"{"max_depth": 3}"#).unwrap();
        assert_eq!(options, TraceOptions::new().with_max_depth(3));

        let options: TraceOptions =
            serde_json::from_str(r#"{"include_backtrace": false, "include_context": false}"#).unwrap();
        assert!(!options.include_backtrace);
        assert!(!options.include_context);
        assert_eq!(options.max_depth, None);
    }

    #[test]
    fn test_options_serialize() {
        let json = serde_json::to_value(TraceOptions::new().with_max_depth(2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "include_context": true,
                "include_backtrace": true,
                "max_depth": 2
            })
        );
    }
}
