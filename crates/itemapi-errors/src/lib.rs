//! Error taxonomy for the Item API client SDK.
//!
//! Every failure the SDK surfaces is an [`Error`] with one of the closed
//! set of [`ErrorKind`]s, so callers dispatch on the kind instead of
//! parsing message strings:
//!
//! ```rust
//! use itemapi_errors::{Error, ErrorKind};
//!
//! fn handle(err: &Error) -> &'static str {
//!     match err.kind() {
//!         ErrorKind::NoItem => "nothing there",
//!         ErrorKind::Network => "retry later",
//!         ErrorKind::Response { status_code, .. } if *status_code == 404 => "gone",
//!         _ => "give up",
//!     }
//! }
//!
//! let err = Error::no_item();
//! assert_eq!(handle(&err), "nothing there");
//! ```
//!
//! Errors are immutable once constructed. A lower-level cause can be
//! attached at the construction site and walked later:
//!
//! ```rust
//! use itemapi_errors::Error;
//!
//! let err = Error::network().with_source(std::io::Error::other("connection reset"));
//! assert_eq!(err.chain().count(), 2);
//! ```

mod envelope;
mod error;
mod trigger;

pub use envelope::{EnvelopeDetail, ErrorEnvelope};
pub use error::{Category, Error, ErrorKind};
pub use trigger::TriggerAction;
