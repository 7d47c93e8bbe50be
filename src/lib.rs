#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

//! Immutable URL components with [RFC 3986] and [RFC 3987] percent-encoding.
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//! [RFC 3987]: https://datatracker.ietf.org/doc/html/rfc3987/
//!
//! Each component of a URL is a value of its own type: [`Scheme`], [`User`],
//! [`Pass`], [`Host`], [`Port`], [`Path`], [`Query`] and [`Fragment`]. Text
//! components store their value in a canonical form and render it in any
//! [`Encoding`] on read, so equivalent inputs compare equal:
//!
//! ```
//! use uri_components::{component::Fragment, pct_enc::Encoding};
//!
//! let frag = Fragment::new(Some("doc%203"));
//! assert_eq!(frag, Fragment::new(Some("doc 3")));
//! assert_eq!(frag.uri_component(), "#doc%203");
//! assert_eq!(frag.content(Encoding::Rfc3987).as_deref(), Some("doc 3"));
//! ```
//!
//! A host and a path are also ordered lists of [segments] that can be
//! edited relative to an anchor. See [`Url`] for the aggregate.
//!
//! # Feature flags
//!
//! All features except `std` are disabled by default.
//!
//! - `std`: Enables `std` support. This includes [`Error`] implementations.
//!
//! - `serde`: Implements `Serialize` and `Deserialize` for [`Url`], as its
//!   string form, and for every component, as its optional value.
//!
//! [`Error`]: std::error::Error
//! [`Scheme`]: component::Scheme
//! [`User`]: component::User
//! [`Pass`]: component::Pass
//! [`Port`]: component::Port
//! [`Path`]: component::Path
//! [`Query`]: component::Query
//! [`Fragment`]: component::Fragment
//! [`Encoding`]: pct_enc::Encoding

extern crate alloc;

pub mod component;
pub mod pct_enc;
pub mod segments;

mod error;
mod fmt;
mod host;
mod url;

pub use error::Error;
pub use host::{Host, Label};
pub use url::Url;
