//! Seams between fieldguard and the parser it validates.
//!
//! A host parser implements [`TokenSource`] once; the free functions in
//! [`crate::validate`] and the provided methods on the trait then work
//! against it.
//!
//! # Usage
//!
//! ```ignore
//! use fieldguard::TokenSource;
//!
//! fn read_header(parser: &mut MyParser) -> Result<u64, MyError> {
//!     parser.advance();
//!     parser.expect_field_named("version")?;
//!     parser.advance();
//!     Ok(parser.number()?)
//! }
//! ```

mod source;

pub use source::TokenSource;
