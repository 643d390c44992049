#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

//! Settings Reader Example
//!
//! Reads a flat JSON settings object on top of a logos lexer, using
//! fieldguard to check field names and to reject fields it does not know.
//!
//! # Format
//!
//! ```text
//! {
//!   "version": 2,
//!   "name": "primary",
//!   "retries": 3,
//!   "verbose": true
//! }
//! ```
//!
//! `version` must come first. The other fields are optional, may appear in
//! any order, and may each be given at most once.

pub mod cursor;
pub mod lexer;
pub mod settings;

pub use cursor::Cursor;
pub use lexer::{LexError, Token, lex};
pub use settings::{Settings, SettingsError};
