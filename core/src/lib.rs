mod error;
mod location;
mod token;
pub mod traits;
pub mod validate;

pub use error::{ErrorKind, NULL_NAME, Reason, ValidationError};
pub use location::Location;
pub use token::TokenKind;
pub use traits::TokenSource;
pub use validate::{ensure_field_name, ensure_field_name_equals, report_unknown_field};
