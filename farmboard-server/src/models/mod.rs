//! Form input with presence checks at construction
//!
//! Invalid input returns ValidationError, not panic.

pub mod post;
pub mod validation;

pub use post::{NewComment, NewPost, PostEdit};
pub use validation::{required, ValidationError};
