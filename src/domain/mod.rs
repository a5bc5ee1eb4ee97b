//! Contact entity, field rules and the error taxonomy shared by the service and transport layers.

pub mod contact;
pub mod error;
pub mod validation;

pub use contact::{Contact, NewContact};
pub use error::{ContactError, ContactResult};
pub use validation::{validate, Violation};
