//! Records exchanged between the HTTP layer and storage

pub mod envelope;
pub mod product;
pub mod user;

pub use envelope::Envelope;
pub use product::{NewProduct, Product};
pub use user::{NewUser, User};
