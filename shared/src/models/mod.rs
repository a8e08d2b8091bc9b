//! Data records persisted by the backend

pub mod expense;
pub mod product;
pub mod sale;
pub mod user;

pub use expense::*;
pub use product::*;
pub use sale::*;
pub use user::*;
