pub mod auth;
pub mod faircv;
pub mod messages;
pub mod not_found;

pub use messages::{CheckEmail, Confirmation};
pub use not_found::NotFound;
