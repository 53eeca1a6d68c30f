pub mod api;
pub mod faircv;
pub mod user;
