pub mod persistence;
pub mod time;

pub use persistence::use_persistent_state;
