//! Error types for the FairCV client.
//!
//! Each browser-facing concern has its own `thiserror` enum: the remote API,
//! the wallet extension bridge, and local storage. Components convert them into
//! display state at the call site; none of them are retried.

pub mod api;
pub mod storage;
pub mod wallet;

pub use api::ApiError;
pub use storage::StorageError;
pub use wallet::WalletError;
