pub mod app;
pub mod components;
pub mod error;
pub mod i18n;
pub mod router;
pub mod routes;
pub mod service;
pub mod store;
pub mod util;
pub mod wallet;

pub use app::App;
