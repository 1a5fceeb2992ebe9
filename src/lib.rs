pub mod api;
pub mod config;
pub mod dork;
pub mod error;
pub mod models;
pub mod server;
pub mod state;
pub mod store;
