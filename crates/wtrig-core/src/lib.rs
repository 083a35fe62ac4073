pub mod actions;
pub mod config;
pub mod form;
pub mod logging;
pub mod source;
pub mod worker_url;
pub mod workers;
