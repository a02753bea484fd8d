pub mod app;
pub mod chart;
pub mod components;
pub mod format;
pub mod model;
pub mod query;
pub mod settings;
pub mod storage;
pub mod store;

pub use app::App;
