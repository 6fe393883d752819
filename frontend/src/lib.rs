pub mod app;
pub mod components;
pub mod config;
pub mod fx;
pub mod i18n;
pub mod leads;
pub mod pages;
pub mod state;

pub use app::App;
