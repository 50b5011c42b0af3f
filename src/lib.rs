pub mod api;
pub mod config;
pub mod gui;
pub mod models;
