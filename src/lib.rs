pub mod app;
pub mod config;
pub mod data;
pub mod generation;
pub mod model;
pub mod parser;
pub mod results;
pub mod session;
pub mod store;
pub mod ui;

pub use app::QuizApp;
