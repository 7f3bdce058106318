pub mod web;

pub use web::{shutdown_signal, start_web_server};
