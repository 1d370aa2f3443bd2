pub mod api_handler;
pub mod health_handler;
pub mod logging_handler;
pub mod ui_handler;
pub mod webhook_sink;
