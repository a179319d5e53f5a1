pub mod check;
pub mod config;
pub mod dispatch;
pub mod fallback;
pub mod schema;
