pub mod app_state;
pub mod config;
pub mod health;
pub mod modules;

pub use modules::auth;
pub use modules::notification;
pub use modules::store;

#[cfg(test)]
mod tests;
