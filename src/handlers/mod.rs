pub mod car;
pub mod catalog;
pub mod frontend;
pub mod health;
