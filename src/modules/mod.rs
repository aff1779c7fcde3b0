pub mod genre;
pub mod health;
pub mod movie;
pub mod user;
