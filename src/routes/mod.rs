pub mod auth;
pub mod feedback;
pub mod health;
pub mod notices;
pub mod pages;
