pub mod feedback;
pub mod notice;
pub mod session;
