pub mod feedback;
pub mod notices;
pub mod session;
pub mod supabase;
