pub mod admin;
pub mod slots;
