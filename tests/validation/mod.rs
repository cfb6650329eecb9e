pub mod hook;
pub mod primitive;
