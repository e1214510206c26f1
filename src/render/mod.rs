pub mod avatars;
pub mod board;
