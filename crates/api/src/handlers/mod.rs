pub mod activity;
pub mod score;
pub mod text;
pub mod user;
