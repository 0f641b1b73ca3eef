pub mod init;
pub mod questions;
pub mod recommend;
pub mod score;
pub mod validate;
