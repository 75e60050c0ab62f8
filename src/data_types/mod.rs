pub mod common;
pub mod route;
