pub mod confirm;
pub mod logging;
pub mod secrets;
