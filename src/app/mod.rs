pub mod log;
pub mod session;
