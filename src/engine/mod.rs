pub mod extract;
pub mod intent;
pub mod session;
