pub mod client;
pub mod cloud;
pub mod drainer;
