pub mod console;
pub mod dht;
