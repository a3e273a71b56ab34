pub mod interrupt;
pub mod poller;
