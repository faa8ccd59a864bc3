pub mod advisory;
pub mod fieldlog;
pub mod logistics;
pub mod production;
pub mod rulebook;
