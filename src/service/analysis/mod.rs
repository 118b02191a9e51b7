pub mod client;
pub mod markdown;
pub mod payload;
