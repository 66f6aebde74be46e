pub mod bookmark;
pub mod configs;
pub mod errors;
