pub mod config;
pub mod error;
pub mod export;
pub mod http;
pub mod match_log;
pub mod resolve;
pub mod scraper;
pub mod table;
pub mod types;
pub mod utils;
