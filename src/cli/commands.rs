pub mod add;
pub mod chart;
pub mod config;
pub mod del;
pub mod donate;
pub mod export;
pub mod history;
pub mod init;
pub mod list;
pub mod search;
