pub mod config;
pub mod search;
pub mod selftest;
pub mod serve;
