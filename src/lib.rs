pub mod cli;

pub mod config;

pub mod error;

pub mod table;

pub mod wifi;
