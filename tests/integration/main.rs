mod cli_config;
mod cli_types;
mod common;
