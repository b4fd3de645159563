//! pokecache_cli - Command line front end for the pokecache catalog service.

pub mod cli;
pub mod demo;
pub mod output;
