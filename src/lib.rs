pub mod cli_main;
pub mod error;
pub mod io;
pub mod profile;
pub mod report;
pub mod visualize;
