pub mod cli;
pub mod csv_parser;
pub mod output;
pub mod window;
