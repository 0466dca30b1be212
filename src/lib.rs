pub mod classify;
pub mod cli;
pub mod io;
pub mod keywords;
pub mod parser;
pub mod ui;
