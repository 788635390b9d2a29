//! Line-oriented terminal front end: commands in, rendered views out.

pub mod command;
pub mod driver;
pub mod view_writer;
