pub mod access;
pub mod limit;
pub mod parse;
