pub mod about;
pub mod cli;
pub mod context;
