pub mod config;
pub mod consts;
pub mod convert;
pub mod document;
pub mod error;
pub mod export;
pub mod layout;
pub mod print;
pub mod session;
pub mod zoom;
