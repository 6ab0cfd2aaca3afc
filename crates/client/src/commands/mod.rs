//! Typed commands of the info protocol

mod get_info;
mod select;

pub use get_info::GetInfoCommand;
pub use select::SelectCommand;
