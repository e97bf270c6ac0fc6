//! Output formatting for subnet data.
//!
//! - [`format`] - Binary, decimal and hex renderings of byte buffers
//! - [`report`] - The text report served by the subnet endpoints

mod format;
mod report;

pub use format::{
    to_binary, to_coloned_hex, to_dotted_decimal_u16, to_dotted_decimal_u8, to_shortened_hex,
};
pub use report::{calculate, render};
