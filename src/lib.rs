pub mod app;
pub mod base;
pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod style;
pub mod ui;

pub use app::{App, ErrorDialog, Message};
pub use base::Base;
pub use convert::{convert, convert_str, parse, Conversion, ConversionRequest};
pub use error::{InvalidInput, InvalidReason, Result};
pub use num_bigint::BigInt;
