//! Configuration value objects shared by the outer layers

pub mod output_format;
pub mod response_field;

pub use output_format::OutputFormat;
pub use response_field::ResponseField;
