pub mod cli;
pub mod config;
pub mod converter;

pub use config::Config;
pub use converter::batch::{convert_all, convert_all_values};
pub use converter::input::{ConversionError, ValueKind};
pub use converter::{
    convert, convert_value, to_camel_case, to_camel_case_value, to_dot_case, to_dot_case_value,
    to_kebab_case, to_kebab_case_value, Case,
};

/// One converted input, as reported by the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: String,
    pub result: Result<String, ConversionError>,
}

impl Conversion {
    pub fn is_err(&self) -> bool {
        self.result.is_err()
    }
}
