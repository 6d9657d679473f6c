//! Format validation tools.

mod validator;

pub use validator::{DataFormat, DataValidatorParams, DataValidatorTool};
