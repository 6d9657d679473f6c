//! Arithmetic tools.

mod calculator;

pub use calculator::{CalcOperation, CalculatorParams, CalculatorTool};
