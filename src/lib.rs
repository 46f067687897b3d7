#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result, Warning};
pub use crate::interpreter::{ArcDirection, CoordinatePolicy, InterpreterContext};
pub use crate::reader::{AirspaceIterator, DEFAULT_EXCLUDED_CLASS, OpenAirReader, parse};
pub use crate::types::*;

mod error;
pub mod geo;
pub mod interpreter;
pub mod lexer;
mod reader;
mod types;
pub mod utils;
