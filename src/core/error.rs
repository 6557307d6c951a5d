use std::fmt;

use crate::core::interceptor::Mode;

#[derive(Debug)]
pub enum Error {
    ClassNotFound(String),
    MethodNotFound(String, String),
    FieldNotFound(String, String),
    HookConflict(String, String, Mode),
    ArityMismatch(String, String, usize, usize),
    TypeMismatch(&'static str, &'static str),
    IoError(std::io::Error),
    JsonParseError(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ClassNotFound(name) => {
                write!(f, "Class not found: {}", name)
            }
            Error::MethodNotFound(class, name) => {
                write!(f, "Method not found: {}::{}", class, name)
            }
            Error::FieldNotFound(class, name) => {
                write!(f, "Field not found: {}::{}", class, name)
            }
            Error::HookConflict(class, name, mode) => {
                write!(f, "Hook already installed: {}::{} ({})", class, name, mode)
            }
            Error::ArityMismatch(class, name, expected, got) => {
                write!(f, "{}::{} takes {} argument(s), got {}", class, name, expected, got)
            }
            Error::TypeMismatch(expected, got) => {
                write!(f, "Type mismatch: expected {}, got {}", expected, got)
            }
            Error::IoError(error) => {
                write!(f, "I/O error: {}", error)
            }
            Error::JsonParseError(error) => {
                write!(f, "Failed to parse JSON: {}", error)
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::IoError(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::JsonParseError(e)
    }
}
