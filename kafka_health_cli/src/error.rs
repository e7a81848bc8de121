use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ApplicationError {
    UnsupportedPlatform(String),
}

impl ApplicationError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ApplicationError::UnsupportedPlatform(_) => 2,
        }
    }
}

impl Display for ApplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationError::UnsupportedPlatform(os) => {
                write!(f, "Unsupported OS ({os}), exiting...")
            }
        }
    }
}

impl std::error::Error for ApplicationError {}
