use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Student with Enrollment No. {0} not found.")]
    NotFound(Box<str>),
}

impl Error {
    pub fn not_found(id: &str) -> Self {
        Self::NotFound(Box::from(id))
    }
}
