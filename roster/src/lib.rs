mod error;
pub mod store;
pub mod student;


pub use crate::error::{Error, Result};
pub use crate::store::Roster;
pub use crate::student::{Details, Student};
