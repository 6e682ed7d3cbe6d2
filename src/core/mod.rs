pub mod blueprint;

pub use crate::utils::error::Result;
pub use blueprint::{Blueprint, ServiceEntry};
