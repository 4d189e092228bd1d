#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod error;
pub mod storage;


pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::storage::BoxedStorage;
pub use crate::storage::MemStorage;
pub use crate::storage::SafeStorage;
pub use crate::storage::StorageInterface;
