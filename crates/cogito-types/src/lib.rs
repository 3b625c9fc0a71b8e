pub mod error;
pub mod filter;
pub mod status;
pub mod thought;

pub use error::{Error, Result};
pub use filter::{CategoryFilter, FilterCriteria};
pub use status::LoadStatus;
pub use thought::{Thought, ThoughtId};
