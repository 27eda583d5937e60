mod error;
mod options;
mod parallel;
mod partition;
mod sort;
pub mod verify;

pub use error::*;
pub use options::*;
pub use parallel::*;
pub use partition::*;
pub use sort::*;
