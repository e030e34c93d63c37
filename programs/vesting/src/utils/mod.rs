pub mod claim;
pub mod schedule;
pub mod token;

pub use claim::*;
pub use schedule::*;
pub use token::*;
