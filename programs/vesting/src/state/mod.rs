pub mod vesting_account;
pub mod employee_account;
pub mod counter;

pub use vesting_account::*;
pub use employee_account::*;
pub use counter::*;
