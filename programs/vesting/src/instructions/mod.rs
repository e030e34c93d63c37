pub mod create_vesting_account;
pub mod create_employee_account;
pub mod claim_tokens;
pub mod emit_vesting_quote;
pub mod close_employee_account;
pub mod close_vesting_account;
pub mod initialize;
pub mod update_counter;
pub mod close;

pub use create_vesting_account::*;
pub use create_employee_account::*;
pub use claim_tokens::*;
pub use emit_vesting_quote::*;
pub use close_employee_account::*;
pub use close_vesting_account::*;
pub use initialize::*;
pub use update_counter::*;
pub use close::*;
