use crate::error::VestingError;
use crate::state::{EmployeeAccount, Vesting, VestingAccount};

fn allocation(total_amount: u64, total_withdrawn: u64) -> EmployeeAccount {
    EmployeeAccount {
        start_time: 0,
        cliff_time: 0,
        end_time: 100,
        total_amount,
        total_withdrawn,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_closes_only_without_open_allocations() {
        let mut pool = VestingAccount::default();
        assert!(pool.ensure_closable().is_ok());

        pool.register_allocation().unwrap();
        pool.register_allocation().unwrap();
        assert_eq!(pool.active_allocations, 2);
        assert!(matches!(
            pool.ensure_closable(),
            Err(VestingError::OutstandingAllocations)
        ));

        pool.release_allocation().unwrap();
        assert!(pool.ensure_closable().is_err());
        pool.release_allocation().unwrap();
        assert!(pool.ensure_closable().is_ok());

        assert!(matches!(
            pool.release_allocation(),
            Err(VestingError::ArithmeticOverflow)
        ));
    }

    #[test]
    fn test_allocation_closes_only_when_paid_out() {
        assert!(matches!(
            allocation(1_000, 999).ensure_closable(),
            Err(VestingError::OutstandingAllocation)
        ));
        assert!(allocation(1_000, 1_000).ensure_closable().is_ok());
        // A zero allocation owes nothing.
        assert!(allocation(0, 0).ensure_closable().is_ok());
    }

    #[test]
    fn test_claimable_amount_tracks_withdrawals() {
        let employee = allocation(1_000, 300);
        assert_eq!(employee.vested_amount(50).unwrap(), 500);
        assert_eq!(employee.claimable_amount(50).unwrap(), 200);
        assert_eq!(employee.claimable_amount(100).unwrap(), 700);
    }

    #[test]
    fn test_account_sizes() {
        // discriminator + owner + mint + treasury + (4 + 32) name + 2 bumps + u32
        assert_eq!(VestingAccount::LEN, 8 + 32 * 3 + 4 + 32 + 1 + 1 + 4);
        // discriminator + 2 keys + 3 i64 + 2 u64 + bump
        assert_eq!(EmployeeAccount::LEN, 8 + 32 * 2 + 8 * 3 + 8 * 2 + 1);
        assert_eq!(Vesting::LEN, 8 + 32 + 1);
    }

    #[test]
    fn test_counter_increment_and_decrement() {
        let mut counter = Vesting::default();
        assert_eq!(counter.increment().unwrap(), 1);
        assert_eq!(counter.increment().unwrap(), 2);
        assert_eq!(counter.decrement().unwrap(), 1);
        assert_eq!(counter.decrement().unwrap(), 0);
        assert!(matches!(
            counter.decrement(),
            Err(VestingError::ArithmeticOverflow)
        ));
        assert_eq!(counter.count, 0);
    }

    #[test]
    fn test_counter_set_and_overflow() {
        let mut counter = Vesting::default();
        assert_eq!(counter.set(255), 255);
        assert!(matches!(
            counter.increment(),
            Err(VestingError::ArithmeticOverflow)
        ));
        assert_eq!(counter.count, 255);
        assert_eq!(counter.set(7), 7);
    }
}
