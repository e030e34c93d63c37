use anchor_lang::prelude::Pubkey;

use crate::error::VestingError;
use crate::pda;
use crate::state::{EmployeeAccount, VestingAccount};
use crate::utils::claim::{plan_claim, verify_claim_accounts, ClaimAccounts, ClaimPlan};

const DAY: i64 = 24 * 60 * 60;
const NOW: i64 = 1_760_000_000;
const COMPANY: &str = "TestCompany";
const HUNDRED_TOKENS: u64 = 100_000_000_000;

/// A pool plus one allocation, with every address derived the way a
/// client would derive it.
struct Fixture {
    vesting_key: Pubkey,
    vesting: VestingAccount,
    treasury_key: Pubkey,
    employee_key: Pubkey,
    employee: EmployeeAccount,
}

impl Fixture {
    fn new(start_time: i64, cliff_time: i64, end_time: i64, total_amount: u64) -> Self {
        let program_id = crate::ID;
        let owner = Pubkey::new_unique();
        let beneficiary = Pubkey::new_unique();

        let (vesting_key, bump) = pda::derive_vesting_account(&program_id, COMPANY);
        let (treasury_key, treasury_bump) = pda::derive_treasury(&program_id, COMPANY);
        let (employee_key, employee_bump) =
            pda::derive_employee_account(&program_id, &beneficiary, &vesting_key);

        Fixture {
            vesting_key,
            vesting: VestingAccount {
                owner,
                mint: Pubkey::new_unique(),
                treasury_token_account: treasury_key,
                company_name: COMPANY.to_string(),
                treasury_bump,
                bump,
                active_allocations: 1,
            },
            treasury_key,
            employee_key,
            employee: EmployeeAccount {
                beneficiary,
                vesting_account: vesting_key,
                start_time,
                cliff_time,
                end_time,
                total_amount,
                total_withdrawn: 0,
                bump: employee_bump,
            },
        }
    }

    fn beneficiary(&self) -> Pubkey {
        self.employee.beneficiary
    }

    fn accounts<'a>(&'a self, signer: &'a Pubkey) -> ClaimAccounts<'a> {
        ClaimAccounts {
            program_id: &crate::ID,
            signer,
            company_name: COMPANY,
            vesting_account_key: &self.vesting_key,
            vesting_account: &self.vesting,
            employee_account_key: &self.employee_key,
            employee_account: &self.employee,
            treasury_key: &self.treasury_key,
        }
    }

    /// Runs the full claim decision and records the withdrawal.
    fn claim(&mut self, now: i64, treasury_balance: u64) -> Result<ClaimPlan, VestingError> {
        let signer = self.beneficiary();
        verify_claim_accounts(&self.accounts(&signer))?;
        let plan = plan_claim(&self.employee, now, treasury_balance)?;
        self.employee.record_withdrawal(plan.claimable, plan.vested)?;
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_before_cliff_fails() {
        let mut fixture = Fixture::new(NOW, NOW + 30 * DAY, NOW + 365 * DAY, HUNDRED_TOKENS);

        let result = fixture.claim(NOW, 1_000 * 1_000_000_000);
        assert!(
            matches!(result, Err(VestingError::NothingToClaim)),
            "claim before cliff should fail, got {:?}",
            result
        );
        assert_eq!(fixture.employee.total_withdrawn, 0);
    }

    #[test]
    fn test_claim_after_cliff_transfers_linear_share() {
        let mut fixture = Fixture::new(
            NOW - 60 * DAY,
            NOW - 30 * DAY,
            NOW + 305 * DAY,
            HUNDRED_TOKENS,
        );

        let plan = fixture.claim(NOW, 1_000 * 1_000_000_000).unwrap();

        // 100e9 * 60d / 365d, truncated
        assert_eq!(plan.claimable, 16_438_356_164);
        assert_eq!(plan.vested, plan.claimable);
        assert_eq!(fixture.employee.total_withdrawn, 16_438_356_164);
    }

    #[test]
    fn test_double_claim_at_same_time_fails() {
        let mut fixture = Fixture::new(0, 0, 1_000, 1_000);

        let first = fixture.claim(500, 1_000).unwrap();
        assert_eq!(first.claimable, 500);

        let second = fixture.claim(500, 500);
        assert!(
            matches!(second, Err(VestingError::NothingToClaim)),
            "second claim with no time advance should fail, got {:?}",
            second
        );
        assert_eq!(fixture.employee.total_withdrawn, 500);
    }

    #[test]
    fn test_successive_claims_are_monotonic() {
        let mut fixture = Fixture::new(0, 100, 1_000, 10_000);
        let mut treasury = 10_000u64;
        let mut previous = 0u64;

        for now in [100, 250, 251, 600, 999, 1_000] {
            let plan = fixture.claim(now, treasury).unwrap();
            let withdrawn = fixture.employee.total_withdrawn;
            assert_eq!(withdrawn, previous + plan.claimable, "now={}", now);
            assert!(withdrawn > previous, "withdrawn must strictly increase");
            assert!(withdrawn <= fixture.employee.total_amount);
            treasury -= plan.claimable;
            previous = withdrawn;
        }

        assert!(fixture.employee.is_fully_withdrawn());
        assert_eq!(treasury, 0);
        assert!(matches!(
            fixture.claim(5_000, treasury),
            Err(VestingError::NothingToClaim)
        ));
    }

    #[test]
    fn test_zero_allocation_never_claimable() {
        let mut fixture = Fixture::new(
            NOW - 60 * DAY,
            NOW - 30 * DAY,
            NOW + 305 * DAY,
            0,
        );

        for now in [NOW - 30 * DAY, NOW, NOW + 400 * DAY] {
            assert!(matches!(
                fixture.claim(now, 1_000),
                Err(VestingError::NothingToClaim)
            ));
        }
    }

    #[test]
    fn test_insufficient_treasury_leaves_state_unchanged() {
        let mut fixture = Fixture::new(0, 0, 1_000, 1_000);

        let result = fixture.claim(500, 499);
        assert!(
            matches!(result, Err(VestingError::InsufficientTreasuryBalance)),
            "got {:?}",
            result
        );
        assert_eq!(fixture.employee.total_withdrawn, 0);

        // Funding later makes the same claim succeed.
        assert_eq!(fixture.claim(500, 500).unwrap().claimable, 500);
    }

    #[test]
    fn test_claim_by_other_signer_rejected() {
        let fixture = Fixture::new(0, 0, 1_000, 1_000);
        let intruder = Pubkey::new_unique();

        let result = verify_claim_accounts(&fixture.accounts(&intruder));
        assert!(
            matches!(result, Err(VestingError::NotBeneficiary)),
            "got {:?}",
            result
        );

        // The pool owner is not the beneficiary either.
        let owner = fixture.vesting.owner;
        assert!(matches!(
            verify_claim_accounts(&fixture.accounts(&owner)),
            Err(VestingError::NotBeneficiary)
        ));
    }

    #[test]
    fn test_substituted_treasury_rejected() {
        let mut fixture = Fixture::new(0, 0, 1_000, 1_000);
        let signer = fixture.beneficiary();

        // Caller passes a different account that the pool does not record.
        let fake_treasury = Pubkey::new_unique();
        let mut accounts = fixture.accounts(&signer);
        accounts.treasury_key = &fake_treasury;
        assert!(matches!(
            verify_claim_accounts(&accounts),
            Err(VestingError::TreasuryMismatch)
        ));

        // Pool data itself points at an address that is not the derivation.
        fixture.vesting.treasury_token_account = fake_treasury;
        let mut accounts = fixture.accounts(&signer);
        accounts.treasury_key = &fake_treasury;
        assert!(matches!(
            verify_claim_accounts(&accounts),
            Err(VestingError::TreasuryMismatch)
        ));
    }

    #[test]
    fn test_substituted_employee_account_rejected() {
        let fixture = Fixture::new(0, 0, 1_000, 1_000);
        let signer = fixture.beneficiary();

        let fake_employee = Pubkey::new_unique();
        let mut accounts = fixture.accounts(&signer);
        accounts.employee_account_key = &fake_employee;
        assert!(matches!(
            verify_claim_accounts(&accounts),
            Err(VestingError::EmployeeAccountMismatch)
        ));
    }

    #[test]
    fn test_substituted_vesting_account_rejected() {
        let fixture = Fixture::new(0, 0, 1_000, 1_000);
        let signer = fixture.beneficiary();

        let (other_pool, _) = pda::derive_vesting_account(&crate::ID, "OtherCompany");
        let mut accounts = fixture.accounts(&signer);
        accounts.vesting_account_key = &other_pool;
        assert!(matches!(
            verify_claim_accounts(&accounts),
            Err(VestingError::VestingAccountMismatch)
        ));

        let mut accounts = fixture.accounts(&signer);
        accounts.company_name = "OtherCompany";
        assert!(matches!(
            verify_claim_accounts(&accounts),
            Err(VestingError::VestingAccountMismatch)
        ));
    }

    #[test]
    fn test_allocation_from_other_pool_rejected() {
        let mut fixture = Fixture::new(0, 0, 1_000, 1_000);
        let signer = fixture.beneficiary();

        let (other_pool, _) = pda::derive_vesting_account(&crate::ID, "OtherCompany");
        fixture.employee.vesting_account = other_pool;
        assert!(matches!(
            verify_claim_accounts(&fixture.accounts(&signer)),
            Err(VestingError::WrongVestingAccount)
        ));
    }

    #[test]
    fn test_valid_accounts_accepted() {
        let fixture = Fixture::new(0, 0, 1_000, 1_000);
        let signer = fixture.beneficiary();
        assert!(verify_claim_accounts(&fixture.accounts(&signer)).is_ok());
    }

    #[test]
    fn test_record_withdrawal_rejects_drift() {
        let mut fixture = Fixture::new(0, 0, 1_000, 1_000);

        // The new total must equal the vested amount it was computed from.
        assert!(matches!(
            fixture.employee.record_withdrawal(100, 200),
            Err(VestingError::WithdrawalInvariantViolated)
        ));
        assert!(matches!(
            fixture.employee.record_withdrawal(1_001, 1_001),
            Err(VestingError::WithdrawalInvariantViolated)
        ));
        assert_eq!(fixture.employee.total_withdrawn, 0);

        fixture.employee.total_withdrawn = u64::MAX;
        assert!(matches!(
            fixture.employee.record_withdrawal(1, 1),
            Err(VestingError::ArithmeticOverflow)
        ));
    }
}
