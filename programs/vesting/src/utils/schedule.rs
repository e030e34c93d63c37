//! Cliff + linear vesting math.
//!
//! Pure functions over timestamps supplied by the caller; nothing here
//! reads the cluster clock.

use crate::constants::MAX_COMPANY_NAME_LEN;
use crate::error::VestingError;

/// start <= cliff <= end
pub fn validate_schedule(
    start_time: i64,
    cliff_time: i64,
    end_time: i64,
) -> Result<(), VestingError> {
    if start_time > cliff_time || cliff_time > end_time {
        return Err(VestingError::InvalidSchedule);
    }
    Ok(())
}

pub fn validate_company_name(company_name: &str) -> Result<(), VestingError> {
    if company_name.is_empty() {
        return Err(VestingError::CompanyNameEmpty);
    }
    if company_name.len() > MAX_COMPANY_NAME_LEN {
        return Err(VestingError::CompanyNameTooLong);
    }
    Ok(())
}

/// Amount vested at `now`.
///
/// - before the cliff: 0
/// - at or after the end: `total_amount`
/// - otherwise: `total_amount * (now - start) / (end - start)`, truncated
pub fn vested_amount(
    start_time: i64,
    cliff_time: i64,
    end_time: i64,
    total_amount: u64,
    now: i64,
) -> Result<u64, VestingError> {
    validate_schedule(start_time, cliff_time, end_time)?;

    if now < cliff_time {
        return Ok(0);
    }
    if now >= end_time {
        return Ok(total_amount);
    }

    // cliff <= now < end, so start < end and both spans are positive.
    let elapsed = now
        .checked_sub(start_time)
        .ok_or(VestingError::ArithmeticOverflow)?;
    let duration = end_time
        .checked_sub(start_time)
        .ok_or(VestingError::ArithmeticOverflow)?;
    let elapsed = u128::try_from(elapsed).map_err(|_| VestingError::ArithmeticOverflow)?;
    let duration = u128::try_from(duration).map_err(|_| VestingError::ArithmeticOverflow)?;

    let vested = (total_amount as u128)
        .checked_mul(elapsed)
        .ok_or(VestingError::ArithmeticOverflow)?
        .checked_div(duration)
        .ok_or(VestingError::ArithmeticOverflow)?;

    u64::try_from(vested).map_err(|_| VestingError::ArithmeticOverflow)
}
