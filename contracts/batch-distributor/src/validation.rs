//! Request validation shared by both distribution paths.

use core::cmp::Ordering;

use soroban_sdk::{Address, Env, Vec};

use crate::access;
use crate::error::DistributionError;

/// Checks that run before any transfer, in this order:
///
/// 1. caller is in the authorized set (`Unauthorized`)
/// 2. at least one recipient (`EmptyInput`)
/// 3. one amount per recipient (`LengthMismatch`)
///
/// Read-only; the first failing check wins.
pub fn check_request(
    env: &Env,
    caller: &Address,
    recipients: &Vec<Address>,
    amounts: &Vec<u128>,
) -> Result<(), DistributionError> {
    access::require_authorized(env, caller)?;
    if recipients.is_empty() {
        return Err(DistributionError::EmptyInput);
    }
    if recipients.len() != amounts.len() {
        return Err(DistributionError::LengthMismatch);
    }
    Ok(())
}

/// Exact sum of `amounts`. Overflow fails closed.
pub fn total(amounts: &Vec<u128>) -> Result<u128, DistributionError> {
    amounts.iter().try_fold(0u128, |sum, amount| {
        sum.checked_add(amount)
            .ok_or(DistributionError::AmountOverflow)
    })
}

/// The escrow must be non-zero and cover the distribution exactly.
/// Returns the sum of `amounts` on success.
pub fn check_attached_value(
    attached_value: u128,
    amounts: &Vec<u128>,
) -> Result<u128, DistributionError> {
    if attached_value == 0 {
        return Err(DistributionError::ZeroValue);
    }
    let sum = total(amounts)?;
    match attached_value.cmp(&sum) {
        Ordering::Greater => Err(DistributionError::ExcessValue),
        Ordering::Less => Err(DistributionError::InsufficientValue),
        Ordering::Equal => Ok(sum),
    }
}

/// Convert to the token interface's `i128` denomination.
pub fn ledger_amount(amount: u128) -> Result<i128, DistributionError> {
    i128::try_from(amount).map_err(|_| DistributionError::AmountOverflow)
}
