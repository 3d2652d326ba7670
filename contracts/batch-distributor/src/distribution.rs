//! # Transfer Loops
//!
//! The two distribution algorithms. Both walk recipients in the order
//! supplied and stop at the first rejected transfer; the caller returns the
//! error and the host unwinds every transfer already made in the call.
//!
//! - **Pull**: the token ledger moves `amounts[i]` from `source` to
//!   `recipients[i]` under the allowance `source` granted this contract.
//!   Allowance is never read or cached here; the ledger decrements it per
//!   transfer.
//! - **Escrow**: the attached value is moved from the caller into this
//!   contract, then pushed out to each recipient. The contract balance is
//!   back to where it started once the loop completes.

use soroban_sdk::{token, Address, Env, Vec};

use crate::error::DistributionError;
use crate::validation::ledger_amount;

/// Pull `amounts[i]` of `token` from `source` to each `recipients[i]`.
///
/// Returns the total moved.
pub fn pull(
    env: &Env,
    source: &Address,
    token: &Address,
    recipients: &Vec<Address>,
    amounts: &Vec<u128>,
) -> Result<u128, DistributionError> {
    let ledger = token::Client::new(env, token);
    let spender = env.current_contract_address();

    let mut total = 0u128;
    for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
        let value = ledger_amount(amount)?;
        settled(ledger.try_transfer_from(&spender, source, &recipient, &value))?;
        total = total
            .checked_add(amount)
            .ok_or(DistributionError::AmountOverflow)?;
    }
    Ok(total)
}

/// Move `attached_value` of the native token from `caller` into escrow and
/// pay it out to `recipients`. `attached_value` must already equal the sum
/// of `amounts`.
pub fn escrow(
    env: &Env,
    native_token: &Address,
    caller: &Address,
    recipients: &Vec<Address>,
    amounts: &Vec<u128>,
    attached_value: u128,
) -> Result<(), DistributionError> {
    let ledger = token::Client::new(env, native_token);
    let escrow = env.current_contract_address();

    let deposit = ledger_amount(attached_value)?;
    settled(ledger.try_transfer(caller, &escrow, &deposit))?;

    for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
        let value = ledger_amount(amount)?;
        settled(ledger.try_transfer(&escrow, &recipient, &value))?;
    }
    Ok(())
}

/// Collapse a `try_*` token client result. Any host, conversion or
/// contract error counts as a rejected transfer.
fn settled<T, C, E>(outcome: Result<Result<T, C>, E>) -> Result<T, DistributionError> {
    match outcome {
        Ok(Ok(value)) => Ok(value),
        _ => Err(DistributionError::TransferFailed),
    }
}
