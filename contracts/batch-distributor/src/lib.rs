#![no_std]

//! # Batch Distributor Contract
//!
//! Pays a list of recipients in one atomic invocation, either from a token
//! balance that a third party has approved this contract to spend, or from
//! native value the caller attaches to the call.
//!
//! ## Distribution Paths
//!
//! | Entry point         | Value source                                   |
//! |---------------------|------------------------------------------------|
//! | `distribute_token`  | `source` balance on `token`, via allowance     |
//! | `distribute_native` | `attached_value` moved from the caller         |
//!
//! Both paths check, in order: caller is authorized, recipients are
//! non-empty, recipients and amounts pair up. The native path then requires
//! the attached value to be non-zero and exactly equal to the sum of
//! amounts.
//!
//! ## Atomicity
//!
//! Any error aborts the invocation and the host rolls back every transfer
//! made so far, including the escrow deposit. No partial payout is ever
//! visible.
//!
//! Calls are not idempotent: replaying a successful call pays every
//! recipient a second time.
//!
//! The contract holds no balance between calls. Native tokens sent straight
//! to the contract address, outside `distribute_native`, are not reachable
//! by any entry point and stay locked.

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Vec};

// ─── Feature modules ───
pub mod access;
pub mod distribution;
pub mod error;
pub mod events;
pub mod validation;
// ─── End feature modules ───

pub use error::DistributionError;
pub use events::{
    AccessChangedEvent, NativeDistributedEvent, OwnershipTransferredEvent, TokenDistributedEvent,
};

#[cfg(test)]
mod validation_test;
// ─── End test modules ───

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Token contract standing in for the chain's native currency
    NativeToken,
}

#[contract]
pub struct BatchDistributorContract;

#[contractimpl]
impl BatchDistributorContract {
    // ── Initialization ──────────────────────────────────────────────

    /// One-time setup. Records `owner`, grants it distribution access and
    /// stores the native token used by `distribute_native`.
    ///
    /// The caller must authorize as `owner`.
    pub fn initialize(
        env: Env,
        owner: Address,
        native_token: Address,
    ) -> Result<(), DistributionError> {
        if access::is_initialized(&env) {
            return Err(DistributionError::AlreadyInitialized);
        }
        owner.require_auth();

        access::set_owner(&env, &owner);
        access::set_access(&env, &owner, true);
        env.storage()
            .instance()
            .set(&DataKey::NativeToken, &native_token);

        events::emit_access_granted(&env, &owner, &owner);
        Ok(())
    }

    // ── Admin: Access list ──────────────────────────────────────────

    /// Add `account` to the authorized set. Owner only.
    pub fn grant_access(
        env: Env,
        owner: Address,
        account: Address,
    ) -> Result<(), DistributionError> {
        access::require_owner(&env, &owner)?;
        access::set_access(&env, &account, true);
        events::emit_access_granted(&env, &account, &owner);
        Ok(())
    }

    /// Remove `account` from the authorized set. Owner only.
    ///
    /// The owner may revoke itself; it keeps the right to administer the set.
    pub fn revoke_access(
        env: Env,
        owner: Address,
        account: Address,
    ) -> Result<(), DistributionError> {
        access::require_owner(&env, &owner)?;
        access::set_access(&env, &account, false);
        events::emit_access_revoked(&env, &account, &owner);
        Ok(())
    }

    /// Hand administration to `new_owner`. The authorized set is unchanged.
    pub fn transfer_ownership(
        env: Env,
        owner: Address,
        new_owner: Address,
    ) -> Result<(), DistributionError> {
        access::require_owner(&env, &owner)?;
        access::set_owner(&env, &new_owner);
        events::emit_ownership_transferred(&env, &owner, &new_owner);
        Ok(())
    }

    // ── Distribution ────────────────────────────────────────────────

    /// Pull `amounts[i]` of `token` from `source` to `recipients[i]`.
    ///
    /// `source` must have approved this contract for at least the sum of
    /// `amounts`; the token ledger enforces it on each transfer.
    ///
    /// # Errors
    /// - `Unauthorized`, `EmptyInput`, `LengthMismatch` from validation
    /// - `AmountOverflow` if an amount exceeds the ledger's range
    /// - `TransferFailed` if the ledger rejects any transfer
    pub fn distribute_token(
        env: Env,
        caller: Address,
        source: Address,
        token: Address,
        recipients: Vec<Address>,
        amounts: Vec<u128>,
    ) -> Result<(), DistributionError> {
        caller.require_auth();
        validation::check_request(&env, &caller, &recipients, &amounts)?;

        let total = distribution::pull(&env, &source, &token, &recipients, &amounts)?;

        events::emit_token_distributed(&env, &token, &caller, &source, recipients.len(), total);
        Ok(())
    }

    /// Pay `amounts[i]` of the native token to `recipients[i]` out of
    /// `attached_value`, which the caller deposits in the same call.
    ///
    /// # Errors
    /// - `Unauthorized`, `EmptyInput`, `LengthMismatch` from validation
    /// - `ZeroValue` if nothing is attached
    /// - `AmountOverflow` if the amounts do not sum within `u128`
    /// - `ExcessValue` / `InsufficientValue` unless the attached value
    ///   equals the sum exactly
    /// - `TransferFailed` if the deposit or any payout is rejected
    pub fn distribute_native(
        env: Env,
        caller: Address,
        recipients: Vec<Address>,
        amounts: Vec<u128>,
        attached_value: u128,
    ) -> Result<(), DistributionError> {
        caller.require_auth();
        validation::check_request(&env, &caller, &recipients, &amounts)?;
        let total = validation::check_attached_value(attached_value, &amounts)?;

        let native_token = Self::native_token(&env)?;
        distribution::escrow(
            &env,
            &native_token,
            &caller,
            &recipients,
            &amounts,
            attached_value,
        )?;

        events::emit_native_distributed(&env, &caller, recipients.len(), total);
        Ok(())
    }

    // ── Read-only Queries ───────────────────────────────────────────

    /// Whether `account` may run distributions.
    pub fn is_authorized(env: Env, account: Address) -> bool {
        access::authorize(&env, &account)
    }

    pub fn get_owner(env: Env) -> Result<Address, DistributionError> {
        access::get_owner(&env)
    }

    pub fn get_native_token(env: Env) -> Result<Address, DistributionError> {
        Self::native_token(&env)
    }

    // ── Internal Helpers ────────────────────────────────────────────

    fn native_token(env: &Env) -> Result<Address, DistributionError> {
        env.storage()
            .instance()
            .get(&DataKey::NativeToken)
            .ok_or(DistributionError::NotInitialized)
    }
}
