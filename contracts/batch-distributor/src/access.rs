//! # Access Gate
//!
//! Holds the owner and the set of addresses allowed to run distributions.
//!
//! ## Model
//!
//! - The owner is recorded once at initialization and is the only address
//!   that can change the authorized set.
//! - The authorized set is a per-address flag. The owner is granted at
//!   initialization; every other entry comes from `grant_access`.
//! - [`authorize`] is a single storage read for members and non-members
//!   alike and never writes.

use soroban_sdk::{contracttype, Address, Env};

use crate::error::DistributionError;

/// Storage keys for access control
#[contracttype]
#[derive(Clone)]
pub enum AccessKey {
    /// Address allowed to administer the authorized set
    Owner,
    /// Distribution permission flag for an address
    Authorized(Address),
}

// ════════════════════════════════════════════════════════════════════
//  Owner
// ════════════════════════════════════════════════════════════════════

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&AccessKey::Owner)
}

/// Get the owner. Fails with `NotInitialized` before `initialize`.
pub fn get_owner(env: &Env) -> Result<Address, DistributionError> {
    env.storage()
        .instance()
        .get(&AccessKey::Owner)
        .ok_or(DistributionError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&AccessKey::Owner, owner);
}

/// Require that `caller` is the owner and has authorized the call.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), DistributionError> {
    let owner = get_owner(env)?;
    if *caller != owner {
        return Err(DistributionError::NotOwner);
    }
    caller.require_auth();
    Ok(())
}

// ════════════════════════════════════════════════════════════════════
//  Authorized set
// ════════════════════════════════════════════════════════════════════

/// Returns true iff `caller` may run distributions.
pub fn authorize(env: &Env, caller: &Address) -> bool {
    env.storage()
        .instance()
        .get(&AccessKey::Authorized(caller.clone()))
        .unwrap_or(false)
}

/// Require that `caller` is in the authorized set.
pub fn require_authorized(env: &Env, caller: &Address) -> Result<(), DistributionError> {
    if authorize(env, caller) {
        Ok(())
    } else {
        Err(DistributionError::Unauthorized)
    }
}

/// Set or clear the permission flag. Cleared entries are removed from
/// storage rather than kept as `false`.
pub fn set_access(env: &Env, account: &Address, allowed: bool) {
    let key = AccessKey::Authorized(account.clone());
    if allowed {
        env.storage().instance().set(&key, &true);
    } else {
        env.storage().instance().remove(&key);
    }
}
