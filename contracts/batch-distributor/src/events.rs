//! # Structured Event Emissions for Distributions
//!
//! Events for completed distributions and access list changes. A failed
//! invocation is rolled back together with its events, so every event here
//! describes something that actually happened.
//!
//! | Event              | Topics                        | Description                         |
//! |--------------------|-------------------------------|-------------------------------------|
//! | TokenDistributed   | `dist_tok`, token, caller     | Token batch pulled from a source    |
//! | NativeDistributed  | `dist_nat`, caller            | Attached native value paid out      |
//! | AccessGranted      | `acc_gr`, account             | Address added to the authorized set |
//! | AccessRevoked      | `acc_rv`, account             | Address removed from the set        |
//! | OwnershipTransfer  | `own_xfer`                    | Owner replaced                      |

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ════════════════════════════════════════════════════════════════════
//  Event Topics
// ════════════════════════════════════════════════════════════════════

/// Topic for token (pull) distributions
pub const TOPIC_TOKEN_DISTRIBUTED: Symbol = symbol_short!("dist_tok");
/// Topic for native (escrow) distributions
pub const TOPIC_NATIVE_DISTRIBUTED: Symbol = symbol_short!("dist_nat");
/// Topic for access granted events
pub const TOPIC_ACCESS_GRANTED: Symbol = symbol_short!("acc_gr");
/// Topic for access revoked events
pub const TOPIC_ACCESS_REVOKED: Symbol = symbol_short!("acc_rv");
/// Topic for ownership transfer events
pub const TOPIC_OWNERSHIP_TRANSFERRED: Symbol = symbol_short!("own_xfer");

// ════════════════════════════════════════════════════════════════════
//  Event Data Structures
// ════════════════════════════════════════════════════════════════════

/// Event data for a completed token distribution
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct TokenDistributedEvent {
    /// Holder the tokens were pulled from
    pub source: Address,
    /// Number of recipients paid
    pub recipients: u32,
    /// Sum of all amounts moved
    pub total: u128,
}

/// Event data for a completed native distribution
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct NativeDistributedEvent {
    /// Number of recipients paid
    pub recipients: u32,
    /// Attached value, equal to the sum of all amounts
    pub total: u128,
}

/// Event data for access list changes
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct AccessChangedEvent {
    /// Address whose permission changed
    pub account: Address,
    /// Address that made the change
    pub changed_by: Address,
}

/// Event data for ownership transfer
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

// ════════════════════════════════════════════════════════════════════
//  Event Emission Functions
// ════════════════════════════════════════════════════════════════════

pub fn emit_token_distributed(
    env: &Env,
    token: &Address,
    caller: &Address,
    source: &Address,
    recipients: u32,
    total: u128,
) {
    let event = TokenDistributedEvent {
        source: source.clone(),
        recipients,
        total,
    };
    env.events().publish(
        (TOPIC_TOKEN_DISTRIBUTED, token.clone(), caller.clone()),
        event,
    );
}

pub fn emit_native_distributed(env: &Env, caller: &Address, recipients: u32, total: u128) {
    let event = NativeDistributedEvent { recipients, total };
    env.events()
        .publish((TOPIC_NATIVE_DISTRIBUTED, caller.clone()), event);
}

/// Emit an access granted event.
pub fn emit_access_granted(env: &Env, account: &Address, changed_by: &Address) {
    let event = AccessChangedEvent {
        account: account.clone(),
        changed_by: changed_by.clone(),
    };
    env.events()
        .publish((TOPIC_ACCESS_GRANTED, account.clone()), event);
}

/// Emit an access revoked event.
pub fn emit_access_revoked(env: &Env, account: &Address, changed_by: &Address) {
    let event = AccessChangedEvent {
        account: account.clone(),
        changed_by: changed_by.clone(),
    };
    env.events()
        .publish((TOPIC_ACCESS_REVOKED, account.clone()), event);
}

pub fn emit_ownership_transferred(env: &Env, previous_owner: &Address, new_owner: &Address) {
    let event = OwnershipTransferredEvent {
        previous_owner: previous_owner.clone(),
        new_owner: new_owner.clone(),
    };
    env.events().publish((TOPIC_OWNERSHIP_TRANSFERRED,), event);
}
