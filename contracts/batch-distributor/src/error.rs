//! # Distribution Errors
//!
//! Every fallible entry point returns `Result<_, DistributionError>`. An
//! `Err` fails the invocation and the host discards every state change made
//! during it, including token transfers already performed by the loop.
//! Auth failures on `require_auth` are still signaled by host panic.

use soroban_sdk::contracterror;

/// Centralized contract error codes.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DistributionError {
    /// `initialize` was called on an already configured contract.
    AlreadyInitialized = 1,
    /// The contract has not been initialized yet.
    NotInitialized = 2,
    /// Caller is not in the authorized distributor set.
    Unauthorized = 3,
    /// Administrative call from an address that is not the owner.
    NotOwner = 4,
    /// Recipient list is empty.
    EmptyInput = 5,
    /// Recipient and amount lists differ in length.
    LengthMismatch = 6,
    /// Native distribution invoked with no attached value.
    ZeroValue = 7,
    /// Attached value is larger than the sum of amounts.
    ExcessValue = 8,
    /// Attached value is smaller than the sum of amounts.
    InsufficientValue = 9,
    /// Sum of amounts overflowed, or an amount exceeds the token ledger's range.
    AmountOverflow = 10,
    /// The token ledger rejected one of the transfers.
    TransferFailed = 11,
}

impl DistributionError {
    /// Human-readable reason for the failure.
    pub fn reason(&self) -> &'static str {
        match self {
            DistributionError::AlreadyInitialized => "Contract is already initialized.",
            DistributionError::NotInitialized => "Contract is not initialized.",
            DistributionError::Unauthorized => "You do not have access rights.",
            DistributionError::NotOwner => "Only the owner can manage access.",
            DistributionError::EmptyInput => "Empty array.",
            DistributionError::LengthMismatch => "Array lengths do not match.",
            DistributionError::ZeroValue => "You sent 0 value.",
            DistributionError::ExcessValue => "You have sent more value than needed.",
            DistributionError::InsufficientValue => "You have sent less value than needed.",
            DistributionError::AmountOverflow => "Amount is out of range.",
            DistributionError::TransferFailed => "Transfer was rejected by the ledger.",
        }
    }
}
