//! # Validation Tests
//!
//! Request checks and value accounting, exercised directly against the
//! contract's storage.

use super::*;
use crate::test::setup;
use crate::validation::{check_attached_value, check_request, ledger_amount, total};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Vec};

#[test]
fn test_check_request_accepts_paired_input() {
    let s = setup();
    let recipients = vec![&s.env, Address::generate(&s.env)];
    let amounts = vec![&s.env, 1u128];

    let result = s
        .env
        .as_contract(&s.client.address, || {
            check_request(&s.env, &s.owner, &recipients, &amounts)
        });
    assert_eq!(result, Ok(()));
}

#[test]
fn test_check_request_order() {
    let s = setup();
    let stranger = Address::generate(&s.env);
    let empty: Vec<Address> = Vec::new(&s.env);
    let amounts = vec![&s.env, 1u128, 2u128];

    s.env.as_contract(&s.client.address, || {
        // Authorization wins over every shape problem
        assert_eq!(
            check_request(&s.env, &stranger, &empty, &amounts),
            Err(DistributionError::Unauthorized)
        );
        // Empty wins over length mismatch
        assert_eq!(
            check_request(&s.env, &s.owner, &empty, &amounts),
            Err(DistributionError::EmptyInput)
        );
        let one = vec![&s.env, Address::generate(&s.env)];
        assert_eq!(
            check_request(&s.env, &s.owner, &one, &amounts),
            Err(DistributionError::LengthMismatch)
        );
    });
}

#[test]
fn test_total() {
    let s = setup();
    assert_eq!(total(&vec![&s.env, 15u128, 25, 5, 10, 15]), Ok(70));
    assert_eq!(total(&Vec::new(&s.env)), Ok(0));
    assert_eq!(
        total(&vec![&s.env, u128::MAX, 1u128]),
        Err(DistributionError::AmountOverflow)
    );
}

#[test]
fn test_check_attached_value() {
    let s = setup();
    let amounts = vec![&s.env, 15u128, 25, 5, 10, 15];

    assert_eq!(check_attached_value(70, &amounts), Ok(70));
    assert_eq!(
        check_attached_value(0, &amounts),
        Err(DistributionError::ZeroValue)
    );
    assert_eq!(
        check_attached_value(100, &amounts),
        Err(DistributionError::ExcessValue)
    );
    assert_eq!(
        check_attached_value(69, &amounts),
        Err(DistributionError::InsufficientValue)
    );
}

#[test]
fn test_zero_value_checked_before_overflow() {
    let s = setup();
    let amounts = vec![&s.env, u128::MAX, 1u128];

    assert_eq!(
        check_attached_value(0, &amounts),
        Err(DistributionError::ZeroValue)
    );
}

#[test]
fn test_ledger_amount_range() {
    assert_eq!(ledger_amount(0), Ok(0));
    assert_eq!(ledger_amount(i128::MAX as u128), Ok(i128::MAX));
    assert_eq!(
        ledger_amount(i128::MAX as u128 + 1),
        Err(DistributionError::AmountOverflow)
    );
}
