use anchor_lang::prelude::*;

use crate::errors::TonomyError;

/// Allowance sentinel that is never decremented on spends.
pub const UNLIMITED_ALLOWANCE: u128 = u128::MAX;

pub fn debit(balance: u128, amount: u128) -> Result<u128> {
    balance
        .checked_sub(amount)
        .ok_or_else(|| error!(TonomyError::InsufficientBalance))
}

pub fn credit(balance: u128, amount: u128) -> Result<u128> {
    balance
        .checked_add(amount)
        .ok_or_else(|| error!(TonomyError::ArithmeticOverflow))
}

pub fn debit_for_burn(balance: u128, amount: u128) -> Result<u128> {
    balance
        .checked_sub(amount)
        .ok_or_else(|| error!(TonomyError::BurnExceedsBalance))
}

/// Returns the allowance remaining after spending `amount`. The unlimited
/// sentinel passes through unchanged; any finite allowance must cover the
/// full amount.
pub fn spend_allowance(allowance: u128, amount: u128) -> Result<u128> {
    if allowance == UNLIMITED_ALLOWANCE {
        return Ok(allowance);
    }
    allowance
        .checked_sub(amount)
        .ok_or_else(|| error!(TonomyError::InsufficientAllowance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debit_and_credit_move_exact_amounts() {
        assert_eq!(debit(1_000, 400).unwrap(), 600);
        assert_eq!(credit(600, 400).unwrap(), 1_000);
    }

    #[test]
    fn zero_amount_operations_are_no_ops() {
        assert_eq!(debit(0, 0).unwrap(), 0);
        assert_eq!(credit(u128::MAX, 0).unwrap(), u128::MAX);
        assert_eq!(spend_allowance(5, 0).unwrap(), 5);
    }

    #[test]
    fn debit_fails_on_insufficient_balance() {
        assert_eq!(
            debit(100, 101).unwrap_err(),
            error!(TonomyError::InsufficientBalance)
        );
    }

    #[test]
    fn burn_debit_reports_its_own_error() {
        assert_eq!(
            debit_for_burn(100, 101).unwrap_err(),
            error!(TonomyError::BurnExceedsBalance)
        );
    }

    #[test]
    fn credit_fails_instead_of_wrapping() {
        assert_eq!(
            credit(u128::MAX, 1).unwrap_err(),
            error!(TonomyError::ArithmeticOverflow)
        );
    }

    #[test]
    fn finite_allowance_is_decremented_exactly() {
        assert_eq!(spend_allowance(500, 200).unwrap(), 300);
        assert_eq!(spend_allowance(200, 200).unwrap(), 0);
    }

    #[test]
    fn finite_allowance_must_cover_full_amount() {
        assert_eq!(
            spend_allowance(199, 200).unwrap_err(),
            error!(TonomyError::InsufficientAllowance)
        );
    }

    #[test]
    fn unlimited_allowance_is_left_unmodified() {
        assert_eq!(
            spend_allowance(UNLIMITED_ALLOWANCE, u128::MAX - 1).unwrap(),
            UNLIMITED_ALLOWANCE
        );
    }
}
