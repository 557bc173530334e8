use soroban_sdk::{token, Address, Env};

use crate::errors::LockerError;

/// Pull `amount` of `token` from `payer` into the locker.
///
/// Spends the allowance `payer` granted to the locker on the token contract.
pub(crate) fn pull_from(
    env: &Env,
    token: &Address,
    payer: &Address,
    amount: i128,
) -> Result<(), LockerError> {
    let locker = env.current_contract_address();
    let client = token::Client::new(env, token);
    match client.try_transfer_from(&locker, payer, &locker, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(LockerError::TransferFailed),
    }
}

/// Push `amount` of `token` held by the locker to `recipient`.
pub(crate) fn push_to(
    env: &Env,
    token: &Address,
    recipient: &Address,
    amount: i128,
) -> Result<(), LockerError> {
    let client = token::Client::new(env, token);
    match client.try_transfer(&env.current_contract_address(), recipient, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(LockerError::TransferFailed),
    }
}
