//! # Fund Locker Contract
//!
//! Holds token balances on behalf of worlds (tenants) and releases them under
//! authorization and rate-limiting rules. Funds are keyed by the pair
//! `(token, world_id)`, where `token` is the address of a standard token
//! contract and `world_id` an opaque string chosen by the depositor.
//!
//! ## Access Control
//!
//! - **Owner**: the address that made the first deposit for a pair. Immutable.
//!   Only the owner may withdraw the whole balance with `withdraw_funds`.
//! - **Allowed retriever**: any address allow-listed for a token with
//!   `allow_address`. It may call `retrieve_funds` against any world holding
//!   that token, within the world's daily limit.
//! - **Anyone**: may deposit, manage the allow-list and set daily limits.
//!
//! ### Daily Limits
//!
//! Each pair carries a withdrawal window of `WINDOW_LENGTH` seconds anchored at
//! its last reset. Retrievals add up within the window and may not exceed the
//! limit; the first retrieval after the window elapses starts a new one. A pair
//! without a limit cannot be retrieved from.
//!
//! ### Atomicity
//!
//! Every failure is returned as a [`LockerError`]. The host then discards all
//! storage writes and token movements of the invocation, so no operation ever
//! leaves partial state behind.

#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, String};

use storage::FundKey;

mod errors;
mod events;
mod storage;
mod transfer;
mod window;

pub use errors::LockerError;
pub use storage::FundAccount;
pub use window::{WithdrawalWindow, WINDOW_LENGTH};

#[contract]
pub struct FundLocker;

#[contractimpl]
impl FundLocker {
    /// Deposit `amount` of `token` for `world_id`, pulled from `from`.
    ///
    /// `from` must have approved the locker for at least `amount` on the token
    /// contract. The first depositor of a pair becomes its owner.
    /// Returns the updated balance.
    pub fn deposit(
        env: Env,
        from: Address,
        token: Address,
        world_id: String,
        amount: i128,
    ) -> Result<i128, LockerError> {
        from.require_auth();
        storage::extend_instance(&env);
        if amount <= 0 {
            return Err(LockerError::InvalidAmount);
        }

        let key = FundKey {
            token: token.clone(),
            world_id: world_id.clone(),
        };
        let mut account = storage::read_account(&env, &key).unwrap_or(FundAccount {
            owner: from.clone(),
            balance: 0,
        });
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or(LockerError::Overflow)?;

        transfer::pull_from(&env, &token, &from, amount)?;
        storage::write_account(&env, &key, &account);

        events::deposit(&env, &token, &from, &world_id, amount, account.balance);
        Ok(account.balance)
    }

    /// Current balance held for `world_id`; 0 if nothing was ever deposited.
    pub fn get_balance(env: Env, token: Address, world_id: String) -> i128 {
        storage::read_account(&env, &FundKey { token, world_id })
            .map(|account| account.balance)
            .unwrap_or(0)
    }

    pub fn get_owner(env: Env, token: Address, world_id: String) -> Option<Address> {
        storage::read_account(&env, &FundKey { token, world_id })
            .map(|account| account.owner)
    }

    pub fn get_account(env: Env, token: Address, world_id: String) -> Option<FundAccount> {
        storage::read_account(&env, &FundKey { token, world_id })
    }

    /// Withdraw the whole balance of a pair to its owner.
    ///
    /// Returns the amount withdrawn. Calling it again on an emptied account is
    /// a no-op returning 0.
    pub fn withdraw_funds(
        env: Env,
        caller: Address,
        token: Address,
        world_id: String,
    ) -> Result<i128, LockerError> {
        caller.require_auth();
        storage::extend_instance(&env);

        let key = FundKey {
            token: token.clone(),
            world_id: world_id.clone(),
        };
        let mut account = match storage::read_account(&env, &key) {
            Some(account) if account.owner == caller => account,
            _ => return Err(LockerError::NotOwner),
        };

        let amount = account.balance;
        if amount == 0 {
            return Ok(0);
        }

        transfer::push_to(&env, &token, &account.owner, amount)?;
        account.balance = 0;
        storage::write_account(&env, &key, &account);

        events::withdraw(&env, &token, &account.owner, &world_id, amount);
        Ok(amount)
    }

    /// Allow `address` to retrieve funds of `token` from any world.
    pub fn allow_address(env: Env, token: Address, address: Address) {
        storage::extend_instance(&env);
        storage::write_allowance(&env, &token, &address, true);
        events::allow(&env, &token, &address);
    }

    /// Revoke a previous `allow_address`. Revoking an unknown address is a no-op.
    pub fn disallow_address(env: Env, token: Address, address: Address) {
        storage::extend_instance(&env);
        storage::write_allowance(&env, &token, &address, false);
        events::disallow(&env, &token, &address);
    }

    pub fn is_allowed(env: Env, token: Address, address: Address) -> bool {
        storage::read_allowance(&env, &token, &address)
    }

    /// Set the daily retrieval limit of a pair.
    ///
    /// The first call opens a window at the current ledger time. Later calls
    /// only replace the limit; the running window and its counter are kept.
    pub fn set_daily_limit(
        env: Env,
        token: Address,
        world_id: String,
        limit: i128,
    ) -> Result<(), LockerError> {
        storage::extend_instance(&env);
        if limit < 0 {
            return Err(LockerError::InvalidAmount);
        }

        let key = FundKey {
            token: token.clone(),
            world_id: world_id.clone(),
        };
        let window = match storage::read_window(&env, &key) {
            Some(mut window) => {
                window.daily_limit = limit;
                window
            }
            None => WithdrawalWindow::new(limit, env.ledger().timestamp()),
        };
        storage::write_window(&env, &key, &window);

        events::daily_limit(&env, &token, &world_id, limit);
        Ok(())
    }

    /// Amount still retrievable from a pair in the current window.
    ///
    /// An elapsed window reports the full limit, but only a retrieval actually
    /// resets it. Pairs without a limit report 0.
    pub fn get_current_limit(env: Env, token: Address, world_id: String) -> i128 {
        storage::read_window(&env, &FundKey { token, world_id })
            .map(|window| window.remaining(env.ledger().timestamp()))
            .unwrap_or(0)
    }

    pub fn get_withdrawal_window(
        env: Env,
        token: Address,
        world_id: String,
    ) -> Option<WithdrawalWindow> {
        storage::read_window(&env, &FundKey { token, world_id })
    }

    /// Retrieve `amount` from a world's funds to the allow-listed `caller`.
    ///
    /// Checks, in order: allow-list, amount, daily limit (after rolling an
    /// expired window over), balance. Returns the balance left for the world.
    pub fn retrieve_funds(
        env: Env,
        caller: Address,
        token: Address,
        world_id: String,
        amount: i128,
    ) -> Result<i128, LockerError> {
        caller.require_auth();
        storage::extend_instance(&env);

        if !storage::read_allowance(&env, &token, &caller) {
            return Err(LockerError::NotAuthorized);
        }
        if amount <= 0 {
            return Err(LockerError::InvalidAmount);
        }

        let key = FundKey {
            token: token.clone(),
            world_id: world_id.clone(),
        };
        let now = env.ledger().timestamp();
        let mut window =
            storage::read_window(&env, &key).unwrap_or_else(|| WithdrawalWindow::new(0, now));
        window.roll_over(now);
        window.record(amount)?;

        let mut account = match storage::read_account(&env, &key) {
            Some(account) if account.balance >= amount => account,
            _ => return Err(LockerError::InsufficientFunds),
        };
        account.balance -= amount;

        transfer::push_to(&env, &token, &caller, amount)?;
        storage::write_account(&env, &key, &account);
        storage::write_window(&env, &key, &window);

        events::retrieve(&env, &token, &caller, &world_id, amount, account.balance);
        Ok(account.balance)
    }
}
