use soroban_sdk::{contracttype, Address, Env, String};

use crate::window::WithdrawalWindow;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_EXTEND_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_EXTEND_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const PERSISTENT_EXTEND_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_EXTEND_AMOUNT - DAY_IN_LEDGERS;

/// Funds are held per token contract and per world.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FundKey {
    pub token: Address,
    pub world_id: String,
}

/// Retrieval rights are granted per token, shared by every world holding it.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AllowanceKey {
    pub token: Address,
    pub address: Address,
}

/// Balance and owner of one (token, world) pair.
///
/// The owner is whoever made the first deposit and never changes. A zero
/// balance is kept as is; accounts are never removed.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FundAccount {
    pub owner: Address,
    pub balance: i128,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Account(FundKey),
    Allowance(AllowanceKey),
    Window(FundKey),
}

pub(crate) fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_EXTEND_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_EXTEND_AMOUNT);
}

pub(crate) fn read_account(env: &Env, key: &FundKey) -> Option<FundAccount> {
    let key = DataKey::Account(key.clone());
    let account = env.storage().persistent().get::<DataKey, FundAccount>(&key);
    if account.is_some() {
        extend_persistent(env, &key);
    }
    account
}

pub(crate) fn write_account(env: &Env, key: &FundKey, account: &FundAccount) {
    let key = DataKey::Account(key.clone());
    env.storage().persistent().set(&key, account);
    extend_persistent(env, &key);
}

pub(crate) fn read_allowance(env: &Env, token: &Address, address: &Address) -> bool {
    let key = DataKey::Allowance(AllowanceKey {
        token: token.clone(),
        address: address.clone(),
    });
    match env.storage().persistent().get::<DataKey, bool>(&key) {
        Some(allowed) => {
            extend_persistent(env, &key);
            allowed
        }
        None => false,
    }
}

pub(crate) fn write_allowance(env: &Env, token: &Address, address: &Address, allowed: bool) {
    let key = DataKey::Allowance(AllowanceKey {
        token: token.clone(),
        address: address.clone(),
    });
    if allowed {
        env.storage().persistent().set(&key, &true);
        extend_persistent(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub(crate) fn read_window(env: &Env, key: &FundKey) -> Option<WithdrawalWindow> {
    let key = DataKey::Window(key.clone());
    let window = env
        .storage()
        .persistent()
        .get::<DataKey, WithdrawalWindow>(&key);
    if window.is_some() {
        extend_persistent(env, &key);
    }
    window
}

pub(crate) fn write_window(env: &Env, key: &FundKey, window: &WithdrawalWindow) {
    let key = DataKey::Window(key.clone());
    env.storage().persistent().set(&key, window);
    extend_persistent(env, &key);
}
