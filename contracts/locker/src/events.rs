use soroban_sdk::{Address, Env, String, Symbol};

pub(crate) fn deposit(
    env: &Env,
    token: &Address,
    from: &Address,
    world_id: &String,
    amount: i128,
    balance: i128,
) {
    env.events().publish(
        (Symbol::new(env, "deposit"), token.clone(), from.clone()),
        (world_id.clone(), amount, balance),
    );
}

pub(crate) fn retrieve(
    env: &Env,
    token: &Address,
    caller: &Address,
    world_id: &String,
    amount: i128,
    balance: i128,
) {
    env.events().publish(
        (Symbol::new(env, "retrieve"), token.clone(), caller.clone()),
        (world_id.clone(), amount, balance),
    );
}

pub(crate) fn withdraw(
    env: &Env,
    token: &Address,
    owner: &Address,
    world_id: &String,
    amount: i128,
) {
    env.events().publish(
        (Symbol::new(env, "withdraw"), token.clone(), owner.clone()),
        (world_id.clone(), amount),
    );
}

pub(crate) fn allow(env: &Env, token: &Address, address: &Address) {
    env.events().publish(
        (Symbol::new(env, "allow"), token.clone()),
        address.clone(),
    );
}

pub(crate) fn disallow(env: &Env, token: &Address, address: &Address) {
    env.events().publish(
        (Symbol::new(env, "disallow"), token.clone()),
        address.clone(),
    );
}

pub(crate) fn daily_limit(env: &Env, token: &Address, world_id: &String, limit: i128) {
    env.events().publish(
        (Symbol::new(env, "limit"), token.clone()),
        (world_id.clone(), limit),
    );
}
