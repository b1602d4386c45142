use soroban_sdk::{contracttype, Address, Env};

use crate::error::Error;
use crate::types::Swap;

const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_BUMP: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_THRESHOLD: u32 = INSTANCE_BUMP - DAY_IN_LEDGERS;
pub const SWAP_BUMP: u32 = 30 * DAY_IN_LEDGERS;
pub const SWAP_THRESHOLD: u32 = SWAP_BUMP - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    NativeToken,
    Fee,
    Uncollected,
    NextId,
    PushRegistry(Address),
    /// Single-owner asset held for an open swap: `(registry, id) -> swap id`.
    Held(Address, u32),
    Swap(u64),
}

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_THRESHOLD, INSTANCE_BUMP);
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn write_config(e: &Env, admin: &Address, native_token: &Address, fee: i128) {
    let s = e.storage().instance();
    s.set(&DataKey::Admin, admin);
    s.set(&DataKey::NativeToken, native_token);
    s.set(&DataKey::Fee, &fee);
    s.set(&DataKey::Uncollected, &0i128);
    s.set(&DataKey::NextId, &0u64);
}

pub fn admin(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn native_token(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .ok_or(Error::NotInitialized)
}

// --- swap registry ---

pub fn next_id(e: &Env) -> u64 {
    let mut n: u64 = e.storage().instance().get(&DataKey::NextId).unwrap_or(0);
    n += 1;
    e.storage().instance().set(&DataKey::NextId, &n);
    n
}

pub fn load_swap(e: &Env, id: u64) -> Result<Swap, Error> {
    e.storage()
        .persistent()
        .get(&DataKey::Swap(id))
        .ok_or(Error::SwapNotFound)
}

pub fn save_swap(e: &Env, swap: &Swap) {
    let key = DataKey::Swap(swap.id);
    e.storage().persistent().set(&key, swap);
    e.storage()
        .persistent()
        .extend_ttl(&key, SWAP_THRESHOLD, SWAP_BUMP);
}

pub fn remove_swap(e: &Env, id: u64) {
    e.storage().persistent().remove(&DataKey::Swap(id));
}

// --- fee ledger ---

pub fn fee(e: &Env) -> Result<i128, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Fee)
        .ok_or(Error::NotInitialized)
}

pub fn set_fee(e: &Env, fee: i128) {
    e.storage().instance().set(&DataKey::Fee, &fee);
}

pub fn uncollected(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::Uncollected)
        .unwrap_or(0)
}

pub fn credit_fee(e: &Env, amount: i128) {
    let total = uncollected(e) + amount;
    e.storage().instance().set(&DataKey::Uncollected, &total);
}

/// Zeroes the ledger and returns what it held.
pub fn take_uncollected(e: &Env) -> i128 {
    let total = uncollected(e);
    e.storage().instance().set(&DataKey::Uncollected, &0i128);
    total
}

// --- push-only registries ---

pub fn is_push_registry(e: &Env, registry: &Address) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::PushRegistry(registry.clone()))
        .unwrap_or(false)
}

pub fn set_push_registry(e: &Env, registry: &Address, enabled: bool) {
    let key = DataKey::PushRegistry(registry.clone());
    if enabled {
        e.storage().instance().set(&key, &true);
    } else {
        e.storage().instance().remove(&key);
    }
}

pub fn holding_swap(e: &Env, registry: &Address, id: u32) -> Option<u64> {
    e.storage()
        .persistent()
        .get(&DataKey::Held(registry.clone(), id))
}

pub fn bind_held(e: &Env, registry: &Address, id: u32, swap_id: u64) {
    let key = DataKey::Held(registry.clone(), id);
    e.storage().persistent().set(&key, &swap_id);
    e.storage()
        .persistent()
        .extend_ttl(&key, SWAP_THRESHOLD, SWAP_BUMP);
}

pub fn unbind_held(e: &Env, registry: &Address, id: u32) {
    e.storage()
        .persistent()
        .remove(&DataKey::Held(registry.clone(), id));
}
