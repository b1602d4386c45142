use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use crate::types::AssetRef;

// Topic names. Every swap event is published under `(name, swap_id)`.
pub const SWAP_PROPOSED: Symbol = symbol_short!("proposed");
pub const SWAP_INITIATED: Symbol = symbol_short!("initiated");
pub const SWAP_CANCELED: Symbol = symbol_short!("canceled");
pub const SWAP_REJECTED: Symbol = symbol_short!("rejected");
pub const SWAP_EXECUTED: Symbol = symbol_short!("executed");
pub const FEE_SET: Symbol = symbol_short!("fee_set");
pub const FEES_WITHDRAWN: Symbol = symbol_short!("fees_out");
pub const PUSH_REGISTRY_SET: Symbol = symbol_short!("push_reg");

pub fn swap_proposed(
    e: &Env,
    id: u64,
    from: &Address,
    to: &Address,
    assets: &Vec<AssetRef>,
    value: i128,
) {
    e.events().publish(
        (SWAP_PROPOSED, id),
        (from.clone(), to.clone(), assets.clone(), value),
    );
}

pub fn swap_initiated(
    e: &Env,
    id: u64,
    from: &Address,
    to: &Address,
    assets: &Vec<AssetRef>,
    value: i128,
) {
    e.events().publish(
        (SWAP_INITIATED, id),
        (from.clone(), to.clone(), assets.clone(), value),
    );
}

pub fn swap_canceled(e: &Env, id: u64, canceled_by: &Address) {
    e.events().publish((SWAP_CANCELED, id), canceled_by.clone());
}

pub fn swap_rejected(e: &Env, id: u64, rejected_by: &Address) {
    e.events().publish((SWAP_REJECTED, id), rejected_by.clone());
}

pub fn swap_executed(e: &Env, id: u64, from: &Address, to: &Address) {
    e.events()
        .publish((SWAP_EXECUTED, id), (from.clone(), to.clone()));
}

pub fn fee_set(e: &Env, fee: i128) {
    e.events().publish((FEE_SET,), fee);
}

pub fn fees_withdrawn(e: &Env, to: &Address, amount: i128) {
    e.events().publish((FEES_WITHDRAWN,), (to.clone(), amount));
}

pub fn push_registry_set(e: &Env, registry: &Address, enabled: bool) {
    e.events()
        .publish((PUSH_REGISTRY_SET,), (registry.clone(), enabled));
}
