//! Custody moves for the three registry kinds plus the native value leg.
//!
//! Deposits are staged first: every argument is checked and every push-only
//! asset is verified before the first pull happens. A failure after that
//! point (a registry refusing a pull) still aborts the whole invocation and
//! the host rolls back whatever was already moved.

use soroban_sdk::{contractclient, token, Address, Env, Vec};

use crate::error::Error;
use crate::storage;
use crate::types::{AssetAmount, AssetKind, AssetRef};

/// Registry where each id has exactly one owner.
#[contractclient(name = "UniqueRegistryClient")]
pub trait UniqueRegistry {
    fn owner_of(env: Env, token_id: u32) -> Address;
    fn transfer(env: Env, from: Address, to: Address, token_id: u32);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u32);
}

/// Registry holding a counted balance of each id per owner.
#[contractclient(name = "QuantityRegistryClient")]
pub trait QuantityRegistry {
    fn balance(env: Env, owner: Address, id: u32) -> i128;
    fn transfer(env: Env, from: Address, to: Address, id: u32, amount: i128);
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        id: u32,
        amount: i128,
    );
}

/// Legacy registry: only the current owner can move an asset.
#[contractclient(name = "PushRegistryClient")]
pub trait PushRegistry {
    fn owner_of(env: Env, token_id: u32) -> Address;
    fn transfer(env: Env, from: Address, to: Address, token_id: u32);
}

pub fn check_lengths(assets: &Vec<Address>, amounts: &Vec<AssetAmount>) -> Result<(), Error> {
    if assets.len() != amounts.len() {
        return Err(Error::LengthMismatch);
    }
    Ok(())
}

/// Escrowed part of the attached value once the flat fee is taken out.
pub fn split_fee(value: i128, fee: i128) -> Result<i128, Error> {
    if value < 0 {
        return Err(Error::InvalidAmount);
    }
    if value < fee {
        return Err(Error::InvalidFee);
    }
    Ok(value - fee)
}

/// Picks the transfer strategy for one asset. Registry capability wins
/// over the amount convention.
pub fn resolve(e: &Env, registry: Address, entry: &AssetAmount) -> Result<AssetRef, Error> {
    if entry.amount < 0 {
        return Err(Error::InvalidAmount);
    }
    let kind = if storage::is_push_registry(e, &registry) {
        AssetKind::PushOnly
    } else if entry.amount == 0 {
        AssetKind::Unique
    } else {
        AssetKind::Quantity
    };
    Ok(AssetRef {
        registry,
        id: entry.id,
        amount: entry.amount,
        kind,
    })
}

/// Validates a deposit bundle without moving anything.
pub fn stage(
    e: &Env,
    assets: &Vec<Address>,
    amounts: &Vec<AssetAmount>,
) -> Result<Vec<AssetRef>, Error> {
    check_lengths(assets, amounts)?;

    let mut staged: Vec<AssetRef> = Vec::new(e);
    for (registry, entry) in assets.iter().zip(amounts.iter()) {
        let asset = resolve(e, registry, &entry)?;
        if asset.kind == AssetKind::PushOnly {
            verify_pushed_ownership(e, &asset)?;
            let repeated = staged.iter().any(|prev| {
                prev.kind == AssetKind::PushOnly
                    && prev.registry == asset.registry
                    && prev.id == asset.id
            });
            if repeated {
                return Err(Error::AssetNotDeposited);
            }
        }
        staged.push_back(asset);
    }
    Ok(staged)
}

/// Pulls every staged asset from `owner` and binds single-owner assets to
/// `swap_id`, so a later push-only check cannot claim them.
pub fn deposit_all(
    e: &Env,
    owner: &Address,
    swap_id: u64,
    assets: &Vec<AssetRef>,
) -> Result<(), Error> {
    for asset in assets.iter() {
        deposit_from(e, owner, &asset)?;
        if asset.kind != AssetKind::Quantity {
            storage::bind_held(e, &asset.registry, asset.id, swap_id);
        }
    }
    Ok(())
}

pub fn deposit_from(e: &Env, owner: &Address, asset: &AssetRef) -> Result<(), Error> {
    let custodian = e.current_contract_address();
    match asset.kind {
        AssetKind::Unique => {
            let registry = UniqueRegistryClient::new(e, &asset.registry);
            registry.transfer_from(&custodian, owner, &custodian, &asset.id);
            if registry.owner_of(&asset.id) != custodian {
                return Err(Error::AssetNotDeposited);
            }
        }
        AssetKind::Quantity => {
            let registry = QuantityRegistryClient::new(e, &asset.registry);
            let before = registry.balance(&custodian, &asset.id);
            registry.transfer_from(&custodian, owner, &custodian, &asset.id, &asset.amount);
            if registry.balance(&custodian, &asset.id) != before + asset.amount {
                return Err(Error::AssetNotDeposited);
            }
        }
        // Already pushed and verified while staging.
        AssetKind::PushOnly => {}
    }
    Ok(())
}

/// Read-after-push check: the escrow must be the registry-reported owner
/// and the asset must not already back another open swap.
pub fn verify_pushed_ownership(e: &Env, asset: &AssetRef) -> Result<(), Error> {
    let registry = PushRegistryClient::new(e, &asset.registry);
    if registry.owner_of(&asset.id) != e.current_contract_address() {
        return Err(Error::AssetNotDeposited);
    }
    if storage::holding_swap(e, &asset.registry, asset.id).is_some() {
        return Err(Error::AssetNotDeposited);
    }
    Ok(())
}

pub fn release(e: &Env, to: &Address, asset: &AssetRef) -> Result<(), Error> {
    let custodian = e.current_contract_address();
    match asset.kind {
        AssetKind::Unique => {
            let registry = UniqueRegistryClient::new(e, &asset.registry);
            registry.transfer(&custodian, to, &asset.id);
            if registry.owner_of(&asset.id) != *to {
                return Err(Error::AssetNotDeposited);
            }
            storage::unbind_held(e, &asset.registry, asset.id);
        }
        AssetKind::Quantity => {
            let registry = QuantityRegistryClient::new(e, &asset.registry);
            let before = registry.balance(&custodian, &asset.id);
            registry.transfer(&custodian, to, &asset.id, &asset.amount);
            if registry.balance(&custodian, &asset.id) != before - asset.amount {
                return Err(Error::AssetNotDeposited);
            }
        }
        AssetKind::PushOnly => {
            let registry = PushRegistryClient::new(e, &asset.registry);
            registry.transfer(&custodian, to, &asset.id);
            if registry.owner_of(&asset.id) != *to {
                return Err(Error::AssetNotDeposited);
            }
            storage::unbind_held(e, &asset.registry, asset.id);
        }
    }
    Ok(())
}

pub fn release_all(e: &Env, to: &Address, assets: &Vec<AssetRef>) -> Result<(), Error> {
    for asset in assets.iter() {
        release(e, to, &asset)?;
    }
    Ok(())
}

// --- native value leg ---

pub fn pull_value(e: &Env, from: &Address, value: i128) -> Result<(), Error> {
    if value > 0 {
        let native = storage::native_token(e)?;
        token::Client::new(e, &native).transfer(from, &e.current_contract_address(), &value);
    }
    Ok(())
}

pub fn pay_value(e: &Env, to: &Address, value: i128) -> Result<(), Error> {
    if value > 0 {
        let native = storage::native_token(e)?;
        token::Client::new(e, &native).transfer(&e.current_contract_address(), to, &value);
    }
    Ok(())
}
