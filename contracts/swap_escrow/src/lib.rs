#![no_std]
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

mod error;
mod events;
mod storage;
mod transfer;
mod types;

pub use error::Error;
pub use types::{AssetAmount, AssetKind, AssetRef, Swap, SwapStatus};

/// Strkey of the all-zero ed25519 account, the closest thing to a null address.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

#[contract]
pub struct SwapEscrow;

#[contractimpl]
impl SwapEscrow {
    /// One-time initializer. `native_token` is the asset contract used for
    /// the value leg and the fee.
    pub fn init(e: Env, admin: Address, native_token: Address, fee: i128) -> Result<(), Error> {
        if storage::is_initialized(&e) {
            return Err(Error::AlreadyInitialized);
        }
        if fee < 0 {
            return Err(Error::InvalidFee);
        }
        storage::write_config(&e, &admin, &native_token, fee);
        storage::bump_instance(&e);
        Ok(())
    }

    /// Opens a swap: pulls the caller's assets and `value` into custody and
    /// books the flat fee. Returns the new swap id.
    pub fn propose(
        e: Env,
        caller: Address,
        participant: Address,
        assets: Vec<Address>,
        amounts: Vec<AssetAmount>,
        value: i128,
    ) -> Result<u64, Error> {
        let fee = storage::fee(&e)?;
        caller.require_auth();

        if participant == caller || participant == e.current_contract_address() {
            return Err(Error::InvalidParticipant);
        }
        transfer::check_lengths(&assets, &amounts)?;
        let escrowed = transfer::split_fee(value, fee)?;
        let staged = transfer::stage(&e, &assets, &amounts)?;

        let id = storage::next_id(&e);
        transfer::pull_value(&e, &caller, value)?;
        transfer::deposit_all(&e, &caller, id, &staged)?;
        storage::credit_fee(&e, fee);

        let swap = Swap {
            id,
            initiator: caller.clone(),
            participant: participant.clone(),
            initiator_assets: staged.clone(),
            participant_assets: Vec::new(&e),
            initiator_value: escrowed,
            participant_value: 0,
            initiated: false,
        };
        storage::save_swap(&e, &swap);
        storage::bump_instance(&e);

        events::swap_proposed(&e, id, &caller, &participant, &staged, escrowed);
        log!(&e, "swap proposed", id, staged.len());
        Ok(id)
    }

    /// Participant side of an opened swap: deposits the counter-bundle.
    pub fn initiate(
        e: Env,
        caller: Address,
        swap_id: u64,
        assets: Vec<Address>,
        amounts: Vec<AssetAmount>,
        value: i128,
    ) -> Result<(), Error> {
        let fee = storage::fee(&e)?;
        caller.require_auth();

        let mut swap = storage::load_swap(&e, swap_id)?;
        if caller != swap.participant {
            return Err(Error::NotParticipant);
        }
        if swap.initiated {
            return Err(Error::AlreadyInitiated);
        }
        transfer::check_lengths(&assets, &amounts)?;
        let escrowed = transfer::split_fee(value, fee)?;
        let staged = transfer::stage(&e, &assets, &amounts)?;

        transfer::pull_value(&e, &caller, value)?;
        transfer::deposit_all(&e, &caller, swap_id, &staged)?;
        storage::credit_fee(&e, fee);

        swap.participant_assets = staged.clone();
        swap.participant_value = escrowed;
        swap.initiated = true;
        storage::save_swap(&e, &swap);
        storage::bump_instance(&e);

        events::swap_initiated(&e, swap_id, &caller, &swap.initiator, &staged, escrowed);
        log!(&e, "swap initiated", swap_id, staged.len());
        Ok(())
    }

    /// Either party unwinds the swap, opened or initiated. Each bundle goes
    /// back to whoever deposited it.
    pub fn cancel(e: Env, caller: Address, swap_id: u64) -> Result<(), Error> {
        storage::admin(&e)?;
        caller.require_auth();

        let swap = storage::load_swap(&e, swap_id)?;
        if !swap.is_party(&caller) {
            return Err(Error::NotParticipant);
        }
        Self::unwind(&e, &swap)?;
        Self::close(&e, &swap);

        events::swap_canceled(&e, swap_id, &caller);
        log!(&e, "swap canceled", swap_id);
        Ok(())
    }

    /// Initiator turns down the participant's counter-bundle. Same unwind
    /// as `cancel`, only allowed once the participant has deposited.
    pub fn reject(e: Env, caller: Address, swap_id: u64) -> Result<(), Error> {
        storage::admin(&e)?;
        caller.require_auth();

        let swap = storage::load_swap(&e, swap_id)?;
        if caller != swap.initiator {
            return Err(Error::NotInitiator);
        }
        if !swap.initiated {
            return Err(Error::NotYetInitiated);
        }
        Self::unwind(&e, &swap)?;
        Self::close(&e, &swap);

        events::swap_rejected(&e, swap_id, &caller);
        log!(&e, "swap rejected", swap_id);
        Ok(())
    }

    /// Initiator confirms: both bundles cross over to the other party.
    pub fn accept(e: Env, caller: Address, swap_id: u64) -> Result<(), Error> {
        storage::admin(&e)?;
        caller.require_auth();

        let swap = storage::load_swap(&e, swap_id)?;
        if caller != swap.initiator {
            return Err(Error::NotInitiator);
        }
        if !swap.initiated {
            return Err(Error::NotYetInitiated);
        }
        transfer::release_all(&e, &swap.participant, &swap.initiator_assets)?;
        transfer::release_all(&e, &swap.initiator, &swap.participant_assets)?;
        transfer::pay_value(&e, &swap.participant, swap.initiator_value)?;
        transfer::pay_value(&e, &swap.initiator, swap.participant_value)?;
        Self::close(&e, &swap);

        events::swap_executed(&e, swap_id, &swap.initiator, &swap.participant);
        log!(&e, "swap executed", swap_id);
        Ok(())
    }

    /// Replaces the flat fee for future `propose`/`initiate` calls.
    pub fn set_fee(e: Env, caller: Address, fee: i128) -> Result<(), Error> {
        Self::require_admin(&e, &caller)?;
        if fee < 0 {
            return Err(Error::InvalidFee);
        }
        storage::set_fee(&e, fee);
        storage::bump_instance(&e);
        events::fee_set(&e, fee);
        Ok(())
    }

    /// Sends the uncollected fees, and nothing else, to `to`. Returns the
    /// amount sent.
    pub fn withdraw_fees(e: Env, caller: Address, to: Address) -> Result<i128, Error> {
        Self::require_admin(&e, &caller)?;
        if to == Address::from_string(&String::from_str(&e, ZERO_ACCOUNT)) {
            return Err(Error::ZeroAddress);
        }
        let amount = storage::take_uncollected(&e);
        transfer::pay_value(&e, &to, amount)?;
        storage::bump_instance(&e);

        events::fees_withdrawn(&e, &to, amount);
        log!(&e, "fees withdrawn", amount);
        Ok(amount)
    }

    /// Flags a registry as push-only (or clears the flag). Only affects
    /// deposits made afterwards.
    pub fn set_push_registry(
        e: Env,
        caller: Address,
        registry: Address,
        enabled: bool,
    ) -> Result<(), Error> {
        Self::require_admin(&e, &caller)?;
        storage::set_push_registry(&e, &registry, enabled);
        storage::bump_instance(&e);
        events::push_registry_set(&e, &registry, enabled);
        Ok(())
    }

    pub fn admin(e: Env) -> Result<Address, Error> {
        storage::admin(&e)
    }

    pub fn native_token(e: Env) -> Result<Address, Error> {
        storage::native_token(&e)
    }

    pub fn fee(e: Env) -> Result<i128, Error> {
        storage::fee(&e)
    }

    /// Fees booked since the last withdrawal; excludes escrowed swap value.
    pub fn uncollected_fees(e: Env) -> i128 {
        storage::uncollected(&e)
    }

    pub fn is_push_registry(e: Env, registry: Address) -> bool {
        storage::is_push_registry(&e, &registry)
    }

    /// Open swap record. Closed or unknown ids fail with `SwapNotFound`.
    pub fn get_swap(e: Env, swap_id: u64) -> Result<Swap, Error> {
        storage::load_swap(&e, swap_id)
    }

    /// Lifecycle state; closed or unknown ids map to `Closed`.
    pub fn swap_status(e: Env, swap_id: u64) -> SwapStatus {
        match storage::load_swap(&e, swap_id) {
            Ok(swap) => swap.status(),
            Err(_) => SwapStatus::Closed,
        }
    }
}

impl SwapEscrow {
    fn require_admin(e: &Env, caller: &Address) -> Result<(), Error> {
        let admin = storage::admin(e)?;
        caller.require_auth();
        if *caller != admin {
            return Err(Error::NotAdministrator);
        }
        Ok(())
    }

    fn unwind(e: &Env, swap: &Swap) -> Result<(), Error> {
        transfer::release_all(e, &swap.initiator, &swap.initiator_assets)?;
        transfer::release_all(e, &swap.participant, &swap.participant_assets)?;
        transfer::pay_value(e, &swap.initiator, swap.initiator_value)?;
        transfer::pay_value(e, &swap.participant, swap.participant_value)?;
        Ok(())
    }

    fn close(e: &Env, swap: &Swap) {
        storage::remove_swap(e, swap.id);
        storage::bump_instance(e);
    }
}
