use soroban_sdk::{contract, contractimpl, Address, Env};

/// Legacy registry: no approvals, no `transfer_from`.
#[contract]
pub struct TestLegacyRegistry;

#[contractimpl]
impl TestLegacyRegistry {
    pub fn mint(e: Env, to: Address, token_id: u32) {
        e.storage().instance().set(&token_id, &to);
    }

    pub fn owner_of(e: Env, token_id: u32) -> Address {
        e.storage().instance().get(&token_id).expect("no-owner")
    }

    pub fn transfer(e: Env, from: Address, to: Address, token_id: u32) {
        from.require_auth();
        if Self::owner_of(e.clone(), token_id) != from {
            panic!("not owner");
        }
        e.storage().instance().set(&token_id, &to);
    }
}
