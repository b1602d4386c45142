use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
enum NftKey {
    Owner(u32),
    Approved(u32),
}

/// Unique-ownership registry with per-token approvals.
#[contract]
pub struct TestNft;

#[contractimpl]
impl TestNft {
    pub fn mint(e: Env, to: Address, token_id: u32) {
        if e.storage().instance().has(&NftKey::Owner(token_id)) {
            panic!("already minted");
        }
        e.storage().instance().set(&NftKey::Owner(token_id), &to);
    }

    pub fn approve(e: Env, owner: Address, spender: Address, token_id: u32) {
        owner.require_auth();
        if Self::owner_of(e.clone(), token_id) != owner {
            panic!("not owner");
        }
        e.storage().instance().set(&NftKey::Approved(token_id), &spender);
    }

    pub fn owner_of(e: Env, token_id: u32) -> Address {
        e.storage()
            .instance()
            .get(&NftKey::Owner(token_id))
            .expect("no-owner")
    }

    pub fn transfer(e: Env, from: Address, to: Address, token_id: u32) {
        from.require_auth();
        Self::move_token(&e, &from, &to, token_id);
    }

    pub fn transfer_from(e: Env, spender: Address, from: Address, to: Address, token_id: u32) {
        spender.require_auth();
        let approved: Option<Address> = e.storage().instance().get(&NftKey::Approved(token_id));
        if approved != Some(spender) {
            panic!("not approved");
        }
        Self::move_token(&e, &from, &to, token_id);
    }

    fn move_token(e: &Env, from: &Address, to: &Address, token_id: u32) {
        if Self::owner_of(e.clone(), token_id) != *from {
            panic!("not owner");
        }
        e.storage().instance().set(&NftKey::Owner(token_id), to);
        e.storage().instance().remove(&NftKey::Approved(token_id));
    }
}
