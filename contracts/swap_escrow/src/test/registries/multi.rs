use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
enum MultiKey {
    Balance(Address, u32),
    Operator(Address, Address),
}

/// Quantity-balance registry with owner-wide operator approval.
#[contract]
pub struct TestMultiToken;

#[contractimpl]
impl TestMultiToken {
    pub fn mint(e: Env, to: Address, id: u32, amount: i128) {
        let balance = Self::balance(e.clone(), to.clone(), id);
        e.storage()
            .instance()
            .set(&MultiKey::Balance(to, id), &(balance + amount));
    }

    pub fn set_operator(e: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        e.storage()
            .instance()
            .set(&MultiKey::Operator(owner, operator), &approved);
    }

    pub fn balance(e: Env, owner: Address, id: u32) -> i128 {
        e.storage()
            .instance()
            .get(&MultiKey::Balance(owner, id))
            .unwrap_or(0)
    }

    pub fn transfer(e: Env, from: Address, to: Address, id: u32, amount: i128) {
        from.require_auth();
        Self::move_balance(&e, &from, &to, id, amount);
    }

    pub fn transfer_from(
        e: Env,
        spender: Address,
        from: Address,
        to: Address,
        id: u32,
        amount: i128,
    ) {
        spender.require_auth();
        let approved: bool = e
            .storage()
            .instance()
            .get(&MultiKey::Operator(from.clone(), spender))
            .unwrap_or(false);
        if !approved {
            panic!("not operator");
        }
        Self::move_balance(&e, &from, &to, id, amount);
    }

    fn move_balance(e: &Env, from: &Address, to: &Address, id: u32, amount: i128) {
        let from_balance = Self::balance(e.clone(), from.clone(), id);
        if from_balance < amount {
            panic!("insufficient balance");
        }
        let to_balance = Self::balance(e.clone(), to.clone(), id);
        e.storage()
            .instance()
            .set(&MultiKey::Balance(from.clone(), id), &(from_balance - amount));
        e.storage()
            .instance()
            .set(&MultiKey::Balance(to.clone(), id), &(to_balance + amount));
    }
}
