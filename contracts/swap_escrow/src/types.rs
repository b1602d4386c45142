use soroban_sdk::{contracttype, Address, Vec};

/// Transfer strategy an asset was deposited under.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssetKind {
    /// One id, one owner. Pulled with a pre-approved `transfer_from`.
    Unique,
    /// Counted balance per id. Pulled with a pre-approved `transfer_from`.
    Quantity,
    /// Legacy registry without delegated transfers. The owner pushes the
    /// asset to the escrow first; the escrow only checks it arrived.
    PushOnly,
}

/// The `(id, amount)` half of an asset argument, paired positionally with
/// the registry list passed next to it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetAmount {
    pub id: u32,
    pub amount: i128,
}

/// One escrowed asset. `amount == 0` means unique ownership.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetRef {
    pub registry: Address,
    pub id: u32,
    pub amount: i128,
    pub kind: AssetKind,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Swap {
    pub id: u64,
    pub initiator: Address,
    pub participant: Address,
    pub initiator_assets: Vec<AssetRef>,
    pub participant_assets: Vec<AssetRef>,
    pub initiator_value: i128,
    pub participant_value: i128,
    pub initiated: bool,
}

impl Swap {
    pub fn is_party(&self, who: &Address) -> bool {
        *who == self.initiator || *who == self.participant
    }

    pub fn status(&self) -> SwapStatus {
        if self.initiated {
            SwapStatus::Initiated
        } else {
            SwapStatus::Opened
        }
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwapStatus {
    Opened,
    Initiated,
    /// No record: executed, canceled, rejected or never created.
    Closed,
}
