use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Attached value below the flat fee, or a negative fee.
    InvalidFee = 3,
    /// Registry list and `(id, amount)` list differ in length.
    LengthMismatch = 4,
    NotParticipant = 5,
    NotInitiator = 6,
    AlreadyInitiated = 7,
    NotYetInitiated = 8,
    SwapNotFound = 9,
    /// Push-only asset not held by the escrow, or already bound to an open swap.
    AssetNotDeposited = 10,
    ZeroAddress = 11,
    NotAdministrator = 12,
    /// Counterparty is the caller or the escrow itself.
    InvalidParticipant = 13,
    InvalidAmount = 14,
}
