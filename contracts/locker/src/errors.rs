use soroban_sdk::contracterror;

/// Caller-visible failures. Returning any of these aborts the invocation and
/// the host discards every write and token movement it made.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LockerError {
    /// Caller is not allow-listed for the token.
    NotAuthorized = 1,
    /// Caller is not the owner of the funds.
    NotOwner = 2,
    /// Retrieval would push the window total past the daily limit.
    DailyLimitExceeded = 3,
    /// Requested amount exceeds the balance held for the world.
    InsufficientFunds = 4,
    /// The token contract rejected a pull or push.
    TransferFailed = 5,
    /// Amount or limit out of range.
    InvalidAmount = 6,
    /// Balance or window counter would exceed `i128`.
    Overflow = 7,
}
