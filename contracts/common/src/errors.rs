use soroban_sdk::contracterror;

/// Error codes shared by the Geyser implementations and the proxy.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 1 – 9   | Lifecycle / authorisation      |
/// | 10 – 29 | Validation and accounting      |
/// | 30 – 39 | Token ledger                   |
/// | 40 – 49 | Proxy and implementation dispatch |
///
/// Discriminants are part of the public interface; never renumber.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GeyserError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,

    InvalidAmount = 10,
    ZeroAmount = 11,
    InvalidDuration = 12,
    InsufficientStake = 13,
    InvalidConfig = 14,
    ScheduleLimitReached = 15,
    ScheduleNotFound = 16,
    ArithmeticOverflow = 17,
    StakerLimitReached = 18,
    DepositLimitReached = 19,
    BelowMinimumStake = 20,

    TransferFailed = 30,

    UnsupportedOperation = 40,
    UnknownImplementation = 41,
    IncompatibleImplementation = 42,
    ProxyAdminForbidden = 43,
}

impl GeyserError {
    /// Returns the human-readable reason attached to this error.
    pub fn message(&self) -> &'static str {
        match self {
            GeyserError::NotInitialized => "Geyser: contract has not been initialized",
            GeyserError::AlreadyInitialized => "Geyser: contract is already initialized",
            GeyserError::Unauthorized => "Geyser: caller lacks the required role",
            GeyserError::InvalidAmount => "Geyser: amount must be positive",
            GeyserError::ZeroAmount => "Geyser: amount is zero",
            GeyserError::InvalidDuration => "Geyser: unlock duration must be positive",
            GeyserError::InsufficientStake => "Geyser: unstake amount exceeds staked balance",
            GeyserError::InvalidConfig => "Geyser: start bonus must be between 0 and 100",
            GeyserError::ScheduleLimitReached => "Geyser: too many unlock schedules",
            GeyserError::ScheduleNotFound => "Geyser: unlock schedule does not exist",
            GeyserError::ArithmeticOverflow => "Geyser: arithmetic overflow",
            GeyserError::StakerLimitReached => "Geyser: too many active stakers",
            GeyserError::DepositLimitReached => "Geyser: too many open deposits for this account",
            GeyserError::BelowMinimumStake => "Geyser: stake is below the configured minimum",
            GeyserError::TransferFailed => "Geyser: token transfer failed",
            GeyserError::UnsupportedOperation => {
                "Geyser: operation not supported by this implementation"
            }
            GeyserError::UnknownImplementation => "Proxy: implementation version is unknown",
            GeyserError::IncompatibleImplementation => {
                "Proxy: implementation predates the stored layout"
            }
            GeyserError::ProxyAdminForbidden => {
                "Proxy: admin cannot fallback to proxy target"
            }
        }
    }

    /// Returns true for failures caused by the caller's role rather than input.
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            GeyserError::Unauthorized | GeyserError::ProxyAdminForbidden
        )
    }
}
