use anchor_lang::prelude::*;

#[error_code]
pub enum TonomyError {
    #[msg("Unauthorized owner access")]
    UnauthorizedOwner,

    #[msg("Caller is not the bridge")]
    NotBridge,

    #[msg("Caller is neither the owner nor the anti-sniping manager")]
    UnauthorizedAntiSnipingAction,

    #[msg("Address cannot be the zero address")]
    AddressCannotBeZero,

    #[msg("Contract not initialized")]
    ContractNotInitialized,

    #[msg("Contract is paused - balance-changing operations are disabled")]
    ContractPaused,

    #[msg("Trading is not enabled")]
    TradingNotEnabled,

    #[msg("Sells are blocked during the launch period")]
    SellsBlocked,

    #[msg("Per-wallet buy cap exceeded")]
    PerWalletBuyCapExceeded,

    #[msg("Buy cooldown is still active")]
    CooldownActive,

    #[msg("Wallet is blacklisted")]
    WalletIsBlacklisted,

    #[msg("Blacklist capacity exceeded")]
    BlacklistCapacityExceeded,

    #[msg("Liquidity-added timestamp has already been recorded")]
    LiquidityAlreadySet,

    #[msg("Cannot transfer to the zero address")]
    TransferToZeroAddress,

    #[msg("Cannot transfer from the zero address")]
    TransferFromZeroAddress,

    #[msg("Cannot approve the zero address as spender")]
    ApproveToZeroAddress,

    #[msg("Cannot mint to the zero address")]
    MintToZeroAddress,

    #[msg("Cannot burn from the zero address")]
    BurnFromZeroAddress,

    #[msg("Insufficient balance for transfer")]
    InsufficientBalance,

    #[msg("Insufficient allowance for transfer")]
    InsufficientAllowance,

    #[msg("Burn amount exceeds account balance")]
    BurnExceedsBalance,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Duration must be between 0 seconds and 1 year")]
    InvalidDuration,

    #[msg("Account is not a canonical buy-tracking account")]
    InvalidBuyTrackingAccount,
}
