use anchor_lang::prelude::*;

pub const TOKEN_NAME: &str = "Tonomy Token";
pub const TOKEN_SYMBOL: &str = "TONO";
pub const TOKEN_DECIMALS: u8 = 18;

/// 100,000,000 tokens with 18 decimals, minted to the owner at initialization
pub const INITIAL_SUPPLY: u128 = 100_000_000 * 10u128.pow(18);

pub const TOKEN_STATE_SEED: &[u8] = b"token_state";
pub const BLACKLIST_SEED: &[u8] = b"blacklist";
pub const BALANCE_SEED: &[u8] = b"balance";
pub const ALLOWANCE_SEED: &[u8] = b"allowance";
pub const BUY_TRACKING_SEED: &[u8] = b"buy_tracking";

#[account]
pub struct TokenState {
    pub owner: Pubkey,                    // 32 bytes
    pub bridge: Pubkey,                   // 32 bytes - Sole mint/burn authority (default = unset)
    pub anti_sniping_manager: Pubkey,     // 32 bytes - May manage the blacklist alongside the owner
    pub pool_address: Pubkey,             // 32 bytes - Trading venue (default = no pool)
    pub lp_wallet: Pubkey,                // 32 bytes - Exempt from trading gates and blacklisting
    pub is_initialized: bool,             // 1 byte
    pub paused: bool,                     // 1 byte
    pub trading_enabled: bool,            // 1 byte
    pub launch_period_enabled: bool,      // 1 byte
    pub cooldown_enabled: bool,           // 1 byte
    pub cooldown_seconds: i64,            // 8 bytes - Minimum gap between buys by the same wallet
    pub anti_sniping_seconds: i64,        // 8 bytes - Auto-blacklist window after liquidity is added
    pub liquidity_added_at: i64,          // 8 bytes - 0 until set_liquidity_added is called
    pub per_wallet_buy_cap: u128,         // 16 bytes - 0 means no cap
    pub total_supply: u128,               // 16 bytes
    pub token_name: String,               // 4 + up to 32 bytes
    pub token_symbol: String,             // 4 + up to 16 bytes
    pub decimals: u8,                     // 1 byte
    pub bump: u8,                         // 1 byte
}

impl TokenState {
    pub const SIZE: usize = 8 +           // discriminator
        32 +                              // owner
        32 +                              // bridge
        32 +                              // anti_sniping_manager
        32 +                              // pool_address
        32 +                              // lp_wallet
        1 +                               // is_initialized
        1 +                               // paused
        1 +                               // trading_enabled
        1 +                               // launch_period_enabled
        1 +                               // cooldown_enabled
        8 +                               // cooldown_seconds
        8 +                               // anti_sniping_seconds
        8 +                               // liquidity_added_at
        16 +                              // per_wallet_buy_cap
        16 +                              // total_supply
        4 + 32 +                          // token_name (String with max 32 chars)
        4 + 16 +                          // token_symbol (String with max 16 chars)
        1 +                               // decimals
        1;                                // bump

    pub fn is_pool_address_set(&self) -> bool {
        self.pool_address != Pubkey::default()
    }

    pub fn is_pool(&self, wallet: Pubkey) -> bool {
        self.is_pool_address_set() && wallet == self.pool_address
    }

    pub fn is_launch_period_active(&self) -> bool {
        self.launch_period_enabled
    }

    /// The window runs from liquidity_added_at through liquidity_added_at +
    /// anti_sniping_seconds inclusive; it never starts until liquidity is marked added.
    pub fn is_anti_sniping_period_active(&self, now: i64) -> bool {
        self.liquidity_added_at > 0
            && now <= self.liquidity_added_at.saturating_add(self.anti_sniping_seconds)
    }

    pub fn remaining_anti_sniping_seconds(&self, now: i64) -> i64 {
        if !self.is_anti_sniping_period_active(now) {
            return 0;
        }
        self.liquidity_added_at
            .saturating_add(self.anti_sniping_seconds)
            .saturating_sub(now)
    }
}

/// Per-wallet balance record, created lazily the first time a wallet receives tokens.
#[account]
pub struct WalletBalance {
    pub wallet: Pubkey,                   // 32 bytes
    pub amount: u128,                     // 16 bytes
    pub bump: u8,                         // 1 byte
}

impl WalletBalance {
    pub const SIZE: usize = 8 +           // discriminator
        32 +                              // wallet
        16 +                              // amount
        1;                                // bump
}

/// Spending allowance granted by `owner` to `spender`. u128::MAX is the
/// unlimited sentinel and is never decremented on spends.
#[account]
pub struct Allowance {
    pub owner: Pubkey,                    // 32 bytes
    pub spender: Pubkey,                  // 32 bytes
    pub amount: u128,                     // 16 bytes
    pub bump: u8,                         // 1 byte
}

impl Allowance {
    pub const SIZE: usize = 8 +           // discriminator
        32 +                              // owner
        32 +                              // spender
        16 +                              // amount
        1;                                // bump
}

/// Launch-period buy tracking for a single wallet.
#[account]
pub struct BuyTracking {
    pub wallet: Pubkey,                   // 32 bytes
    pub cumulative_bought: u128,          // 16 bytes - Reset by resetWalletBuyAmount
    pub last_buy_timestamp: i64,          // 8 bytes - 0 means no buy yet
    pub bump: u8,                         // 1 byte
}

impl BuyTracking {
    pub const SIZE: usize = 8 +           // discriminator
        32 +                              // wallet
        16 +                              // cumulative_bought
        8 +                               // last_buy_timestamp
        1;                                // bump
}

/// Restricted wallets. The LP wallet is filtered out of every membership
/// check and every write, so it can never be an effective member.
#[account]
pub struct Blacklist {
    pub entries: Vec<Pubkey>,
    pub bump: u8,
}

impl Blacklist {
    pub const CAPACITY: usize = 128;

    pub const SIZE: usize = 8 +           // discriminator
        4 + 32 * Self::CAPACITY +         // entries (Vec<Pubkey> with fixed capacity)
        1;                                // bump

    pub fn contains(&self, wallet: Pubkey, lp_wallet: Pubkey) -> bool {
        wallet != lp_wallet && self.entries.contains(&wallet)
    }

    /// Applies one blacklist write. Returns true if the set actually changed;
    /// writes against the LP wallet are no-ops.
    pub fn set(&mut self, wallet: Pubkey, value: bool, lp_wallet: Pubkey) -> Result<bool> {
        use crate::errors::TonomyError;

        if wallet == lp_wallet {
            return Ok(false);
        }
        let position = self.entries.iter().position(|entry| *entry == wallet);
        match (value, position) {
            (true, None) => {
                require!(
                    self.entries.len() < Self::CAPACITY,
                    TonomyError::BlacklistCapacityExceeded
                );
                self.entries.push(wallet);
                Ok(true)
            }
            (false, Some(index)) => {
                self.entries.remove(index);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
