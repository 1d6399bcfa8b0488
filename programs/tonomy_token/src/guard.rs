//! Ordered guard pipeline evaluated before every balance-changing operation.
//!
//! The pipeline never mutates state itself: it either fails with a specific
//! error or returns the post-mutation effects the handler must apply after
//! the ledger arithmetic succeeds. Time is passed in as a single `now`
//! snapshot so every window comparison within one call is consistent.

use anchor_lang::prelude::*;

use crate::errors::TonomyError;
use crate::token_state::{Blacklist, BuyTracking, TokenState};

/// Side effects owed after a successful guarded transfer.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TransferEffects {
    /// Add the amount to the buyer's cumulative total and stamp the buy time.
    pub record_buy: bool,
    /// Blacklist the buyer (anti-sniping window hit); the buy itself stands.
    pub auto_blacklist: bool,
}

pub fn check_owner(state: &TokenState, caller: Pubkey) -> Result<()> {
    require!(caller == state.owner, TonomyError::UnauthorizedOwner);
    Ok(())
}

/// Blacklist and buy-tracking resets are open to the owner and the
/// anti-sniping manager; everyone else gets the dedicated policy error
/// rather than the plain owner error.
pub fn check_blacklist_authority(state: &TokenState, caller: Pubkey) -> Result<()> {
    require!(
        caller == state.owner
            || (state.anti_sniping_manager != Pubkey::default()
                && caller == state.anti_sniping_manager),
        TonomyError::UnauthorizedAntiSnipingAction
    );
    Ok(())
}

/// Bridge mint/burn path: pause applies, everything else (blacklist, trading
/// gate, cooldown, cap, anti-sniping) is bypassed.
pub fn check_bridge_mutation(state: &TokenState, caller: Pubkey) -> Result<()> {
    require!(!state.paused, TonomyError::ContractPaused);
    require!(
        state.bridge != Pubkey::default() && caller == state.bridge,
        TonomyError::NotBridge
    );
    Ok(())
}

/// Ordinary transfer path. `tracking` is the buy-tracking record for `to`.
pub fn check_transfer(
    state: &TokenState,
    blacklist: &Blacklist,
    tracking: &BuyTracking,
    from: Pubkey,
    to: Pubkey,
    amount: u128,
    now: i64,
) -> Result<TransferEffects> {
    require!(!state.paused, TonomyError::ContractPaused);
    require!(from != Pubkey::default(), TonomyError::TransferFromZeroAddress);
    require!(to != Pubkey::default(), TonomyError::TransferToZeroAddress);

    require!(
        !blacklist.contains(from, state.lp_wallet),
        TonomyError::WalletIsBlacklisted
    );
    require!(
        !blacklist.contains(to, state.lp_wallet),
        TonomyError::WalletIsBlacklisted
    );

    // LP wallet bypasses every remaining gate.
    if from == state.lp_wallet || to == state.lp_wallet {
        return Ok(TransferEffects::default());
    }

    // Plain wallet-to-wallet transfers only face pause and blacklist.
    if !state.is_pool(from) && !state.is_pool(to) {
        return Ok(TransferEffects::default());
    }

    require!(state.trading_enabled, TonomyError::TradingNotEnabled);

    // A buy is pool -> wallet and a sell is wallet -> pool; a pool
    // self-transfer is neither and faces only the trading gate.
    let is_buy = state.is_pool(from) && !state.is_pool(to);
    let is_sell = state.is_pool(to) && !state.is_pool(from);

    if state.launch_period_enabled {
        require!(!is_sell, TonomyError::SellsBlocked);

        if is_buy {
            // Cap first, then cooldown: a buy violating both reports the cap.
            if state.per_wallet_buy_cap > 0 {
                let projected = tracking
                    .cumulative_bought
                    .checked_add(amount)
                    .ok_or_else(|| error!(TonomyError::ArithmeticOverflow))?;
                require!(
                    projected <= state.per_wallet_buy_cap,
                    TonomyError::PerWalletBuyCapExceeded
                );
            }
            if state.cooldown_enabled && tracking.last_buy_timestamp > 0 {
                require!(
                    now.saturating_sub(tracking.last_buy_timestamp) >= state.cooldown_seconds,
                    TonomyError::CooldownActive
                );
            }
        }
    }

    Ok(TransferEffects {
        record_buy: is_buy && state.launch_period_enabled,
        auto_blacklist: is_buy && state.is_anti_sniping_period_active(now),
    })
}

/// canTrade view: true iff trading is open and the wallet is not blacklisted.
pub fn can_trade(state: &TokenState, blacklist: &Blacklist, wallet: Pubkey) -> bool {
    state.trading_enabled && !blacklist.contains(wallet, state.lp_wallet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_state::{INITIAL_SUPPLY, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};

    struct Fixture {
        state: TokenState,
        blacklist: Blacklist,
        owner: Pubkey,
        pool: Pubkey,
        lp: Pubkey,
        user: Pubkey,
        other: Pubkey,
    }

    fn fixture() -> Fixture {
        let owner = Pubkey::new_unique();
        let pool = Pubkey::new_unique();
        let lp = Pubkey::new_unique();
        let state = TokenState {
            owner,
            bridge: Pubkey::default(),
            anti_sniping_manager: owner,
            pool_address: pool,
            lp_wallet: lp,
            is_initialized: true,
            paused: false,
            trading_enabled: true,
            launch_period_enabled: true,
            cooldown_enabled: true,
            cooldown_seconds: 60,
            anti_sniping_seconds: 0,
            liquidity_added_at: 0,
            per_wallet_buy_cap: 0,
            total_supply: INITIAL_SUPPLY,
            token_name: TOKEN_NAME.to_string(),
            token_symbol: TOKEN_SYMBOL.to_string(),
            decimals: TOKEN_DECIMALS,
            bump: 255,
        };
        Fixture {
            state,
            blacklist: Blacklist { entries: vec![], bump: 255 },
            owner,
            pool,
            lp,
            user: Pubkey::new_unique(),
            other: Pubkey::new_unique(),
        }
    }

    fn tracking(wallet: Pubkey, bought: u128, last_buy: i64) -> BuyTracking {
        BuyTracking {
            wallet,
            cumulative_bought: bought,
            last_buy_timestamp: last_buy,
            bump: 255,
        }
    }

    fn check(
        fx: &Fixture,
        tracking: &BuyTracking,
        from: Pubkey,
        to: Pubkey,
        amount: u128,
        now: i64,
    ) -> Result<TransferEffects> {
        check_transfer(&fx.state, &fx.blacklist, tracking, from, to, amount, now)
    }

    #[test]
    fn pause_blocks_every_transfer() {
        let mut fx = fixture();
        fx.state.paused = true;
        let t = tracking(fx.user, 0, 0);
        let res = check(&fx, &t, fx.other, fx.user, 1, 0);
        assert_eq!(res.unwrap_err(), error!(TonomyError::ContractPaused));
    }

    #[test]
    fn pause_blocks_bridge_mutations_before_the_bridge_check() {
        let mut fx = fixture();
        fx.state.bridge = fx.other;
        fx.state.paused = true;
        assert_eq!(
            check_bridge_mutation(&fx.state, fx.other).unwrap_err(),
            error!(TonomyError::ContractPaused)
        );
    }

    #[test]
    fn only_the_current_bridge_may_mint_or_burn() {
        let mut fx = fixture();
        assert_eq!(
            check_bridge_mutation(&fx.state, fx.owner).unwrap_err(),
            error!(TonomyError::NotBridge)
        );
        fx.state.bridge = fx.other;
        assert!(check_bridge_mutation(&fx.state, fx.other).is_ok());
        // Rotating the bridge revokes the previous holder immediately.
        fx.state.bridge = fx.user;
        assert_eq!(
            check_bridge_mutation(&fx.state, fx.other).unwrap_err(),
            error!(TonomyError::NotBridge)
        );
    }

    #[test]
    fn zero_address_parties_are_rejected() {
        let fx = fixture();
        let t = tracking(fx.user, 0, 0);
        assert_eq!(
            check(&fx, &t, Pubkey::default(), fx.user, 1, 0).unwrap_err(),
            error!(TonomyError::TransferFromZeroAddress)
        );
        assert_eq!(
            check(&fx, &t, fx.user, Pubkey::default(), 1, 0).unwrap_err(),
            error!(TonomyError::TransferToZeroAddress)
        );
    }

    #[test]
    fn blacklisted_party_fails_either_direction() {
        let mut fx = fixture();
        fx.blacklist.set(fx.user, true, fx.lp).unwrap();
        let t = tracking(fx.other, 0, 0);
        assert_eq!(
            check(&fx, &t, fx.user, fx.other, 1, 0).unwrap_err(),
            error!(TonomyError::WalletIsBlacklisted)
        );
        let t = tracking(fx.user, 0, 0);
        assert_eq!(
            check(&fx, &t, fx.other, fx.user, 1, 0).unwrap_err(),
            error!(TonomyError::WalletIsBlacklisted)
        );
    }

    #[test]
    fn blacklist_check_runs_before_lp_bypass() {
        let mut fx = fixture();
        fx.blacklist.set(fx.user, true, fx.lp).unwrap();
        let t = tracking(fx.lp, 0, 0);
        assert_eq!(
            check(&fx, &t, fx.user, fx.lp, 1, 0).unwrap_err(),
            error!(TonomyError::WalletIsBlacklisted)
        );
    }

    #[test]
    fn lp_wallet_bypasses_trading_gate_and_launch_rules() {
        let mut fx = fixture();
        fx.state.trading_enabled = false;

        // LP seeding the pool pre-trading succeeds.
        let t = tracking(fx.pool, 0, 0);
        assert_eq!(
            check(&fx, &t, fx.lp, fx.pool, 1, 0).unwrap(),
            TransferEffects::default()
        );
        // And an LP sell during the launch period succeeds.
        fx.state.trading_enabled = true;
        assert_eq!(
            check(&fx, &t, fx.lp, fx.pool, 1, 0).unwrap(),
            TransferEffects::default()
        );
    }

    #[test]
    fn wallet_to_wallet_transfers_skip_pool_gates() {
        let mut fx = fixture();
        fx.state.trading_enabled = false;
        let t = tracking(fx.user, 0, 0);
        assert_eq!(
            check(&fx, &t, fx.other, fx.user, 1, 0).unwrap(),
            TransferEffects::default()
        );
    }

    #[test]
    fn pool_transfers_require_trading_enabled() {
        let mut fx = fixture();
        fx.state.trading_enabled = false;
        let t = tracking(fx.user, 0, 0);
        assert_eq!(
            check(&fx, &t, fx.pool, fx.user, 1, 0).unwrap_err(),
            error!(TonomyError::TradingNotEnabled)
        );
        assert_eq!(
            check(&fx, &t, fx.user, fx.pool, 1, 0).unwrap_err(),
            error!(TonomyError::TradingNotEnabled)
        );
    }

    #[test]
    fn sells_are_blocked_during_the_launch_period() {
        let fx = fixture();
        let t = tracking(fx.pool, 0, 0);
        assert_eq!(
            check(&fx, &t, fx.user, fx.pool, 1, 0).unwrap_err(),
            error!(TonomyError::SellsBlocked)
        );
    }

    #[test]
    fn sells_are_allowed_once_launch_period_ends() {
        let mut fx = fixture();
        fx.state.launch_period_enabled = false;
        let t = tracking(fx.pool, 0, 0);
        assert_eq!(
            check(&fx, &t, fx.user, fx.pool, 1, 0).unwrap(),
            TransferEffects::default()
        );
    }

    #[test]
    fn buy_cap_is_cumulative_and_inclusive() {
        let mut fx = fixture();
        fx.state.per_wallet_buy_cap = 100;
        let t = tracking(fx.user, 60, 0);
        // 60 + 40 == cap: allowed.
        let effects = check(&fx, &t, fx.pool, fx.user, 40, 0).unwrap();
        assert!(effects.record_buy);
        // 60 + 41 > cap: rejected.
        assert_eq!(
            check(&fx, &t, fx.pool, fx.user, 41, 0).unwrap_err(),
            error!(TonomyError::PerWalletBuyCapExceeded)
        );
    }

    #[test]
    fn zero_cap_means_no_cap() {
        let fx = fixture();
        let t = tracking(fx.user, u128::MAX / 2, 0);
        assert!(check(&fx, &t, fx.pool, fx.user, 1_000, 0).is_ok());
    }

    #[test]
    fn cap_violation_is_reported_before_cooldown() {
        let mut fx = fixture();
        fx.state.per_wallet_buy_cap = 100;
        // Within cooldown AND over cap: the cap error wins.
        let t = tracking(fx.user, 100, 990);
        assert_eq!(
            check(&fx, &t, fx.pool, fx.user, 1, 1_000).unwrap_err(),
            error!(TonomyError::PerWalletBuyCapExceeded)
        );
    }

    #[test]
    fn cooldown_blocks_rapid_buys_until_elapsed() {
        let fx = fixture();
        let t = tracking(fx.user, 10, 1_000);
        assert_eq!(
            check(&fx, &t, fx.pool, fx.user, 1, 1_059).unwrap_err(),
            error!(TonomyError::CooldownActive)
        );
        assert!(check(&fx, &t, fx.pool, fx.user, 1, 1_060).is_ok());
    }

    #[test]
    fn first_buy_is_never_on_cooldown() {
        let fx = fixture();
        let t = tracking(fx.user, 0, 0);
        assert!(check(&fx, &t, fx.pool, fx.user, 1, 0).is_ok());
    }

    #[test]
    fn disabled_cooldown_allows_back_to_back_buys() {
        let mut fx = fixture();
        fx.state.cooldown_enabled = false;
        let t = tracking(fx.user, 10, 1_000);
        assert!(check(&fx, &t, fx.pool, fx.user, 1, 1_001).is_ok());
    }

    #[test]
    fn buys_inside_anti_sniping_window_succeed_but_flag_the_buyer() {
        let mut fx = fixture();
        fx.state.liquidity_added_at = 1_000;
        fx.state.anti_sniping_seconds = 300;
        let t = tracking(fx.user, 0, 0);

        let effects = check(&fx, &t, fx.pool, fx.user, 1, 1_300).unwrap();
        assert!(effects.auto_blacklist);

        let effects = check(&fx, &t, fx.pool, fx.user, 1, 1_301).unwrap();
        assert!(!effects.auto_blacklist);
    }

    #[test]
    fn anti_sniping_applies_even_with_launch_period_disabled() {
        let mut fx = fixture();
        fx.state.launch_period_enabled = false;
        fx.state.liquidity_added_at = 1_000;
        fx.state.anti_sniping_seconds = 300;
        let t = tracking(fx.user, 0, 0);

        let effects = check(&fx, &t, fx.pool, fx.user, 1, 1_100).unwrap();
        assert!(effects.auto_blacklist);
        assert!(!effects.record_buy);
    }

    #[test]
    fn pool_self_transfer_is_neither_a_buy_nor_a_sell() {
        let mut fx = fixture();
        fx.state.liquidity_added_at = 1_000;
        fx.state.anti_sniping_seconds = 300;
        let t = tracking(fx.pool, 0, 0);

        // Inside the anti-sniping window and during the launch period the
        // pool moving funds to itself passes untouched: no sell block, no
        // buy tracking, and no auto-blacklist of the pool address.
        let effects = check(&fx, &t, fx.pool, fx.pool, 1, 1_100).unwrap();
        assert_eq!(effects, TransferEffects::default());
    }

    #[test]
    fn buy_tracking_is_only_recorded_during_the_launch_period() {
        let mut fx = fixture();
        let t = tracking(fx.user, 0, 0);
        assert!(check(&fx, &t, fx.pool, fx.user, 1, 0).unwrap().record_buy);

        fx.state.launch_period_enabled = false;
        assert!(!check(&fx, &t, fx.pool, fx.user, 1, 0).unwrap().record_buy);
    }

    #[test]
    fn owner_check_rejects_everyone_else() {
        let fx = fixture();
        assert!(check_owner(&fx.state, fx.owner).is_ok());
        assert_eq!(
            check_owner(&fx.state, fx.user).unwrap_err(),
            error!(TonomyError::UnauthorizedOwner)
        );
    }

    #[test]
    fn blacklist_authority_accepts_owner_and_manager_only() {
        let mut fx = fixture();
        let manager = Pubkey::new_unique();
        fx.state.anti_sniping_manager = manager;
        assert!(check_blacklist_authority(&fx.state, fx.owner).is_ok());
        assert!(check_blacklist_authority(&fx.state, manager).is_ok());
        assert_eq!(
            check_blacklist_authority(&fx.state, fx.user).unwrap_err(),
            error!(TonomyError::UnauthorizedAntiSnipingAction)
        );
    }

    #[test]
    fn can_trade_requires_open_trading_and_clean_wallet() {
        let mut fx = fixture();
        assert!(can_trade(&fx.state, &fx.blacklist, fx.user));
        fx.blacklist.set(fx.user, true, fx.lp).unwrap();
        assert!(!can_trade(&fx.state, &fx.blacklist, fx.user));
        fx.state.trading_enabled = false;
        assert!(!can_trade(&fx.state, &fx.blacklist, fx.other));
    }
}
