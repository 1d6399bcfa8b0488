#![allow(unexpected_cfgs)]
#![allow(deprecated)]

use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::clock::Clock;

pub mod errors;
use errors::TonomyError;
pub mod token_state;
use token_state::{
    Allowance, Blacklist, BuyTracking, TokenState, WalletBalance, ALLOWANCE_SEED, BALANCE_SEED,
    BLACKLIST_SEED, BUY_TRACKING_SEED, INITIAL_SUPPLY, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_STATE_SEED,
    TOKEN_SYMBOL,
};
pub mod guard;
pub mod ledger;

declare_id!("11111111111111111111111111111111");

/// Upper bound for cooldown and anti-sniping durations (1 year)
const MAX_DURATION_SECONDS: i64 = 31_536_000;

#[program]
pub mod tonomy_token {
    use super::*;

    /// Initialize the token: global config, blacklist, and the full initial
    /// supply credited to the owner. Trading starts disabled and the launch
    /// period starts enabled.
    pub fn initialize(
        ctx: Context<Initialize>,
        cooldown_seconds: i64,
        anti_sniping_seconds: i64,
    ) -> Result<()> {
        require!(
            (0..=MAX_DURATION_SECONDS).contains(&cooldown_seconds),
            TonomyError::InvalidDuration
        );
        require!(
            (0..=MAX_DURATION_SECONDS).contains(&anti_sniping_seconds),
            TonomyError::InvalidDuration
        );

        let owner = ctx.accounts.owner.key();
        let token_state = &mut ctx.accounts.token_state;
        token_state.owner = owner;
        token_state.bridge = Pubkey::default(); // Unset until set_bridge
        token_state.anti_sniping_manager = owner;
        token_state.pool_address = Pubkey::default(); // Unset = no pool
        token_state.lp_wallet = owner;
        token_state.is_initialized = true;
        token_state.paused = false;
        token_state.trading_enabled = false;
        token_state.launch_period_enabled = true;
        token_state.cooldown_enabled = true;
        token_state.cooldown_seconds = cooldown_seconds;
        token_state.anti_sniping_seconds = anti_sniping_seconds;
        token_state.liquidity_added_at = 0;
        token_state.per_wallet_buy_cap = 0;
        token_state.total_supply = INITIAL_SUPPLY;
        token_state.token_name = TOKEN_NAME.to_string();
        token_state.token_symbol = TOKEN_SYMBOL.to_string();
        token_state.decimals = TOKEN_DECIMALS;
        token_state.bump = ctx.bumps.token_state;

        let blacklist = &mut ctx.accounts.blacklist;
        blacklist.entries = Vec::new();
        blacklist.bump = ctx.bumps.blacklist;

        let owner_balance = &mut ctx.accounts.owner_balance;
        owner_balance.wallet = owner;
        owner_balance.amount = INITIAL_SUPPLY;
        owner_balance.bump = ctx.bumps.owner_balance;

        emit!(TransferEvent {
            from: Pubkey::default(),
            to: owner,
            amount: INITIAL_SUPPLY,
        });

        msg!(
            "Contract initialized - Owner: {}, Supply: {}, Cooldown: {}s, Anti-sniping window: {}s",
            owner,
            INITIAL_SUPPLY,
            cooldown_seconds,
            anti_sniping_seconds
        );
        Ok(())
    }

    /// Transfer tokens from the caller to another wallet, subject to the full
    /// guard pipeline (pause, blacklist, LP bypass, trading gate, launch rules).
    pub fn transfer(ctx: Context<TransferTokens>, amount: u128) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let from = ctx.accounts.from.key();
        let to = ctx.accounts.to.key();

        require!(
            ctx.accounts.token_state.is_initialized,
            TonomyError::ContractNotInitialized
        );

        bind_balance(&mut ctx.accounts.from_balance, from, ctx.bumps.from_balance);
        bind_balance(&mut ctx.accounts.to_balance, to, ctx.bumps.to_balance);
        bind_tracking(&mut ctx.accounts.buy_tracking, to, ctx.bumps.buy_tracking);

        let effects = guard::check_transfer(
            &ctx.accounts.token_state,
            &ctx.accounts.blacklist,
            &ctx.accounts.buy_tracking,
            from,
            to,
            amount,
            now,
        )?;

        apply_transfer(
            &mut ctx.accounts.from_balance,
            &mut ctx.accounts.to_balance,
            amount,
        )?;
        apply_effects(
            &effects,
            &ctx.accounts.token_state,
            &mut ctx.accounts.blacklist,
            &mut ctx.accounts.buy_tracking,
            to,
            amount,
            now,
        )?;

        emit!(TransferEvent { from, to, amount });
        msg!("TRANSFER: From: {}, To: {}, Amount: {}", from, to, amount);
        Ok(())
    }

    /// Set the allowance `spender` may transfer on the caller's behalf.
    /// Overwrites any previous allowance; u128::MAX grants unlimited spending.
    pub fn approve(ctx: Context<ApproveAllowance>, amount: u128) -> Result<()> {
        require!(
            ctx.accounts.token_state.is_initialized,
            TonomyError::ContractNotInitialized
        );

        let owner = ctx.accounts.owner.key();
        let spender = ctx.accounts.spender.key();
        require!(spender != Pubkey::default(), TonomyError::ApproveToZeroAddress);

        let allowance = &mut ctx.accounts.allowance;
        if allowance.owner == Pubkey::default() {
            allowance.owner = owner;
            allowance.spender = spender;
            allowance.bump = ctx.bumps.allowance;
        }
        allowance.amount = amount;

        emit!(ApprovalEvent { owner, spender, amount });
        msg!("APPROVAL: Owner: {}, Spender: {}, Amount: {}", owner, spender, amount);
        Ok(())
    }

    /// Transfer tokens on behalf of `from` using a previously granted
    /// allowance. The unlimited sentinel allowance is never decremented.
    pub fn transfer_from(ctx: Context<TransferFromTokens>, amount: u128) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let from = ctx.accounts.from.key();
        let to = ctx.accounts.to.key();
        let spender = ctx.accounts.spender.key();

        require!(
            ctx.accounts.token_state.is_initialized,
            TonomyError::ContractNotInitialized
        );

        bind_balance(&mut ctx.accounts.from_balance, from, ctx.bumps.from_balance);
        bind_balance(&mut ctx.accounts.to_balance, to, ctx.bumps.to_balance);
        bind_tracking(&mut ctx.accounts.buy_tracking, to, ctx.bumps.buy_tracking);

        let effects = guard::check_transfer(
            &ctx.accounts.token_state,
            &ctx.accounts.blacklist,
            &ctx.accounts.buy_tracking,
            from,
            to,
            amount,
            now,
        )?;

        let allowance = &mut ctx.accounts.allowance;
        let remaining = ledger::spend_allowance(allowance.amount, amount)?;
        if remaining != allowance.amount {
            allowance.amount = remaining;
            emit!(ApprovalEvent {
                owner: from,
                spender,
                amount: remaining,
            });
        }

        apply_transfer(
            &mut ctx.accounts.from_balance,
            &mut ctx.accounts.to_balance,
            amount,
        )?;
        apply_effects(
            &effects,
            &ctx.accounts.token_state,
            &mut ctx.accounts.blacklist,
            &mut ctx.accounts.buy_tracking,
            to,
            amount,
            now,
        )?;

        emit!(TransferEvent { from, to, amount });
        msg!(
            "TRANSFER FROM: Spender: {}, From: {}, To: {}, Amount: {}",
            spender,
            from,
            to,
            amount
        );
        Ok(())
    }

    /// Mint tokens to a wallet (bridge only). Bypasses every guard except the
    /// pause switch.
    pub fn bridge_mint(ctx: Context<BridgeMint>, amount: u128) -> Result<()> {
        require!(
            ctx.accounts.token_state.is_initialized,
            TonomyError::ContractNotInitialized
        );
        guard::check_bridge_mutation(&ctx.accounts.token_state, ctx.accounts.bridge.key())?;

        let to = ctx.accounts.to.key();
        require!(to != Pubkey::default(), TonomyError::MintToZeroAddress);

        bind_balance(&mut ctx.accounts.to_balance, to, ctx.bumps.to_balance);

        let token_state = &mut ctx.accounts.token_state;
        token_state.total_supply = token_state
            .total_supply
            .checked_add(amount)
            .ok_or_else(|| error!(TonomyError::ArithmeticOverflow))?;
        let to_balance = &mut ctx.accounts.to_balance;
        to_balance.amount = ledger::credit(to_balance.amount, amount)?;

        emit!(TransferEvent {
            from: Pubkey::default(),
            to,
            amount,
        });
        msg!(
            "BRIDGE MINT: Bridge: {}, To: {}, Amount: {}, Total supply: {}",
            ctx.accounts.bridge.key(),
            to,
            amount,
            ctx.accounts.token_state.total_supply
        );
        Ok(())
    }

    /// Burn tokens from a wallet (bridge only). Bypasses every guard except
    /// the pause switch.
    pub fn bridge_burn(ctx: Context<BridgeBurn>, amount: u128) -> Result<()> {
        require!(
            ctx.accounts.token_state.is_initialized,
            TonomyError::ContractNotInitialized
        );
        guard::check_bridge_mutation(&ctx.accounts.token_state, ctx.accounts.bridge.key())?;

        let from = ctx.accounts.from.key();
        require!(from != Pubkey::default(), TonomyError::BurnFromZeroAddress);

        let from_balance = &mut ctx.accounts.from_balance;
        from_balance.amount = ledger::debit_for_burn(from_balance.amount, amount)?;

        let token_state = &mut ctx.accounts.token_state;
        token_state.total_supply = token_state
            .total_supply
            .checked_sub(amount)
            .ok_or_else(|| error!(TonomyError::ArithmeticOverflow))?;

        emit!(TransferEvent {
            from,
            to: Pubkey::default(),
            amount,
        });
        msg!(
            "BRIDGE BURN: Bridge: {}, From: {}, Amount: {}, Total supply: {}",
            ctx.accounts.bridge.key(),
            from,
            amount,
            ctx.accounts.token_state.total_supply
        );
        Ok(())
    }

    /// Set the bridge address (owner only). The previous bridge loses mint
    /// and burn authority the instant this returns.
    pub fn set_bridge(ctx: Context<AdminConfig>, new_bridge: Pubkey) -> Result<()> {
        require!(new_bridge != Pubkey::default(), TonomyError::AddressCannotBeZero);
        let token_state = &mut ctx.accounts.token_state;
        let previous = token_state.bridge;
        token_state.bridge = new_bridge;
        msg!("BRIDGE CHANGED: {} -> {}", previous, new_bridge);
        Ok(())
    }

    /// Set the anti-sniping manager (owner only).
    pub fn set_anti_sniping_manager(
        ctx: Context<AdminConfig>,
        new_manager: Pubkey,
    ) -> Result<()> {
        require!(new_manager != Pubkey::default(), TonomyError::AddressCannotBeZero);
        let token_state = &mut ctx.accounts.token_state;
        let previous = token_state.anti_sniping_manager;
        token_state.anti_sniping_manager = new_manager;
        emit!(AntiSnipingManagerChangedEvent {
            previous_manager: previous,
            new_manager,
        });
        msg!("ANTI-SNIPING MANAGER CHANGED: {} -> {}", previous, new_manager);
        Ok(())
    }

    /// Set the pool address whose involvement triggers trading-gate checks
    /// (owner only).
    pub fn set_pool_address(ctx: Context<AdminConfig>, pool_address: Pubkey) -> Result<()> {
        require!(pool_address != Pubkey::default(), TonomyError::AddressCannotBeZero);
        ctx.accounts.token_state.pool_address = pool_address;
        msg!("POOL ADDRESS SET: {}", pool_address);
        Ok(())
    }

    /// Set the LP wallet, which is exempt from trading gates, caps, cooldowns,
    /// and blacklisting (owner only).
    pub fn set_lp_wallet(ctx: Context<AdminConfig>, lp_wallet: Pubkey) -> Result<()> {
        require!(lp_wallet != Pubkey::default(), TonomyError::AddressCannotBeZero);
        ctx.accounts.token_state.lp_wallet = lp_wallet;
        msg!("LP WALLET SET: {}", lp_wallet);
        Ok(())
    }

    pub fn set_trading_enabled(ctx: Context<AdminConfig>, enabled: bool) -> Result<()> {
        ctx.accounts.token_state.trading_enabled = enabled;
        msg!("TRADING ENABLED: {}", enabled);
        Ok(())
    }

    pub fn set_launch_period_enabled(ctx: Context<AdminConfig>, enabled: bool) -> Result<()> {
        ctx.accounts.token_state.launch_period_enabled = enabled;
        msg!("LAUNCH PERIOD ENABLED: {}", enabled);
        Ok(())
    }

    pub fn set_cooldown_enabled(
        ctx: Context<AdminConfig>,
        enabled: bool,
        cooldown_seconds: i64,
    ) -> Result<()> {
        require!(
            (0..=MAX_DURATION_SECONDS).contains(&cooldown_seconds),
            TonomyError::InvalidDuration
        );
        let token_state = &mut ctx.accounts.token_state;
        token_state.cooldown_enabled = enabled;
        token_state.cooldown_seconds = cooldown_seconds;
        msg!("COOLDOWN: Enabled: {}, Seconds: {}", enabled, cooldown_seconds);
        Ok(())
    }

    /// Set the per-wallet cumulative buy cap for the launch period
    /// (owner only). Zero disables the cap.
    pub fn set_per_wallet_buy_cap(ctx: Context<AdminConfig>, cap: u128) -> Result<()> {
        ctx.accounts.token_state.per_wallet_buy_cap = cap;
        msg!("PER-WALLET BUY CAP: {}", cap);
        Ok(())
    }

    pub fn set_anti_sniping_seconds(ctx: Context<AdminConfig>, seconds: i64) -> Result<()> {
        require!(
            (0..=MAX_DURATION_SECONDS).contains(&seconds),
            TonomyError::InvalidDuration
        );
        ctx.accounts.token_state.anti_sniping_seconds = seconds;
        msg!("ANTI-SNIPING WINDOW: {}s", seconds);
        Ok(())
    }

    /// Record the moment liquidity was added, fixing the start of the
    /// anti-sniping window (owner only, one-shot).
    pub fn set_liquidity_added(ctx: Context<AdminConfig>) -> Result<()> {
        let token_state = &mut ctx.accounts.token_state;
        require!(token_state.liquidity_added_at == 0, TonomyError::LiquidityAlreadySet);
        let now = Clock::get()?.unix_timestamp;
        token_state.liquidity_added_at = now;
        msg!(
            "LIQUIDITY ADDED at {}, anti-sniping window open for {}s",
            now,
            token_state.anti_sniping_seconds
        );
        Ok(())
    }

    /// Halt every balance-changing entry point (owner only). View operations
    /// and configuration remain available; no balances or tracking state are
    /// touched.
    pub fn pause(ctx: Context<AdminConfig>) -> Result<()> {
        ctx.accounts.token_state.paused = true;
        msg!("CONTRACT PAUSED by owner: {}", ctx.accounts.owner.key());
        Ok(())
    }

    pub fn unpause(ctx: Context<AdminConfig>) -> Result<()> {
        ctx.accounts.token_state.paused = false;
        msg!("CONTRACT UNPAUSED by owner: {}", ctx.accounts.owner.key());
        Ok(())
    }

    /// Blacklist or un-blacklist a single wallet (owner or anti-sniping
    /// manager). Writes against the LP wallet are no-ops; the event is only
    /// emitted when membership actually changes.
    pub fn set_wallet_blacklisted(
        ctx: Context<ManageBlacklist>,
        wallet: Pubkey,
        value: bool,
    ) -> Result<()> {
        guard::check_blacklist_authority(
            &ctx.accounts.token_state,
            ctx.accounts.authority.key(),
        )?;

        let lp_wallet = ctx.accounts.token_state.lp_wallet;
        let changed = ctx.accounts.blacklist.set(wallet, value, lp_wallet)?;
        if changed {
            emit!(WalletBlacklistedEvent {
                wallet,
                blacklisted: value,
            });
            msg!("WALLET BLACKLISTED: {} = {}", wallet, value);
        }
        Ok(())
    }

    /// Batch variant of set_wallet_blacklisted with identical semantics per
    /// wallet.
    pub fn batch_blacklist_wallets(
        ctx: Context<ManageBlacklist>,
        wallets: Vec<Pubkey>,
        value: bool,
    ) -> Result<()> {
        guard::check_blacklist_authority(
            &ctx.accounts.token_state,
            ctx.accounts.authority.key(),
        )?;

        let lp_wallet = ctx.accounts.token_state.lp_wallet;
        for wallet in wallets {
            let changed = ctx.accounts.blacklist.set(wallet, value, lp_wallet)?;
            if changed {
                emit!(WalletBlacklistedEvent {
                    wallet,
                    blacklisted: value,
                });
                msg!("WALLET BLACKLISTED: {} = {}", wallet, value);
            }
        }
        Ok(())
    }

    /// Zero the cumulative launch-period buy totals for the buy-tracking
    /// accounts passed as remaining accounts (owner or anti-sniping manager).
    /// Last-buy timestamps are left intact, so cooldowns keep running.
    pub fn reset_wallet_buy_amount<'info>(
        ctx: Context<'_, '_, 'info, 'info, ResetBuyTracking<'info>>,
    ) -> Result<()> {
        guard::check_blacklist_authority(
            &ctx.accounts.token_state,
            ctx.accounts.authority.key(),
        )?;

        for account_info in ctx.remaining_accounts.iter() {
            let mut tracking: Account<'info, BuyTracking> = Account::try_from(account_info)?;
            let (expected, _) = Pubkey::find_program_address(
                &[BUY_TRACKING_SEED, tracking.wallet.as_ref()],
                &crate::ID,
            );
            require!(
                expected == account_info.key(),
                TonomyError::InvalidBuyTrackingAccount
            );
            tracking.cumulative_bought = 0;
            tracking.exit(&crate::ID)?;
            msg!("BUY AMOUNT RESET: {}", tracking.wallet);
        }
        Ok(())
    }

    /// Validate upgrade authorization (called before upgrades). The upgrade
    /// itself is performed by the BPF upgradeable loader; this instruction
    /// only gates it behind the owner.
    pub fn validate_upgrade(ctx: Context<ValidateUpgrade>) -> Result<()> {
        require!(
            ctx.accounts.token_state.is_initialized,
            TonomyError::ContractNotInitialized
        );
        require!(
            ctx.accounts.program_data.key() != Pubkey::default(),
            TonomyError::AddressCannotBeZero
        );

        msg!(
            "UPGRADE VALIDATED: Owner: {}, New implementation: {}",
            ctx.accounts.owner.key(),
            ctx.accounts.new_implementation.key()
        );
        Ok(())
    }

    /// Log whether a wallet can currently trade (trading open and wallet not
    /// blacklisted).
    pub fn check_can_trade(ctx: Context<CheckCanTrade>, wallet: Pubkey) -> Result<()> {
        let allowed = guard::can_trade(
            &ctx.accounts.token_state,
            &ctx.accounts.blacklist,
            wallet,
        );
        msg!("CAN TRADE: Wallet: {} = {}", wallet, allowed);
        Ok(())
    }

    /// Log the anti-sniping window status and the seconds remaining.
    pub fn check_anti_sniping_status(ctx: Context<CheckAntiSnipingStatus>) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let token_state = &ctx.accounts.token_state;
        msg!(
            "ANTI-SNIPING: Active: {}, Remaining: {}s, Launch period: {}",
            token_state.is_anti_sniping_period_active(now),
            token_state.remaining_anti_sniping_seconds(now),
            token_state.is_launch_period_active()
        );
        Ok(())
    }
}

/// Claim a lazily created balance account for its wallet.
fn bind_balance(balance: &mut WalletBalance, wallet: Pubkey, bump: u8) {
    if balance.wallet == Pubkey::default() {
        balance.wallet = wallet;
        balance.bump = bump;
    }
}

/// Claim a lazily created buy-tracking account for its wallet.
fn bind_tracking(tracking: &mut BuyTracking, wallet: Pubkey, bump: u8) {
    if tracking.wallet == Pubkey::default() {
        tracking.wallet = wallet;
        tracking.bump = bump;
    }
}

/// Debit `from` and credit `to` atomically. A self-transfer is a checked
/// no-op so the shared account is not double-written.
fn apply_transfer(
    from_balance: &mut WalletBalance,
    to_balance: &mut WalletBalance,
    amount: u128,
) -> Result<()> {
    if from_balance.wallet == to_balance.wallet {
        require!(from_balance.amount >= amount, TonomyError::InsufficientBalance);
        return Ok(());
    }
    from_balance.amount = ledger::debit(from_balance.amount, amount)?;
    to_balance.amount = ledger::credit(to_balance.amount, amount)?;
    Ok(())
}

/// Post-mutation effects of a successful guarded transfer: launch-period buy
/// tracking and the anti-sniping auto-blacklist.
fn apply_effects(
    effects: &guard::TransferEffects,
    token_state: &TokenState,
    blacklist: &mut Blacklist,
    tracking: &mut BuyTracking,
    buyer: Pubkey,
    amount: u128,
    now: i64,
) -> Result<()> {
    if effects.record_buy {
        tracking.cumulative_bought = tracking
            .cumulative_bought
            .checked_add(amount)
            .ok_or_else(|| error!(TonomyError::ArithmeticOverflow))?;
        tracking.last_buy_timestamp = now;
    }
    if effects.auto_blacklist {
        let changed = blacklist.set(buyer, true, token_state.lp_wallet)?;
        if changed {
            emit!(WalletBlacklistedEvent {
                wallet: buyer,
                blacklisted: true,
            });
            msg!("ANTI-SNIPING AUTO-BLACKLIST: {}", buyer);
        }
    }
    Ok(())
}

#[event]
pub struct TransferEvent {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u128,
}

#[event]
pub struct ApprovalEvent {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u128,
}

#[event]
pub struct WalletBlacklistedEvent {
    pub wallet: Pubkey,
    pub blacklisted: bool,
}

#[event]
pub struct AntiSnipingManagerChangedEvent {
    pub previous_manager: Pubkey,
    pub new_manager: Pubkey,
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = TokenState::SIZE,
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        init,
        payer = owner,
        space = Blacklist::SIZE,
        seeds = [BLACKLIST_SEED],
        bump
    )]
    pub blacklist: Account<'info, Blacklist>,

    #[account(
        init,
        payer = owner,
        space = WalletBalance::SIZE,
        seeds = [BALANCE_SEED, owner.key().as_ref()],
        bump
    )]
    pub owner_balance: Account<'info, WalletBalance>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct TransferTokens<'info> {
    #[account(
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        mut,
        seeds = [BLACKLIST_SEED],
        bump
    )]
    pub blacklist: Account<'info, Blacklist>,

    #[account(mut)]
    pub from: Signer<'info>,

    /// CHECK: Recipient wallet, used only as an identity and PDA seed
    pub to: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = from,
        space = WalletBalance::SIZE,
        seeds = [BALANCE_SEED, from.key().as_ref()],
        bump
    )]
    pub from_balance: Account<'info, WalletBalance>,

    #[account(
        init_if_needed,
        payer = from,
        space = WalletBalance::SIZE,
        seeds = [BALANCE_SEED, to.key().as_ref()],
        bump
    )]
    pub to_balance: Account<'info, WalletBalance>,

    #[account(
        init_if_needed,
        payer = from,
        space = BuyTracking::SIZE,
        seeds = [BUY_TRACKING_SEED, to.key().as_ref()],
        bump
    )]
    pub buy_tracking: Account<'info, BuyTracking>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct ApproveAllowance<'info> {
    #[account(
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: Spender wallet, used only as an identity and PDA seed
    pub spender: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = Allowance::SIZE,
        seeds = [ALLOWANCE_SEED, owner.key().as_ref(), spender.key().as_ref()],
        bump
    )]
    pub allowance: Account<'info, Allowance>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct TransferFromTokens<'info> {
    #[account(
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        mut,
        seeds = [BLACKLIST_SEED],
        bump
    )]
    pub blacklist: Account<'info, Blacklist>,

    #[account(mut)]
    pub spender: Signer<'info>,

    /// CHECK: Wallet the tokens are moved from, identity and PDA seed only
    pub from: UncheckedAccount<'info>,

    /// CHECK: Recipient wallet, used only as an identity and PDA seed
    pub to: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = spender,
        space = WalletBalance::SIZE,
        seeds = [BALANCE_SEED, from.key().as_ref()],
        bump
    )]
    pub from_balance: Account<'info, WalletBalance>,

    #[account(
        init_if_needed,
        payer = spender,
        space = WalletBalance::SIZE,
        seeds = [BALANCE_SEED, to.key().as_ref()],
        bump
    )]
    pub to_balance: Account<'info, WalletBalance>,

    #[account(
        mut,
        seeds = [ALLOWANCE_SEED, from.key().as_ref(), spender.key().as_ref()],
        bump = allowance.bump
    )]
    pub allowance: Account<'info, Allowance>,

    #[account(
        init_if_needed,
        payer = spender,
        space = BuyTracking::SIZE,
        seeds = [BUY_TRACKING_SEED, to.key().as_ref()],
        bump
    )]
    pub buy_tracking: Account<'info, BuyTracking>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct BridgeMint<'info> {
    #[account(
        mut,
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(mut)]
    pub bridge: Signer<'info>,

    /// CHECK: Recipient wallet, used only as an identity and PDA seed
    pub to: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = bridge,
        space = WalletBalance::SIZE,
        seeds = [BALANCE_SEED, to.key().as_ref()],
        bump
    )]
    pub to_balance: Account<'info, WalletBalance>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct BridgeBurn<'info> {
    #[account(
        mut,
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Account<'info, TokenState>,

    pub bridge: Signer<'info>,

    /// CHECK: Wallet the tokens are burned from, identity and PDA seed only
    pub from: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [BALANCE_SEED, from.key().as_ref()],
        bump = from_balance.bump
    )]
    pub from_balance: Account<'info, WalletBalance>,
}

#[derive(Accounts)]
pub struct AdminConfig<'info> {
    #[account(
        mut,
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        constraint = owner.key() == token_state.owner @ TonomyError::UnauthorizedOwner
    )]
    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct ManageBlacklist<'info> {
    #[account(
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        mut,
        seeds = [BLACKLIST_SEED],
        bump
    )]
    pub blacklist: Account<'info, Blacklist>,

    pub authority: Signer<'info>,
}

#[derive(Accounts)]
pub struct ResetBuyTracking<'info> {
    #[account(
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Account<'info, TokenState>,

    pub authority: Signer<'info>,
}

#[derive(Accounts)]
pub struct ValidateUpgrade<'info> {
    #[account(
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        constraint = owner.key() == token_state.owner @ TonomyError::UnauthorizedOwner
    )]
    pub owner: Signer<'info>,

    /// CHECK: Program data account for BPF loader upgradeable
    pub program_data: UncheckedAccount<'info>,

    /// CHECK: The implementation the upgrade hands over to
    #[account(executable)]
    pub new_implementation: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct CheckCanTrade<'info> {
    #[account(
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        seeds = [BLACKLIST_SEED],
        bump
    )]
    pub blacklist: Account<'info, Blacklist>,
}

#[derive(Accounts)]
pub struct CheckAntiSnipingStatus<'info> {
    #[account(
        seeds = [TOKEN_STATE_SEED],
        bump
    )]
    pub token_state: Account<'info, TokenState>,
}
