use anchor_lang::prelude::*;
use anchor_lang::Discriminator;

use crate::{
    errors::ForwarderError,
    events::{AllowanceReplenished, CallerConfigured, CallerRemoved},
    utils::{calculate_replenished_allowance, elapsed_since},
};

/// CallerAllowance state account - the rate-limited budget of one whitelisted caller
/// on one forwarder
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct CallerAllowance {
    // The forwarder this allowance belongs to
    pub forwarder: Pubkey,

    // The whitelisted caller
    pub caller: Pubkey,

    // Upper bound of the allowance, fully replenished once per interval
    pub max_allowance: u64,

    // Spendable allowance, never above `max_allowance`
    pub allowance: u64,

    // Replenishment window in seconds
    pub interval: u64,

    // Timestamp of the last replenishment computation
    pub last_replenished_at: i64,

    // Whether the caller is currently whitelisted
    pub active: bool,

    // The bump used to derive the PDA for this account
    // Stored so we don't need to recalculate it later
    pub bump: u8,
}

impl CallerAllowance {
    /// Grant (or re-grant) a caller a full allowance under a new policy.
    /// Unspent allowance from a previous policy is discarded.
    /// # Arguments
    /// * `forwarder` - The forwarder the allowance belongs to
    /// * `caller` - The caller being whitelisted
    /// * `amount` - The maximum allowance per interval
    /// * `interval` - The replenishment interval in seconds
    /// * `now` - The current unix timestamp
    /// * `bump` - The PDA bump of the allowance account
    /// # Returns
    /// * `Result<CallerConfigured>` - The event describing the new policy
    pub fn configure(
        &mut self,
        forwarder: Pubkey,
        caller: Pubkey,
        amount: u64,
        interval: u64,
        now: i64,
        bump: u8,
    ) -> Result<CallerConfigured> {
        require_keys_neq!(caller, Pubkey::default(), ForwarderError::ZeroAddress);
        require_gt!(amount, 0, ForwarderError::ZeroAmount);
        require_gt!(interval, 0, ForwarderError::ZeroInterval);

        *self = CallerAllowance {
            forwarder,
            caller,
            max_allowance: amount,
            allowance: amount,
            interval,
            last_replenished_at: now,
            active: true,
            bump,
        };

        Ok(CallerConfigured {
            caller,
            amount,
            interval,
        })
    }

    /// Remove the caller from the whitelist, zeroing its allowance policy.
    /// `forwarder`, `caller` and `bump` are kept, they are bound by the account address.
    pub fn remove(&mut self) -> CallerRemoved {
        self.max_allowance = 0;
        self.allowance = 0;
        self.interval = 0;
        self.last_replenished_at = 0;
        self.active = false;

        CallerRemoved {
            caller: self.caller,
        }
    }

    /// The allowance the caller would hold after a replenishment at `now`.
    /// Does not mutate state.
    pub fn estimated_allowance(&self, now: i64) -> Result<u64> {
        if !self.active {
            return Ok(self.allowance);
        }

        calculate_replenished_allowance(
            elapsed_since(self.last_replenished_at, now),
            self.interval,
            self.allowance,
            self.max_allowance,
        )
    }

    /// Replenish the allowance for the time elapsed since the last replenishment.
    /// Calling twice at the same timestamp leaves the state unchanged.
    /// The timestamp advances even when the grant truncates to zero.
    /// # Returns
    /// * `Result<Option<AllowanceReplenished>>` - The event to emit, `None` when no time elapsed
    pub fn replenish(&mut self, now: i64) -> Result<Option<AllowanceReplenished>> {
        if !self.active {
            return Ok(None);
        }

        let elapsed = elapsed_since(self.last_replenished_at, now);
        if elapsed == 0 {
            return Ok(None);
        }

        let new_allowance = calculate_replenished_allowance(
            elapsed,
            self.interval,
            self.allowance,
            self.max_allowance,
        )?;

        let allowance_increase = new_allowance
            .checked_sub(self.allowance)
            .ok_or(ForwarderError::MathOverflow)?;

        self.allowance = new_allowance;
        self.last_replenished_at = now;

        Ok(Some(AllowanceReplenished {
            caller: self.caller,
            allowance_increase,
            new_allowance,
        }))
    }

    /// Spend `amount` of the caller's allowance after replenishing it.
    /// # Arguments
    /// * `amount` - The cost of the gated operation
    /// * `now` - The current unix timestamp
    /// # Returns
    /// * `Result<Option<AllowanceReplenished>>` - The replenishment event, if any
    pub fn consume(&mut self, amount: u64, now: i64) -> Result<Option<AllowanceReplenished>> {
        self.ensure_whitelisted()?;

        let replenished = self.replenish(now)?;

        if amount > self.allowance {
            msg!(
                "Caller allowance exceeded: requested {} > available {}. max_allowance={}, interval={}",
                amount,
                self.allowance,
                self.max_allowance,
                self.interval
            );
            return Err(ForwarderError::AllowanceExceeded.into());
        }

        self.allowance = self
            .allowance
            .checked_sub(amount)
            .ok_or(ForwarderError::MathOverflow)?;

        Ok(replenished)
    }

    #[inline(always)]
    pub fn ensure_whitelisted(&self) -> Result<()> {
        require!(self.active, ForwarderError::CallerNotWhitelisted);
        Ok(())
    }
}

/// Reads a `CallerAllowance` from an account that may not exist yet.
/// # Returns
/// * `Result<Option<CallerAllowance>>` - `None` when the account holds no allowance record
pub fn load_caller_allowance(info: &AccountInfo) -> Result<Option<CallerAllowance>> {
    if info.owner != &crate::ID {
        return Ok(None);
    }

    let data = info.try_borrow_data()?;
    if data.len() < 8 || data[..8] != *CallerAllowance::DISCRIMINATOR {
        return Ok(None);
    }

    let mut slice: &[u8] = &data[..];
    Ok(Some(CallerAllowance::try_deserialize(&mut slice)?))
}

/// Writes a `CallerAllowance` back to its account.
/// The account must already hold an allowance record.
pub fn store_caller_allowance(info: &AccountInfo, record: &CallerAllowance) -> Result<()> {
    require_keys_eq!(*info.owner, crate::ID, ForwarderError::CallerNotWhitelisted);

    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    record.try_serialize(&mut writer)
}
