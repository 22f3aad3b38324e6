use anchor_lang::prelude::*;

use crate::{
    errors::ForwarderError,
    events::{ExchangeRateUpdated, Mint},
    state::CallerAllowance,
};

/// The privileged mint entrypoint of a token contract
pub trait MintEndpoint {
    /// Mint `amount` tokens to `to` on behalf of the forwarder
    fn forward_mint(&self, to: Pubkey, amount: u64) -> Result<()>;
}

/// The oracle entrypoints of a token contract
pub trait ExchangeRateEndpoint {
    /// Read-only: the exchange rate currently stored by the token contract
    fn exchange_rate(&self) -> Result<u64>;

    /// Write `new_rate` to the token contract as its oracle
    fn forward_exchange_rate(&self, new_rate: u64) -> Result<()>;
}

/// Gate a mint behind the caller's allowance, then forward it to the token contract.
/// # Arguments
/// * `record` - The caller's allowance record
/// * `endpoint` - The token contract's mint entrypoint
/// * `to` - The recipient of the minted tokens
/// * `amount` - The amount to mint, also the allowance cost
/// * `now` - The current unix timestamp
/// * `commit` - Persists the allowance record before the token contract is called
/// # Returns
/// * `Result<()>` - Ok if the mint was forwarded, Err otherwise
pub fn gated_mint<E: MintEndpoint>(
    record: &mut CallerAllowance,
    endpoint: &E,
    to: Pubkey,
    amount: u64,
    now: i64,
    commit: impl FnMut(&CallerAllowance) -> Result<()>,
) -> Result<()> {
    record.ensure_whitelisted()?;
    require_keys_neq!(to, Pubkey::default(), ForwarderError::ZeroAddress);
    require_gt!(amount, 0, ForwarderError::ZeroAmount);

    consume_and_forward(record, amount, now, commit, || {
        endpoint.forward_mint(to, amount)
    })?;

    emit!(Mint {
        minter: record.caller,
        to,
        amount,
    });

    Ok(())
}

/// Gate an exchange rate update behind the caller's allowance, then forward it to the
/// token contract. The cost of the update is the magnitude of the rate change.
/// # Arguments
/// * `record` - The caller's allowance record
/// * `endpoint` - The token contract's oracle entrypoints
/// * `new_rate` - The exchange rate to write
/// * `now` - The current unix timestamp
/// * `commit` - Persists the allowance record before the token contract is called
/// # Returns
/// * `Result<()>` - Ok if the update was forwarded, Err otherwise
pub fn gated_exchange_rate_update<E: ExchangeRateEndpoint>(
    record: &mut CallerAllowance,
    endpoint: &E,
    new_rate: u64,
    now: i64,
    commit: impl FnMut(&CallerAllowance) -> Result<()>,
) -> Result<()> {
    record.ensure_whitelisted()?;
    require_gt!(new_rate, 0, ForwarderError::RateZero);

    let current_rate = endpoint.exchange_rate()?;
    let cost = exchange_rate_update_cost(current_rate, new_rate)?;

    consume_and_forward(record, cost, now, commit, || {
        endpoint.forward_exchange_rate(new_rate)
    })?;

    emit!(ExchangeRateUpdated {
        caller: record.caller,
        new_exchange_rate: new_rate,
    });

    Ok(())
}

/// Allowance cost of moving the exchange rate from `current_rate` to `new_rate`
#[inline(always)]
pub fn exchange_rate_update_cost(current_rate: u64, new_rate: u64) -> Result<u64> {
    require_gt!(new_rate, 0, ForwarderError::RateZero);
    require_neq!(new_rate, current_rate, ForwarderError::RateUnchanged);

    Ok(new_rate.abs_diff(current_rate))
}

/// Consume `cost` from the allowance and persist it, then run `forward`.
/// If any step fails the record is restored and persisted as it was before the call.
fn consume_and_forward<T>(
    record: &mut CallerAllowance,
    cost: u64,
    now: i64,
    mut commit: impl FnMut(&CallerAllowance) -> Result<()>,
    forward: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let snapshot = record.clone();

    let result = record.consume(cost, now).and_then(|replenished| {
        // Effects are committed before the token contract is called
        commit(record)?;

        if let Some(event) = replenished {
            emit!(event);
        }

        forward()
    });

    if result.is_err() {
        *record = snapshot;
        commit(record)?;
    }

    result
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::state::{load_caller_allowance, store_caller_allowance};

    const START: i64 = 1_700_000_000;
    const INTERVAL: u64 = 3600;

    fn key(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    fn error_code<T>(result: Result<T>) -> u32 {
        match result {
            Err(anchor_lang::error::Error::AnchorError(e)) => e.error_code_number,
            Err(e) => panic!("expected an anchor error, got {:?}", e),
            Ok(_) => panic!("expected an error"),
        }
    }

    /// In-memory stand-in for the staked token program
    struct TokenDouble {
        // The token's own limit on what the forwarder may mint
        minter_allowance: Cell<u64>,
        minted: RefCell<Vec<(Pubkey, u64)>>,
        exchange_rate: Cell<u64>,
        // Whether a state-changing call reverts
        reverts: bool,
    }

    impl TokenDouble {
        fn new(minter_allowance: u64, exchange_rate: u64) -> Self {
            Self {
                minter_allowance: Cell::new(minter_allowance),
                minted: RefCell::new(Vec::new()),
                exchange_rate: Cell::new(exchange_rate),
                reverts: false,
            }
        }

        fn reverting() -> Self {
            Self {
                reverts: true,
                ..Self::new(u64::MAX, 100)
            }
        }
    }

    impl MintEndpoint for TokenDouble {
        fn forward_mint(&self, to: Pubkey, amount: u64) -> Result<()> {
            if self.reverts || amount > self.minter_allowance.get() {
                return err!(ForwarderError::DownstreamCallFailed);
            }
            self.minter_allowance.set(self.minter_allowance.get() - amount);
            self.minted.borrow_mut().push((to, amount));
            Ok(())
        }
    }

    impl ExchangeRateEndpoint for TokenDouble {
        fn exchange_rate(&self) -> Result<u64> {
            Ok(self.exchange_rate.get())
        }

        fn forward_exchange_rate(&self, new_rate: u64) -> Result<()> {
            if self.reverts {
                return err!(ForwarderError::DownstreamCallFailed);
            }
            self.exchange_rate.set(new_rate);
            Ok(())
        }
    }

    fn configured(amount: u64) -> CallerAllowance {
        let mut record = CallerAllowance::default();
        record
            .configure(key(1), key(2), amount, INTERVAL, START, 255)
            .unwrap();
        record
    }

    fn no_store(_: &CallerAllowance) -> Result<()> {
        Ok(())
    }

    #[test]
    fn test_mint_replenishes_over_time() {
        let token = TokenDouble::new(1000, 0);
        let mut record = configured(100);
        let recipient = key(3);

        gated_mint(&mut record, &token, recipient, 100, START, no_store).unwrap();
        assert_eq!(record.allowance, 0);

        let now = START + 1800;
        assert_eq!(record.estimated_allowance(now).unwrap(), 50);

        gated_mint(&mut record, &token, recipient, 50, now, no_store).unwrap();
        assert_eq!(record.allowance, 0);
        assert_eq!(record.estimated_allowance(now).unwrap(), 0);

        let later = now + INTERVAL as i64 + 1;
        assert_eq!(record.estimated_allowance(later).unwrap(), 100);

        assert_eq!(*token.minted.borrow(), vec![(recipient, 100), (recipient, 50)]);
        assert_eq!(token.minter_allowance.get(), 850);
    }

    #[test]
    fn test_mint_commits_before_forwarding() {
        let token = TokenDouble::new(1000, 0);
        let mut record = configured(100);
        let committed = RefCell::new(Vec::new());

        gated_mint(&mut record, &token, key(3), 40, START, |r| {
            // The token has not been called yet
            assert!(token.minted.borrow().is_empty());
            committed.borrow_mut().push(r.allowance);
            Ok(())
        })
        .unwrap();

        assert_eq!(*committed.borrow(), vec![60]);
    }

    #[test]
    fn test_failed_mint_restores_allowance() {
        // The token only lets the forwarder mint 50
        let token = TokenDouble::new(50, 0);
        let mut record = configured(100);
        let before = record.clone();
        let committed = RefCell::new(Vec::new());

        let result = gated_mint(&mut record, &token, key(3), 80, START + 10, |r| {
            committed.borrow_mut().push(r.clone());
            Ok(())
        });

        assert_eq!(
            error_code(result),
            u32::from(ForwarderError::DownstreamCallFailed)
        );
        assert_eq!(record, before);
        // Last write restores the pre-call record
        assert_eq!(committed.borrow().last(), Some(&before));
        assert!(token.minted.borrow().is_empty());
    }

    #[test]
    fn test_mint_validates_arguments() {
        let token = TokenDouble::new(1000, 0);
        let mut record = configured(100);

        let result = gated_mint(&mut record, &token, Pubkey::default(), 10, START, no_store);
        assert_eq!(error_code(result), u32::from(ForwarderError::ZeroAddress));

        let result = gated_mint(&mut record, &token, key(3), 0, START, no_store);
        assert_eq!(error_code(result), u32::from(ForwarderError::ZeroAmount));

        let result = gated_mint(&mut record, &token, key(3), 101, START, no_store);
        assert_eq!(
            error_code(result),
            u32::from(ForwarderError::AllowanceExceeded)
        );

        assert_eq!(record.allowance, 100);
        assert!(token.minted.borrow().is_empty());
    }

    #[test]
    fn test_unwhitelisted_caller_cannot_mint() {
        let token = TokenDouble::new(1000, 0);

        let mut unconfigured = CallerAllowance::default();
        let result = gated_mint(&mut unconfigured, &token, key(3), 0, START, no_store);
        assert_eq!(
            error_code(result),
            u32::from(ForwarderError::CallerNotWhitelisted)
        );

        let mut removed = configured(100);
        removed.remove();
        let result = gated_mint(&mut removed, &token, Pubkey::default(), 0, START, no_store);
        assert_eq!(
            error_code(result),
            u32::from(ForwarderError::CallerNotWhitelisted)
        );
    }

    #[test]
    fn test_exchange_rate_decrease_costs_delta() {
        let token = TokenDouble::new(0, 100);
        let mut record = configured(10);

        gated_exchange_rate_update(&mut record, &token, 90, START, no_store).unwrap();

        assert_eq!(token.exchange_rate.get(), 90);
        assert_eq!(record.allowance, 0);
    }

    #[test]
    fn test_exchange_rate_increase_replenishes_over_time() {
        let token = TokenDouble::new(0, 100);
        let mut record = configured(10);

        gated_exchange_rate_update(&mut record, &token, 110, START, no_store).unwrap();
        assert_eq!(record.allowance, 0);

        let now = START + 1800;
        assert_eq!(record.estimated_allowance(now).unwrap(), 5);

        gated_exchange_rate_update(&mut record, &token, 105, now, no_store).unwrap();
        assert_eq!(token.exchange_rate.get(), 105);
        assert_eq!(record.estimated_allowance(now).unwrap(), 0);

        let later = now + INTERVAL as i64 + 1;
        assert_eq!(record.estimated_allowance(later).unwrap(), 10);
    }

    #[test]
    fn test_exchange_rate_update_exceeding_allowance() {
        let token = TokenDouble::new(0, 100);
        let mut record = configured(10);

        let result = gated_exchange_rate_update(&mut record, &token, 111, START, no_store);
        assert_eq!(
            error_code(result),
            u32::from(ForwarderError::AllowanceExceeded)
        );
        assert_eq!(token.exchange_rate.get(), 100);
        assert_eq!(record.allowance, 10);
    }

    #[test]
    fn test_unchanged_exchange_rate_rejected() {
        let token = TokenDouble::new(0, 100);

        let mut record = configured(10);
        let result = gated_exchange_rate_update(&mut record, &token, 100, START, no_store);
        assert_eq!(
            error_code(result),
            u32::from(ForwarderError::RateUnchanged)
        );

        // Still rejected with a large allowance
        let mut record = configured(u64::MAX);
        let result = gated_exchange_rate_update(&mut record, &token, 100, START, no_store);
        assert_eq!(
            error_code(result),
            u32::from(ForwarderError::RateUnchanged)
        );
    }

    #[test]
    fn test_zero_exchange_rate_rejected() {
        let token = TokenDouble::new(0, 100);
        let mut record = configured(1000);

        let result = gated_exchange_rate_update(&mut record, &token, 0, START, no_store);
        assert_eq!(error_code(result), u32::from(ForwarderError::RateZero));
    }

    #[test]
    fn test_unwhitelisted_caller_cannot_update_exchange_rate() {
        let token = TokenDouble::new(0, 100);
        let mut record = CallerAllowance::default();

        let result = gated_exchange_rate_update(&mut record, &token, 110, START, no_store);
        assert_eq!(
            error_code(result),
            u32::from(ForwarderError::CallerNotWhitelisted)
        );
    }

    #[test]
    fn test_failed_exchange_rate_update_restores_allowance() {
        let token = TokenDouble::reverting();
        let mut record = configured(10);
        let before = record.clone();

        let result = gated_exchange_rate_update(&mut record, &token, 95, START + 60, no_store);
        assert_eq!(
            error_code(result),
            u32::from(ForwarderError::DownstreamCallFailed)
        );
        assert_eq!(record, before);
    }

    #[test]
    fn test_exchange_rate_update_cost() {
        assert_eq!(exchange_rate_update_cost(100, 110).unwrap(), 10);
        assert_eq!(exchange_rate_update_cost(100, 90).unwrap(), 10);
        assert_eq!(exchange_rate_update_cost(0, 1).unwrap(), 1);
        assert_eq!(exchange_rate_update_cost(u64::MAX, 1).unwrap(), u64::MAX - 1);
        assert!(exchange_rate_update_cost(5, 5).is_err());
        assert!(exchange_rate_update_cost(5, 0).is_err());
    }

    #[test]
    fn test_failed_mint_restores_stored_record() {
        let token = TokenDouble::reverting();
        let address = key(9);
        let owner = crate::ID;
        let mut lamports = 0u64;
        let mut data = vec![0u8; 8 + CallerAllowance::INIT_SPACE];
        let info = AccountInfo::new(
            &address,
            false,
            true,
            &mut lamports,
            &mut data,
            &owner,
            false,
            0,
        );

        let before = configured(100);
        store_caller_allowance(&info, &before).unwrap();
        let mut expected = Vec::new();
        before.try_serialize(&mut expected).unwrap();

        let mut record = load_caller_allowance(&info).unwrap().unwrap();
        let result = gated_mint(&mut record, &token, key(3), 60, START + 10, |r| {
            store_caller_allowance(&info, r)
        });

        assert_eq!(
            error_code(result),
            u32::from(ForwarderError::DownstreamCallFailed)
        );
        assert_eq!(&info.try_borrow_data().unwrap()[..expected.len()], &expected[..]);
        assert_eq!(load_caller_allowance(&info).unwrap().unwrap(), before);
    }

    #[test]
    fn test_successful_mint_persists_spent_allowance() {
        let token = TokenDouble::new(1000, 0);
        let address = key(10);
        let owner = crate::ID;
        let mut lamports = 0u64;
        let mut data = vec![0u8; 8 + CallerAllowance::INIT_SPACE];
        let info = AccountInfo::new(
            &address,
            false,
            true,
            &mut lamports,
            &mut data,
            &owner,
            false,
            0,
        );
        store_caller_allowance(&info, &configured(100)).unwrap();

        let mut record = load_caller_allowance(&info).unwrap().unwrap();
        gated_mint(&mut record, &token, key(3), 60, START, |r| {
            store_caller_allowance(&info, r)
        })
        .unwrap();

        let stored = load_caller_allowance(&info).unwrap().unwrap();
        assert_eq!(stored.allowance, 40);
        assert_eq!(*token.minted.borrow(), vec![(key(3), 60)]);
    }
}
