use anchor_lang::prelude::*;

use crate::errors::StakedTokenError;

/// MinterAllowance account - how much a minter may still mint
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct MinterAllowance {
    pub minter: Pubkey,

    // Remaining amount the minter may mint
    pub allowance: u64,

    // Whether the minter is currently configured
    pub active: bool,

    pub bump: u8,
}

impl MinterAllowance {
    /// Set the minter's remaining allowance, replacing any previous value
    pub fn configure(&mut self, minter: Pubkey, allowance: u64, bump: u8) -> Result<()> {
        require_keys_neq!(minter, Pubkey::default(), StakedTokenError::ZeroAddress);

        self.minter = minter;
        self.allowance = allowance;
        self.active = true;
        self.bump = bump;

        Ok(())
    }

    pub fn remove(&mut self) {
        self.allowance = 0;
        self.active = false;
    }

    /// Deduct `amount` from the minter's allowance
    /// # Arguments
    /// * `amount` - The amount about to be minted
    /// # Returns
    /// * `Result<()>` - Ok if the minter may mint `amount`, Err otherwise
    pub fn spend(&mut self, amount: u64) -> Result<()> {
        require!(self.active, StakedTokenError::NotMinter);
        require_gt!(amount, 0, StakedTokenError::ZeroAmount);

        if amount > self.allowance {
            msg!(
                "Mint exceeds minter allowance: requested {} > available {}",
                amount,
                self.allowance
            );
            return err!(StakedTokenError::MintExceedsMinterAllowance);
        }

        self.allowance = self
            .allowance
            .checked_sub(amount)
            .ok_or(StakedTokenError::MathOverflow)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

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

    fn minter(allowance: u64) -> MinterAllowance {
        let mut record = MinterAllowance::default();
        record.configure(key(1), allowance, 255).unwrap();
        record
    }

    #[test]
    fn test_spend_decrements() {
        let mut record = minter(1000);
        record.spend(400).unwrap();
        record.spend(600).unwrap();
        assert_eq!(record.allowance, 0);
    }

    #[test]
    fn test_spend_above_allowance() {
        let mut record = minter(50);
        assert_eq!(
            error_code(record.spend(51)),
            u32::from(StakedTokenError::MintExceedsMinterAllowance)
        );
        assert_eq!(record.allowance, 50);
    }

    #[test]
    fn test_spend_zero() {
        let mut record = minter(50);
        assert_eq!(
            error_code(record.spend(0)),
            u32::from(StakedTokenError::ZeroAmount)
        );
    }

    #[test]
    fn test_removed_minter_cannot_spend() {
        let mut record = minter(50);
        record.remove();
        assert_eq!(
            error_code(record.spend(1)),
            u32::from(StakedTokenError::NotMinter)
        );

        let mut unconfigured = MinterAllowance::default();
        assert_eq!(
            error_code(unconfigured.spend(1)),
            u32::from(StakedTokenError::NotMinter)
        );
    }

    #[test]
    fn test_configure_replaces_allowance() {
        let mut record = minter(50);
        record.spend(20).unwrap();
        record.configure(key(1), 500, 255).unwrap();
        assert_eq!(record.allowance, 500);

        let result = record.configure(Pubkey::default(), 1, 255);
        assert_eq!(error_code(result), u32::from(StakedTokenError::ZeroAddress));
    }

    proptest! {
        #[test]
        fn test_total_minted_never_exceeds_allowance(
            allowance in 0u64..1_000_000,
            amounts in prop::collection::vec(1u64..100_000, 0..32),
        ) {
            let mut record = minter(allowance);
            let mut minted = 0u64;

            for amount in amounts {
                if record.spend(amount).is_ok() {
                    minted += amount;
                }
            }

            prop_assert!(minted <= allowance);
            prop_assert_eq!(minted + record.allowance, allowance);
        }
    }
}
