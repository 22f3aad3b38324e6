use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    instruction::{AccountMeta, Instruction},
    program::{get_return_data, invoke_signed},
};

use crate::errors::ForwarderError;

/// Verifies the target of a forwarded call is the bound token program and holds executable code
/// # Arguments
/// * `target` - The account the call is addressed to
/// * `token_contract` - The token program the forwarder is bound to
/// # Returns
/// * `Result<()>` - Ok if the call may be issued, Err otherwise
#[inline(always)]
pub fn ensure_contract(target: &AccountInfo, token_contract: &Pubkey) -> Result<()> {
    require!(target.executable, ForwarderError::NotAContract);
    require_keys_eq!(
        target.key(),
        *token_contract,
        ForwarderError::TokenContractMismatch
    );
    Ok(())
}

/// Invokes an entrypoint of the bound token program, signing with the forwarder's seeds.
/// The target is checked before the call is issued. A failing callee aborts the whole
/// transaction, so no partial effects of this call can be observed.
/// # Arguments
/// * `target` - The program account the call is addressed to
/// * `token_contract` - The token program the forwarder is bound to
/// * `data` - The serialized instruction
/// * `accounts` - The account metas the entrypoint expects
/// * `account_infos` - The accounts backing `accounts`
/// * `signer_seeds` - The forwarder PDA seeds
pub fn call<'info>(
    target: &AccountInfo<'info>,
    token_contract: &Pubkey,
    data: Vec<u8>,
    accounts: Vec<AccountMeta>,
    account_infos: &[AccountInfo<'info>],
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    ensure_contract(target, token_contract)?;

    let ix = Instruction {
        program_id: target.key(),
        accounts,
        data,
    };

    let mut infos = account_infos.to_vec();
    infos.push(target.clone());

    invoke_signed(&ix, &infos, signer_seeds).map_err(Into::into)
}

/// Invokes a read-only entrypoint of the bound token program and decodes its result
pub fn static_call<'info, T: AnchorDeserialize>(
    target: &AccountInfo<'info>,
    token_contract: &Pubkey,
    data: Vec<u8>,
    accounts: Vec<AccountMeta>,
    account_infos: &[AccountInfo<'info>],
) -> Result<T> {
    call(target, token_contract, data, accounts, account_infos, &[])?;
    read_return_data(&target.key())
}

/// Reads the result of a read-only call from the return data set by `target`
pub fn read_return_data<T: AnchorDeserialize>(target: &Pubkey) -> Result<T> {
    decode_return_data(target, get_return_data())
}

/// Decodes return data produced by `target`.
/// Missing data or data set by another program means the call did not produce a result.
pub fn decode_return_data<T: AnchorDeserialize>(
    target: &Pubkey,
    return_data: Option<(Pubkey, Vec<u8>)>,
) -> Result<T> {
    let (program_id, data) = return_data.ok_or(ForwarderError::DownstreamCallFailed)?;

    if program_id != *target {
        msg!(
            "Return data set by {} while reading from {}",
            program_id,
            target
        );
        return err!(ForwarderError::DownstreamCallFailed);
    }

    T::try_from_slice(&data).map_err(|_| error!(ForwarderError::DownstreamDecodeFailed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_code<T>(result: Result<T>) -> u32 {
        match result {
            Err(anchor_lang::error::Error::AnchorError(e)) => e.error_code_number,
            Err(e) => panic!("expected an anchor error, got {:?}", e),
            Ok(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn test_decodes_u64_from_target() {
        let target = Pubkey::new_from_array([7; 32]);
        let data = 110u64.to_le_bytes().to_vec();

        let rate: u64 = decode_return_data(&target, Some((target, data))).unwrap();
        assert_eq!(rate, 110);
    }

    #[test]
    fn test_missing_return_data() {
        let target = Pubkey::new_from_array([7; 32]);
        let result = decode_return_data::<u64>(&target, None);
        assert_eq!(
            error_code(result),
            u32::from(ForwarderError::DownstreamCallFailed)
        );
    }

    #[test]
    fn test_return_data_from_other_program() {
        let target = Pubkey::new_from_array([7; 32]);
        let other = Pubkey::new_from_array([8; 32]);
        let result = decode_return_data::<u64>(&target, Some((other, vec![1; 8])));
        assert_eq!(
            error_code(result),
            u32::from(ForwarderError::DownstreamCallFailed)
        );
    }

    #[test]
    fn test_undecodable_return_data() {
        let target = Pubkey::new_from_array([7; 32]);
        let result = decode_return_data::<u64>(&target, Some((target, vec![1, 2, 3])));
        assert_eq!(
            error_code(result),
            u32::from(ForwarderError::DownstreamDecodeFailed)
        );
    }
}
