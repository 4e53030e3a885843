//! Deterministic addresses for every account the program owns
//!
//! Nothing stores these addresses. On-chain they are re-derived by the
//! `seeds = [...]` account constraints, off-chain clients call the helpers
//! below. Both use the same seed constants.

use solana_program::pubkey::Pubkey;

pub const CONFIG_SEED: &[u8] = b"config";
pub const POOL_SEED: &[u8] = b"pool";
pub const SHARE_SEED: &[u8] = b"share";

/// Derive a program address from a namespace and ordered seed components.
///
/// The returned bump is the highest value for which the address falls off
/// the ed25519 curve, so no private key can ever sign for it.
pub fn derive(namespace: &[u8], components: &[&[u8]], program_id: &Pubkey) -> (Pubkey, u8) {
    let mut seeds: Vec<&[u8]> = Vec::with_capacity(components.len() + 1);
    seeds.push(namespace);
    seeds.extend_from_slice(components);
    Pubkey::find_program_address(&seeds, program_id)
}

/// Order two mints so that `{a, b}` and `{b, a}` name the same pool.
pub fn canonical_pair(mint_a: Pubkey, mint_b: Pubkey) -> (Pubkey, Pubkey) {
    if mint_a <= mint_b {
        (mint_a, mint_b)
    } else {
        (mint_b, mint_a)
    }
}

pub fn config_address(program_id: &Pubkey) -> (Pubkey, u8) {
    derive(CONFIG_SEED, &[], program_id)
}

/// Reserve account holding `mint_held`, paired against `mint_other`.
pub fn reserve_address(mint_held: &Pubkey, mint_other: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    derive(POOL_SEED, &[mint_held.as_ref(), mint_other.as_ref()], program_id)
}

/// LP share mint of the pair; argument order does not matter.
pub fn share_mint_address(mint_a: &Pubkey, mint_b: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    let (mint_x, mint_y) = canonical_pair(*mint_a, *mint_b);
    derive(SHARE_SEED, &[mint_x.as_ref(), mint_y.as_ref()], program_id)
}

/// Signer seeds for a reserve account acting as its own token authority
pub fn reserve_signer_seeds<'a>(
    mint_held: &'a Pubkey,
    mint_other: &'a Pubkey,
    bump: &'a [u8; 1],
) -> [&'a [u8]; 4] {
    [POOL_SEED, mint_held.as_ref(), mint_other.as_ref(), &bump[..]]
}

/// Signer seeds for the LP mint acting as its own mint authority
pub fn share_mint_signer_seeds<'a>(
    mint_x: &'a Pubkey,
    mint_y: &'a Pubkey,
    bump: &'a [u8; 1],
) -> [&'a [u8]; 4] {
    [SHARE_SEED, mint_x.as_ref(), mint_y.as_ref(), &bump[..]]
}

/// Every address a pool uses, for clients building instructions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolAddresses {
    pub mint_x: Pubkey,
    pub mint_y: Pubkey,
    pub reserve_x: Pubkey,
    pub reserve_y: Pubkey,
    pub share_mint: Pubkey,
}

impl PoolAddresses {
    pub fn derive(mint_a: &Pubkey, mint_b: &Pubkey, program_id: &Pubkey) -> Self {
        let (mint_x, mint_y) = canonical_pair(*mint_a, *mint_b);
        Self {
            mint_x,
            mint_y,
            reserve_x: reserve_address(&mint_x, &mint_y, program_id).0,
            reserve_y: reserve_address(&mint_y, &mint_x, program_id).0,
            share_mint: share_mint_address(&mint_x, &mint_y, program_id).0,
        }
    }
}
