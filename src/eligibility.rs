use soroban_sdk::{xdr::ToXdr, Address, BytesN, Env, String};

use crate::storage_types::{PersistentKey, TTL_PERSISTENT};

/// Membership marker key: sha256 over the XDR encoding of the citizen
/// address followed by the reward key. Only presence under the computed
/// key is observable, which is all the distribution path needs.
pub fn eligibility_key(env: &Env, citizen: &Address, reward_key: &String) -> BytesN<32> {
    let mut payload = citizen.clone().to_xdr(env);
    payload.append(&reward_key.clone().to_xdr(env));
    env.crypto().sha256(&payload).to_bytes()
}

/// Idempotent: resubmitting the same citizen for the same key rewrites
/// the same sentinel.
pub fn mark_eligible(env: &Env, citizen: &Address, reward_key: &String) {
    let key = PersistentKey::Eligible(eligibility_key(env, citizen, reward_key));
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn is_eligible(env: &Env, citizen: &Address, reward_key: &String) -> bool {
    let key = PersistentKey::Eligible(eligibility_key(env, citizen, reward_key));
    env.storage().persistent().has(&key)
}
