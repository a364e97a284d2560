#![no_std]


mod eligibility;
mod events;
mod storage_types;

use events::{
    AdminAddedEvent, AdminRemovedEvent, CitizenSubmittedEvent, RewardDistributedEvent,
    RewardLockedEvent, RewardRefundedEvent, RewardStoredEvent,
};
use storage_types::{
    DataKey, PersistentKey, RewardState, RewardsError, RewardsInfo, PARTICIPATION_POOL_PCT,
    TOP_REWARD_PCT, TTL_INSTANCE, TTL_PERSISTENT,
};

use soroban_sdk::{
    contract, contractimpl, panic_with_error, token, Address, BytesN, Env, Map, String, Vec,
};

#[contract]
pub struct RewardsContract;

#[contractimpl]
impl RewardsContract {
    /// One-time bootstrap. The owner is admitted as the first admin.
    /// `native_token` designates the asset whose facilitator-less deposit
    /// notices are ignored rather than rejected.
    pub fn initialize(env: Env, owner: Address, native_token: Address) {
        if env.storage().instance().has(&DataKey::Owner) {
            panic_with_error!(&env, RewardsError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::NativeToken, &native_token);
        set_admin(&env, &owner);

        extend_instance(&env);
    }

    /// Record a keyed deposit and take custody of the funds. Creates the
    /// campaign record in state `Opened`; the reward key must be fresh.
    pub fn deposit(
        env: Env,
        from: Option<Address>,
        token: Address,
        amount: i128,
        reward_key: Option<String>,
    ) {
        let facilitator = match from {
            Some(facilitator) => facilitator,
            None => {
                let native: Address = env.storage().instance().get(&DataKey::NativeToken).unwrap();
                if token == native {
                    // Native balance accrual carries no facilitator and is
                    // not a campaign deposit.
                    return;
                }
                panic_with_error!(&env, RewardsError::FacilitatorRequired);
            }
        };

        let reward_key = match reward_key {
            Some(key) => key,
            // Un-keyed deposits are not tracked as campaigns.
            None => return,
        };

        // Distribution multiplies the amount by whole-percent factors, so
        // anything above i128::MAX / 100 would trap there and wedge the
        // campaign.
        if amount <= 0 || amount > i128::MAX / 100 {
            panic_with_error!(&env, RewardsError::InvalidAmount);
        }
        if env
            .storage()
            .persistent()
            .has(&PersistentKey::Rewards(reward_key.clone()))
        {
            panic_with_error!(&env, RewardsError::RewardKeyExists);
        }

        facilitator.require_auth();
        let token_client = token::Client::new(&env, &token);
        token_client.transfer(&facilitator, &env.current_contract_address(), &amount);

        let rewards = RewardsInfo {
            facilitator: facilitator.clone(),
            token: token.clone(),
            amount,
            state: RewardState::Opened,
        };
        put_rewards(&env, &reward_key, &rewards);
        extend_instance(&env);

        events::emit_reward_stored(
            &env,
            RewardStoredEvent {
                reward_key,
                facilitator,
                token,
                amount,
            },
        );
    }

    /// Mark the eligible citizens for a campaign. Only possible while the
    /// campaign is still `Opened`; resubmission is idempotent.
    pub fn submit_citizens(env: Env, admin: Address, reward_key: String, citizens: Vec<Address>) {
        require_admin(&env, &admin);

        if citizens.is_empty() {
            panic_with_error!(&env, RewardsError::EmptyCitizenList);
        }

        let rewards = get_rewards(&env, &reward_key);
        if rewards.state != RewardState::Opened {
            panic_with_error!(&env, RewardsError::RewardsNotOpen);
        }

        for citizen in citizens.iter() {
            eligibility::mark_eligible(&env, &citizen, &reward_key);
        }
        extend_instance(&env);

        events::emit_citizen_submitted(&env, CitizenSubmittedEvent { reward_key });
    }

    /// Close the eligibility ledger: `Opened` -> `Locked`. Locking a
    /// campaign in any other state fails.
    pub fn lock_rewards(env: Env, admin: Address, reward_key: String) {
        require_admin(&env, &admin);

        let mut rewards = get_rewards(&env, &reward_key);
        if rewards.state != RewardState::Opened {
            panic_with_error!(&env, RewardsError::RewardsNotOpen);
        }

        rewards.state = RewardState::Locked;
        put_rewards(&env, &reward_key, &rewards);
        extend_instance(&env);

        events::emit_reward_locked(&env, RewardLockedEvent { reward_key });
    }

    /// Return the full original amount to the facilitator and close the
    /// campaign. Rejected once the campaign is refunded or distributed.
    pub fn refund(env: Env, admin: Address, reward_key: String) {
        require_admin(&env, &admin);

        let mut rewards = get_rewards(&env, &reward_key);
        match rewards.state {
            RewardState::Refunded => panic_with_error!(&env, RewardsError::AlreadyRefunded),
            RewardState::Distributed => panic_with_error!(&env, RewardsError::AlreadyDistributed),
            _ => {}
        }

        let token_client = token::Client::new(&env, &rewards.token);
        if token_client
            .try_transfer(
                &env.current_contract_address(),
                &rewards.facilitator,
                &rewards.amount,
            )
            .is_err()
        {
            panic_with_error!(&env, RewardsError::RefundFailed);
        }

        rewards.state = RewardState::Refunded;
        put_rewards(&env, &reward_key, &rewards);
        extend_instance(&env);

        events::emit_reward_refunded(
            &env,
            RewardRefundedEvent {
                reward_key,
                facilitator: rewards.facilitator,
                state: rewards.state,
            },
        );
    }

    /// Pay the two reward tiers out of the original deposit: a flat 10%
    /// bonus per eligible top-tier citizen and an even split of a 50% pool
    /// across the full-participation tier. Citizens without an eligibility
    /// marker are skipped, as is any citizen whose transfer fails; the
    /// campaign still advances to `Distributed` and the event payload
    /// records who was actually paid. The remainder stays in custody.
    pub fn distribute_rewards(
        env: Env,
        admin: Address,
        reward_key: String,
        top_citizens: Vec<Address>,
        full_participation: Vec<Address>,
    ) {
        require_admin(&env, &admin);

        let mut rewards = get_rewards(&env, &reward_key);
        match rewards.state {
            RewardState::Refunded => panic_with_error!(&env, RewardsError::AlreadyRefunded),
            RewardState::Distributed => panic_with_error!(&env, RewardsError::AlreadyDistributed),
            _ => {}
        }
        if full_participation.is_empty() {
            panic_with_error!(&env, RewardsError::EmptyCitizenList);
        }

        let token_client = token::Client::new(&env, &rewards.token);
        let custody = env.current_contract_address();
        let mut rewarded: Map<Address, i128> = Map::new(&env);

        let top_reward = rewards.amount * TOP_REWARD_PCT / 100;
        for citizen in top_citizens.iter() {
            if !eligibility::is_eligible(&env, &citizen, &reward_key) {
                continue;
            }
            // A failed transfer skips this citizen only; the rest of the
            // batch continues.
            if token_client
                .try_transfer(&custody, &citizen, &top_reward)
                .is_ok()
            {
                rewarded.set(citizen, top_reward);
            }
        }

        let pool = rewards.amount * PARTICIPATION_POOL_PCT / 100;
        let share = pool / full_participation.len() as i128;
        for citizen in full_participation.iter() {
            if !eligibility::is_eligible(&env, &citizen, &reward_key) {
                continue;
            }
            if token_client.try_transfer(&custody, &citizen, &share).is_ok() {
                rewarded.set(citizen, share);
            }
        }

        rewards.state = RewardState::Distributed;
        put_rewards(&env, &reward_key, &rewards);
        extend_instance(&env);

        events::emit_reward_distributed(
            &env,
            RewardDistributedEvent {
                reward_key,
                rewarded,
            },
        );
    }

    /// Admit an identity to the admin set. Owner only.
    pub fn add_admin(env: Env, admin: Address) {
        let owner = read_owner(&env);
        owner.require_auth();

        set_admin(&env, &admin);
        extend_instance(&env);

        events::emit_admin_added(&env, AdminAddedEvent { admin });
    }

    /// Remove an identity from the admin set. Owner only.
    pub fn remove_admin(env: Env, admin: Address) {
        let owner = read_owner(&env);
        owner.require_auth();

        env.storage()
            .persistent()
            .remove(&PersistentKey::Admin(admin.clone()));
        extend_instance(&env);

        events::emit_admin_removed(&env, AdminRemovedEvent { admin });
    }

    /// Replace the executable code in place. Owner only.
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) {
        let owner = read_owner(&env);
        owner.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    /// View functions
    pub fn owner(env: Env) -> Address {
        read_owner(&env)
    }

    pub fn is_admin(env: Env, admin: Address) -> bool {
        env.storage()
            .persistent()
            .has(&PersistentKey::Admin(admin))
    }

    pub fn get_rewards(env: Env, reward_key: String) -> RewardsInfo {
        get_rewards(&env, &reward_key)
    }
}

// Helper functions
fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn read_owner(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Owner).unwrap()
}

fn get_rewards(e: &Env, reward_key: &String) -> RewardsInfo {
    e.storage()
        .persistent()
        .get(&PersistentKey::Rewards(reward_key.clone()))
        .unwrap_or_else(|| panic_with_error!(e, RewardsError::RewardsNotFound))
}

fn put_rewards(e: &Env, reward_key: &String, rewards: &RewardsInfo) {
    let key = PersistentKey::Rewards(reward_key.clone());
    e.storage().persistent().set(&key, rewards);
    e.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn set_admin(e: &Env, admin: &Address) {
    let key = PersistentKey::Admin(admin.clone());
    e.storage().persistent().set(&key, admin);
    e.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn require_admin(e: &Env, admin: &Address) {
    admin.require_auth();
    if !e
        .storage()
        .persistent()
        .has(&PersistentKey::Admin(admin.clone()))
    {
        panic_with_error!(e, RewardsError::NotAuthorized);
    }
}
