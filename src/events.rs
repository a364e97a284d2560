use soroban_sdk::{contracttype, Address, Env, Map, String, Symbol};

use crate::storage_types::RewardState;

#[contracttype]
#[derive(Clone)]
pub struct RewardStoredEvent {
    pub reward_key: String,
    pub facilitator: Address,
    pub token: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct RewardLockedEvent {
    pub reward_key: String,
}

#[contracttype]
#[derive(Clone)]
pub struct CitizenSubmittedEvent {
    pub reward_key: String,
}

#[contracttype]
#[derive(Clone)]
pub struct RewardRefundedEvent {
    pub reward_key: String,
    pub facilitator: Address,
    pub state: RewardState,
}

#[contracttype]
#[derive(Clone)]
pub struct RewardDistributedEvent {
    pub reward_key: String,
    pub rewarded: Map<Address, i128>,
}

#[contracttype]
#[derive(Clone)]
pub struct AdminAddedEvent {
    pub admin: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct AdminRemovedEvent {
    pub admin: Address,
}

pub fn emit_reward_stored(env: &Env, event: RewardStoredEvent) {
    env.events().publish(
        (Symbol::new(env, "reward_stored"),),
        event,
    );
}

pub fn emit_reward_locked(env: &Env, event: RewardLockedEvent) {
    env.events().publish(
        (Symbol::new(env, "reward_locked"),),
        event,
    );
}

pub fn emit_citizen_submitted(env: &Env, event: CitizenSubmittedEvent) {
    env.events().publish(
        (Symbol::new(env, "citizen_submitted"),),
        event,
    );
}

pub fn emit_reward_refunded(env: &Env, event: RewardRefundedEvent) {
    env.events().publish(
        (Symbol::new(env, "reward_refunded"),),
        event,
    );
}

pub fn emit_reward_distributed(env: &Env, event: RewardDistributedEvent) {
    env.events().publish(
        (Symbol::new(env, "reward_distributed"),),
        event,
    );
}

pub fn emit_admin_added(env: &Env, event: AdminAddedEvent) {
    env.events().publish(
        (Symbol::new(env, "admin_added"),),
        event,
    );
}

pub fn emit_admin_removed(env: &Env, event: AdminRemovedEvent) {
    env.events().publish(
        (Symbol::new(env, "admin_removed"),),
        event,
    );
}
