use soroban_sdk::{contracterror, contracttype, Address, BytesN, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    NativeToken,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Rewards(String),
    Admin(Address),
    Eligible(BytesN<32>),
}

// Campaign lifecycle
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub enum RewardState {
    Opened,
    Locked,
    Distributed,
    Refunded,
}

// One record per reward key. Facilitator, token and amount are fixed at
// deposit time; distribution always computes against the original amount.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct RewardsInfo {
    pub facilitator: Address,
    pub token: Address,
    pub amount: i128,
    pub state: RewardState,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum RewardsError {
    AlreadyInitialized = 1,
    NotAuthorized = 2,
    RewardsNotFound = 3,
    RewardKeyExists = 4,
    FacilitatorRequired = 5,
    InvalidAmount = 6,
    EmptyCitizenList = 7,
    RewardsNotOpen = 8,
    AlreadyRefunded = 9,
    AlreadyDistributed = 10,
    RefundFailed = 11,
}

// Constants
pub const TOP_REWARD_PCT: i128 = 10; // flat bonus per top-tier citizen
pub const PARTICIPATION_POOL_PCT: i128 = 50; // pool split across the full-participation tier
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
