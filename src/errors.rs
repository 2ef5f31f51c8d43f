// Revert messages. Shared with the scenario tests, keep them stable.

pub const ERR_PROPOSAL_ALREADY_ACTIVE: &str = "Proposal is already active";
pub const ERR_PROPOSAL_ID_USED: &str = "Proposal id already used";
pub const ERR_TOO_MANY_PROPOSALS: &str = "Too many active proposals";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_PROPOSAL_NOT_ACTIVE: &str = "Proposal is not active";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_INSUFFICIENT_WEIGHT: &str = "Insufficient voting weight";
pub const ERR_ZERO_WEIGHT: &str = "Vote weight must be positive";

pub const ERR_ZERO_EXPIRY_WINDOW: &str = "Expiry window must be positive";
pub const ERR_ZERO_MAX_ACTIVE: &str = "Max active proposals must be positive";
