use soroban_sdk::contracterror;
use xcall_lib::LibError;
use xcall_rlp::RlpError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    Uninitialized = 2,

    // --- Authorization (3–5) ---
    OnlyAdmin = 3,
    ProtocolMismatch = 4,
    RollbackNotPossible = 5,

    // --- Not found (6–9) ---
    RequestNotFound = 6,
    RollbackNotFound = 7,
    MessageNotFound = 8,
    NoDefaultConnection = 9,

    // --- State transitions (10–13) ---
    RollbackNotEnabled = 10,
    InvalidState = 11,
    DataMismatch = 12,
    InvalidSequenceNo = 13,

    // --- Fees (14) ---
    InsufficientFee = 14,

    // --- Payload validation (15–21) ---
    InvalidNetworkAddress = 15,
    MaxDataSizeExceeded = 16,
    MaxRollbackSizeExceeded = 17,
    DecodeFailed = 18,
    InvalidMessageType = 19,
    InvalidResponseCode = 20,
    InvalidReply = 21,

    // --- Arithmetic (22) ---
    Overflow = 22,
}

impl From<RlpError> for ContractError {
    fn from(_: RlpError) -> Self {
        ContractError::DecodeFailed
    }
}

impl From<LibError> for ContractError {
    fn from(err: LibError) -> Self {
        match err {
            LibError::InvalidNetworkAddress => ContractError::InvalidNetworkAddress,
            LibError::InvalidMessageType => ContractError::InvalidMessageType,
            LibError::Rlp(_) => ContractError::DecodeFailed,
        }
    }
}
