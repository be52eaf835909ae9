use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    Uninitialized = 2,

    // --- Authorization (3) ---
    OnlyAdmin = 3,

    // --- Delivery (4) ---
    DuplicateMessage = 4,

    // --- Arithmetic (5) ---
    Overflow = 5,
}
