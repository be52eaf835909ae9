use soroban_sdk::contracttype;

/// Fees charged for delivering to one network, in the native token.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NetworkFee {
    pub message_fee: u128,
    /// Added when the destination is expected to answer.
    pub response_fee: u128,
}
