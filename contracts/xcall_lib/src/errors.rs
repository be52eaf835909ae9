use xcall_rlp::RlpError;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LibError {
    InvalidNetworkAddress,
    InvalidMessageType,
    Rlp(RlpError),
}

impl From<RlpError> for LibError {
    fn from(err: RlpError) -> Self {
        LibError::Rlp(err)
    }
}
