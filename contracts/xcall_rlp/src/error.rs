#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RlpError {
    // --- Framing ---
    InputTooShort,
    TrailingBytes,
    ExpectedBytes,
    ExpectedList,
    UnexpectedItemCount,

    // --- Canonical form ---
    NonCanonicalSingleByte,
    NonCanonicalSize,
    LeadingZeroLength,
    NonCanonicalInteger,

    // --- Value ---
    Overflow,
    InvalidString,
}
