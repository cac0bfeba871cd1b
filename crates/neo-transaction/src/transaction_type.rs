use std::fmt;

use crate::TransactionError;

/// The closed set of transaction kinds, keyed by the leading wire byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TransactionType {
    Miner = 0x00,
    Issue = 0x01,
    Claim = 0x02,
    Enrollment = 0x20,
    Register = 0x40,
    Contract = 0x80,
    State = 0x90,
    Publish = 0xd0,
    Invocation = 0xd1,
}

impl TransactionType {
    pub const ALL: [TransactionType; 9] = [
        TransactionType::Miner,
        TransactionType::Issue,
        TransactionType::Claim,
        TransactionType::Enrollment,
        TransactionType::Register,
        TransactionType::Contract,
        TransactionType::State,
        TransactionType::Publish,
        TransactionType::Invocation,
    ];

    pub fn to_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for TransactionType {
    type Error = TransactionError;

    fn try_from(b: u8) -> Result<Self, Self::Error> {
        TransactionType::ALL
            .into_iter()
            .find(|t| t.to_byte() == b)
            .ok_or(TransactionError::UnknownVariant(b))
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionType::Miner => "MinerTransaction",
            TransactionType::Issue => "IssueTransaction",
            TransactionType::Claim => "ClaimTransaction",
            TransactionType::Enrollment => "EnrollmentTransaction",
            TransactionType::Register => "RegisterTransaction",
            TransactionType::Contract => "ContractTransaction",
            TransactionType::State => "StateTransaction",
            TransactionType::Publish => "PublishTransaction",
            TransactionType::Invocation => "InvocationTransaction",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_roundtrip() {
        for t in TransactionType::ALL {
            assert_eq!(TransactionType::try_from(t.to_byte()).unwrap(), t);
        }
    }

    #[test]
    fn test_unknown_byte() {
        let known: Vec<u8> = TransactionType::ALL.iter().map(|t| t.to_byte()).collect();
        for b in 0u8..=0xff {
            if !known.contains(&b) {
                assert_eq!(
                    TransactionType::try_from(b).unwrap_err(),
                    TransactionError::UnknownVariant(b)
                );
            }
        }
    }
}
