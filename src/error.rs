// Error types for composite signing and verification

use std::fmt;

/// Composite signature error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositeError {
    // Input validation errors
    /// Signing requested with zero messages
    EmptyMessageList,
    /// Proof requested for a leaf index outside the batch
    LeafIndexOutOfRange { index: usize, leaf_count: usize },
    /// Proof longer than the structural maximum
    ProofTooLong { len: usize, max: usize },

    // Encoding errors
    /// Typed-data encoder rejected a message's schema or payload
    MessageHash { message: String },
    /// Signature bytes are not a well-formed 65-byte `r || s || v` encoding
    MalformedSignature { message: String },

    // Cryptographic errors
    /// ECDSA signing failed (malformed key material)
    Signing { message: String },
}

impl fmt::Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessageList => {
                write!(f, "Empty message list: at least one message required")
            }
            Self::LeafIndexOutOfRange { index, leaf_count } => {
                write!(
                    f,
                    "Leaf index {} out of range for a batch of {} messages",
                    index, leaf_count
                )
            }
            Self::ProofTooLong { len, max } => {
                write!(f, "Proof has {} elements, maximum is {}", len, max)
            }
            Self::MessageHash { message } => {
                write!(f, "Typed data hashing error: {}", message)
            }
            Self::MalformedSignature { message } => {
                write!(f, "Malformed signature: {}", message)
            }
            Self::Signing { message } => {
                write!(f, "Signing error: {}", message)
            }
        }
    }
}

impl std::error::Error for CompositeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_list_error() {
        let error = CompositeError::EmptyMessageList;
        assert_eq!(
            error.to_string(),
            "Empty message list: at least one message required"
        );
    }

    #[test]
    fn test_leaf_index_out_of_range_error() {
        let error = CompositeError::LeafIndexOutOfRange {
            index: 7,
            leaf_count: 4,
        };
        assert_eq!(
            error.to_string(),
            "Leaf index 7 out of range for a batch of 4 messages"
        );
    }

    #[test]
    fn test_proof_too_long_error() {
        let error = CompositeError::ProofTooLong { len: 65, max: 64 };
        assert_eq!(error.to_string(), "Proof has 65 elements, maximum is 64");
    }

    #[test]
    fn test_message_hash_error() {
        let error = CompositeError::MessageHash {
            message: "unknown type Mail".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Typed data hashing error: unknown type Mail"
        );
    }

    #[test]
    fn test_malformed_signature_error() {
        let error = CompositeError::MalformedSignature {
            message: "expected 65 bytes, got 64".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed signature: expected 65 bytes, got 64"
        );
    }

    #[test]
    fn test_signing_error() {
        let error = CompositeError::Signing {
            message: "signature error".to_string(),
        };
        assert_eq!(error.to_string(), "Signing error: signature error");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            CompositeError::EmptyMessageList,
            CompositeError::EmptyMessageList
        );
        assert_eq!(
            CompositeError::ProofTooLong { len: 65, max: 64 },
            CompositeError::ProofTooLong { len: 65, max: 64 }
        );
        assert_ne!(
            CompositeError::EmptyMessageList,
            CompositeError::ProofTooLong { len: 65, max: 64 }
        );
    }

    #[test]
    fn test_error_context_data() {
        let error = CompositeError::LeafIndexOutOfRange {
            index: 3,
            leaf_count: 2,
        };
        match error {
            CompositeError::LeafIndexOutOfRange { index, leaf_count } => {
                assert_eq!(index, 3);
                assert_eq!(leaf_count, 2);
            }
            _ => panic!("Wrong error variant"),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let error: Box<dyn std::error::Error> = Box::new(CompositeError::EmptyMessageList);
        assert!(error.to_string().contains("Empty message list"));
    }
}
