//! Encoding errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Variable length quantity is too long (more than {0} groups)")]
    VarIntOverflow(usize),

    #[error("Variable length quantity is truncated")]
    VarIntTruncated,

    #[error("Invalid key: Prefix {0} not supported")]
    UnsupportedCodec(u32),

    #[error("Invalid key: No transform part in multibase encoding")]
    EmptyMultibase,

    #[error("Invalid key: Prefix {0} not supported")]
    InvalidMultibasePrefix(char),

    #[error("Invalid key: Invalid base58 encoding: {0}")]
    InvalidBase58(String),
}
