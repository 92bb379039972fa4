use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymmetricError {
    #[error("random generation failed: {0}")]
    Random(#[from] rand::Error),

    #[error("invalid key size: expected {expected}, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    #[error("invalid IV size: expected {expected}, got {actual}")]
    InvalidIvSize { expected: usize, actual: usize },

    /// 密文长度不是分组的整数倍，或解密后的填充无效
    #[error("symmetric decryption failed")]
    Decryption,
}
