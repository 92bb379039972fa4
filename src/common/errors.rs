use crate::asymmetric::errors::AsymmetricError;
use crate::symmetric::errors::SymmetricError;
use thiserror::Error;

/// 混合加密操作可能遇到的错误类型
#[derive(Error, Debug)]
pub enum Error {
    #[error("asymmetric cryptographic error")]
    Asymmetric(#[from] AsymmetricError),

    #[error("symmetric cryptographic error")]
    Symmetric(#[from] SymmetricError),

    /// 捆绑包长度不足以容纳两个非对称分组
    #[error("malformed bundle: {len} bytes, expected at least {min}")]
    MalformedBundle { len: usize, min: usize },

    #[error("decoding from Base64 failed: {0}")]
    Base64Decode(#[from] base64::DecodeError),
}
