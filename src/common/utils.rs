use crate::common::errors::Error;
use base64::{Engine, engine::general_purpose};
use std::ops::Deref;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// 自动清零的字节向量，用于对称密钥等敏感数据
#[derive(Debug, Clone, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct ZeroizingVec(pub Vec<u8>);

impl Deref for ZeroizingVec {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for ZeroizingVec {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ZeroizingVec {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// 将字节序列编码为 Base64 文本。
///
/// 捆绑包本身是原始字节；文本传输编码是核心之外的分层关注点。
pub fn to_base64(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

/// 从 Base64 文本解码字节序列
pub fn from_base64(text: &str) -> Result<Vec<u8>, Error> {
    Ok(general_purpose::STANDARD.decode(text.trim())?)
}
