//!
//! # 通用配置模块
//!
//! 加密参数的集中定义。对称算法不存在进程级的可变默认值：
//! 算法标识总是作为显式参数传入 [`crate::symmetric::cipher::SymmetricCipher`]。
//!
use serde::{Deserialize, Serialize};

/// 对称算法标识
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymmetricAlgorithm {
    /// AES，128 位密钥，CBC 模式，PKCS#7 填充
    #[default]
    Aes128Cbc,
    /// AES，256 位密钥，CBC 模式，PKCS#7 填充
    Aes256Cbc,
}

impl SymmetricAlgorithm {
    /// 密钥长度（字节）
    pub const fn key_size(self) -> usize {
        match self {
            SymmetricAlgorithm::Aes128Cbc => 16,
            SymmetricAlgorithm::Aes256Cbc => 32,
        }
    }

    /// 分组长度（字节），同时也是 IV 的长度
    pub const fn block_size(self) -> usize {
        16
    }

    pub const fn name(self) -> &'static str {
        match self {
            SymmetricAlgorithm::Aes128Cbc => "aes-128-cbc",
            SymmetricAlgorithm::Aes256Cbc => "aes-256-cbc",
        }
    }
}

/// 加密配置
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CryptoConfig {
    /// RSA 密钥长度（位）
    #[serde(default = "default_rsa_key_bits")]
    pub rsa_key_bits: usize,
    /// 对称算法
    #[serde(default)]
    pub symmetric_algorithm: SymmetricAlgorithm,
}

fn default_rsa_key_bits() -> usize {
    2048
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            rsa_key_bits: 2048,
            symmetric_algorithm: SymmetricAlgorithm::Aes128Cbc,
        }
    }
}
