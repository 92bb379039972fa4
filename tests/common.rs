//!
//! 集成测试的通用辅助函数
//!

use envelope_kit::{AsymmetricKeyPair, CryptoConfig, HybridCryptosystem};
use std::sync::OnceLock;

/// 生成一次、全程复用的 2048 位测试密钥对。
pub fn test_keypair() -> &'static AsymmetricKeyPair {
    static PAIR: OnceLock<AsymmetricKeyPair> = OnceLock::new();
    PAIR.get_or_init(|| AsymmetricKeyPair::generate(&CryptoConfig::default()).unwrap())
}

pub fn test_system() -> HybridCryptosystem {
    HybridCryptosystem::new(test_keypair().clone())
}

/// CBC + PKCS#7 下密文的期望长度
pub fn padded_len(plaintext_len: usize) -> usize {
    (plaintext_len / 16 + 1) * 16
}
