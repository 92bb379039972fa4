//! 混合加密的捆绑协议。
//!
//! 每次加密生成一次性的对称密钥与 IV，用非对称密钥的指定半边封装，
//! 再与对称密文拼接为单个不透明的字节捆绑包：
//!
//! ```text
//! [封装 IV，N 字节][封装密钥，N 字节][对称密文，剩余字节]
//! ```
//!
//! 其中 `N` 是非对称密钥的分组长度（模数字节数）。解密端用同一个 `N`
//! 切分捆绑包，以相反的密钥半边解封后还原明文。两个方向：
//! 公钥加密/私钥解密提供保密性，私钥加密/公钥解密提供来源绑定。

use crate::asymmetric::errors::KeyRole;
use crate::asymmetric::keypair::AsymmetricKeyPair;
use crate::common::config::CryptoConfig;
use crate::common::errors::Error;
use crate::common::utils::ZeroizingVec;
use crate::symmetric::cipher::SymmetricCipher;

/// 混合加密系统：一个 RSA 密钥对加一个对称加密器。
///
/// 所有操作只要求共享借用；构造后不改动密钥即可在线程间并发使用。
#[derive(Clone, Debug)]
pub struct HybridCryptosystem {
    asymmetric: AsymmetricKeyPair,
    symmetric: SymmetricCipher,
}

impl HybridCryptosystem {
    /// 使用默认对称算法（AES-128-CBC）构造。
    pub fn new(asymmetric: AsymmetricKeyPair) -> Self {
        Self::with_cipher(asymmetric, SymmetricCipher::default())
    }

    pub fn with_cipher(asymmetric: AsymmetricKeyPair, symmetric: SymmetricCipher) -> Self {
        Self {
            asymmetric,
            symmetric,
        }
    }

    pub fn with_config(asymmetric: AsymmetricKeyPair, config: &CryptoConfig) -> Self {
        Self::with_cipher(asymmetric, SymmetricCipher::new(config.symmetric_algorithm))
    }

    pub fn asymmetric(&self) -> &AsymmetricKeyPair {
        &self.asymmetric
    }

    pub fn symmetric(&self) -> &SymmetricCipher {
        &self.symmetric
    }

    /// 用公钥封装一次性密钥材料并加密 `plaintext`，返回捆绑包。
    ///
    /// 对应的解密操作是 [`Self::decrypt_with_private_key`]。
    pub fn encrypt_with_public_key(&self, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
        self.seal(plaintext, KeyRole::Public)
    }

    /// 用私钥封装一次性密钥材料并加密 `plaintext`，返回捆绑包。
    ///
    /// 任何持有公钥的一方都能解开，但只有私钥持有者能够生成。
    pub fn encrypt_with_private_key(&self, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
        self.seal(plaintext, KeyRole::Private)
    }

    /// 解开 [`Self::encrypt_with_public_key`] 生成的捆绑包。
    pub fn decrypt_with_private_key(&self, bundle: &[u8]) -> Result<Vec<u8>, Error> {
        self.open(bundle, KeyRole::Private)
    }

    /// 解开 [`Self::encrypt_with_private_key`] 生成的捆绑包。
    pub fn decrypt_with_public_key(&self, bundle: &[u8]) -> Result<Vec<u8>, Error> {
        self.open(bundle, KeyRole::Public)
    }

    fn seal(&self, plaintext: &[u8], role: KeyRole) -> Result<Vec<u8>, Error> {
        let key = self.symmetric.random_key()?;
        let iv = self.symmetric.random_iv()?;

        let (wrapped_iv, wrapped_key) = match role {
            KeyRole::Public => (
                self.asymmetric.encrypt_with_public_key(&iv)?,
                self.asymmetric.encrypt_with_public_key(&key)?,
            ),
            _ => (
                self.asymmetric.encrypt_with_private_key(&iv)?,
                self.asymmetric.encrypt_with_private_key(&key)?,
            ),
        };
        let ciphertext = self.symmetric.encrypt(plaintext, &key, &iv)?;

        let mut bundle =
            Vec::with_capacity(wrapped_iv.len() + wrapped_key.len() + ciphertext.len());
        bundle.extend_from_slice(&wrapped_iv);
        bundle.extend_from_slice(&wrapped_key);
        bundle.extend_from_slice(&ciphertext);
        Ok(bundle)
    }

    fn open(&self, bundle: &[u8], role: KeyRole) -> Result<Vec<u8>, Error> {
        // 分段宽度由当前装载的密钥决定，解码前现查
        let block_size = self.asymmetric.block_size_bytes()?;
        let min = 2 * block_size;
        if bundle.len() < min {
            return Err(Error::MalformedBundle {
                len: bundle.len(),
                min,
            });
        }

        let (wrapped_iv, rest) = bundle.split_at(block_size);
        let (wrapped_key, ciphertext) = rest.split_at(block_size);

        let (iv, key) = match role {
            KeyRole::Public => (
                self.asymmetric.decrypt_with_public_key(wrapped_iv)?,
                ZeroizingVec(self.asymmetric.decrypt_with_public_key(wrapped_key)?),
            ),
            _ => (
                self.asymmetric.decrypt_with_private_key(wrapped_iv)?,
                ZeroizingVec(self.asymmetric.decrypt_with_private_key(wrapped_key)?),
            ),
        };

        Ok(self.symmetric.decrypt(ciphertext, &key, &iv)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asymmetric::errors::AsymmetricError;
    use crate::symmetric::errors::SymmetricError;
    use std::sync::OnceLock;

    fn test_system() -> &'static HybridCryptosystem {
        static SYSTEM: OnceLock<HybridCryptosystem> = OnceLock::new();
        SYSTEM.get_or_init(|| {
            let pair = AsymmetricKeyPair::generate(&CryptoConfig::default()).unwrap();
            HybridCryptosystem::new(pair)
        })
    }

    #[test]
    fn test_bundle_layout() {
        let system = test_system();
        let plaintext = b"abcdefghijklmnopqrstuvwxyz";

        let bundle = system.encrypt_with_public_key(plaintext).unwrap();
        // 26 字节在 16 字节分组下填充为 32 字节密文
        assert_eq!(bundle.len(), 2 * 256 + 32);
    }

    #[test]
    fn test_public_path_roundtrip() {
        let system = test_system();
        let plaintext = b"hybrid public path";

        let bundle = system.encrypt_with_public_key(plaintext).unwrap();
        assert_eq!(system.decrypt_with_private_key(&bundle).unwrap(), plaintext);
    }

    #[test]
    fn test_private_path_roundtrip() {
        let system = test_system();
        let plaintext = b"hybrid private path";

        let bundle = system.encrypt_with_private_key(plaintext).unwrap();
        assert_eq!(system.decrypt_with_public_key(&bundle).unwrap(), plaintext);
    }

    #[test]
    fn test_same_role_rejected() {
        let system = test_system();
        let bundle = system.encrypt_with_public_key(b"mismatch").unwrap();

        assert!(matches!(
            system.decrypt_with_public_key(&bundle),
            Err(Error::Asymmetric(AsymmetricError::Decryption))
        ));
    }

    #[test]
    fn test_short_bundle_rejected() {
        let system = test_system();

        let result = system.decrypt_with_private_key(&[0u8; 511]);
        assert!(matches!(
            result,
            Err(Error::MalformedBundle { len: 511, min: 512 })
        ));
    }

    #[test]
    fn test_exact_two_blocks_fails_cleanly() {
        let system = test_system();
        // 合法封装段加空密文段：对称层没有可解的分组，干净地失败
        let mut bundle = system.encrypt_with_public_key(b"x").unwrap();
        bundle.truncate(512);

        assert!(matches!(
            system.decrypt_with_private_key(&bundle),
            Err(Error::Symmetric(SymmetricError::Decryption))
        ));
    }

    #[test]
    fn test_missing_key_half_surfaces() {
        let mut pair = test_system().asymmetric().clone();
        pair.set_private_key(None).unwrap();
        let system = HybridCryptosystem::new(pair);

        let bundle = system.encrypt_with_public_key(b"no private half").unwrap();
        assert!(matches!(
            system.decrypt_with_private_key(&bundle),
            Err(Error::Asymmetric(AsymmetricError::NoKeyLoaded(_)))
        ));
    }

    #[test]
    fn test_with_config_selects_cipher() {
        let config = CryptoConfig {
            symmetric_algorithm: crate::common::config::SymmetricAlgorithm::Aes256Cbc,
            ..Default::default()
        };
        let system =
            HybridCryptosystem::with_config(test_system().asymmetric().clone(), &config);

        let bundle = system.encrypt_with_private_key(b"aes-256 payload").unwrap();
        assert_eq!(
            system.decrypt_with_public_key(&bundle).unwrap(),
            b"aes-256 payload"
        );
    }
}
