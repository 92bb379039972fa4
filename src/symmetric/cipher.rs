//! AES-CBC 对称加密实现
//!
//! 为单一算法标识生成临时密钥材料并执行分组加解密。
//! 密钥与 IV 总是由调用方显式传入，本模块不持有任何密钥状态。

use crate::common::config::SymmetricAlgorithm;
use crate::common::utils::ZeroizingVec;
use crate::symmetric::errors::SymmetricError;
use aes::{Aes128, Aes256};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, Iv, Key, KeyIvInit};
use rand::RngCore;
use rand::rngs::OsRng;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// CBC 模式的对称加密器
#[derive(Clone, Copy, Debug, Default)]
pub struct SymmetricCipher {
    algorithm: SymmetricAlgorithm,
}

impl SymmetricCipher {
    pub fn new(algorithm: SymmetricAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> SymmetricAlgorithm {
        self.algorithm
    }

    /// 生成一个随机密钥，长度由算法决定。
    ///
    /// 使用操作系统的 CSPRNG，可在多线程下并发调用。
    pub fn random_key(&self) -> Result<ZeroizingVec, SymmetricError> {
        let mut key = vec![0u8; self.algorithm.key_size()];
        OsRng.try_fill_bytes(&mut key)?;
        Ok(ZeroizingVec(key))
    }

    /// 生成一个随机 IV，长度等于算法的分组长度。
    pub fn random_iv(&self) -> Result<Vec<u8>, SymmetricError> {
        let mut iv = vec![0u8; self.algorithm.block_size()];
        OsRng.try_fill_bytes(&mut iv)?;
        Ok(iv)
    }

    /// 使用给定密钥和 IV 加密任意长度的数据。
    ///
    /// 输出长度遵循 PKCS#7 填充规则：`(len / 16 + 1) * 16`。
    pub fn encrypt(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, SymmetricError> {
        self.check_params(key, iv)?;
        let ciphertext = match self.algorithm {
            SymmetricAlgorithm::Aes128Cbc => Aes128CbcEnc::new(
                Key::<Aes128CbcEnc>::from_slice(key),
                Iv::<Aes128CbcEnc>::from_slice(iv),
            )
            .encrypt_padded_vec_mut::<Pkcs7>(data),
            SymmetricAlgorithm::Aes256Cbc => Aes256CbcEnc::new(
                Key::<Aes256CbcEnc>::from_slice(key),
                Iv::<Aes256CbcEnc>::from_slice(iv),
            )
            .encrypt_padded_vec_mut::<Pkcs7>(data),
        };
        Ok(ciphertext)
    }

    /// 使用给定密钥和 IV 解密数据。
    pub fn decrypt(&self, data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, SymmetricError> {
        self.check_params(key, iv)?;
        if data.is_empty() || data.len() % self.algorithm.block_size() != 0 {
            return Err(SymmetricError::Decryption);
        }
        match self.algorithm {
            SymmetricAlgorithm::Aes128Cbc => Aes128CbcDec::new(
                Key::<Aes128CbcDec>::from_slice(key),
                Iv::<Aes128CbcDec>::from_slice(iv),
            )
            .decrypt_padded_vec_mut::<Pkcs7>(data),
            SymmetricAlgorithm::Aes256Cbc => Aes256CbcDec::new(
                Key::<Aes256CbcDec>::from_slice(key),
                Iv::<Aes256CbcDec>::from_slice(iv),
            )
            .decrypt_padded_vec_mut::<Pkcs7>(data),
        }
        .map_err(|_| SymmetricError::Decryption)
    }

    fn check_params(&self, key: &[u8], iv: &[u8]) -> Result<(), SymmetricError> {
        let key_size = self.algorithm.key_size();
        if key.len() != key_size {
            return Err(SymmetricError::InvalidKeySize {
                expected: key_size,
                actual: key.len(),
            });
        }
        let block_size = self.algorithm.block_size();
        if iv.len() != block_size {
            return Err(SymmetricError::InvalidIvSize {
                expected: block_size,
                actual: iv.len(),
            });
        }
        Ok(())
    }
}
