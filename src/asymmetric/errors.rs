use std::fmt;
use thiserror::Error;

/// 一次操作所需要的密钥半边
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Public,
    Private,
    Either,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::Public => f.write_str("public"),
            KeyRole::Private => f.write_str("private"),
            KeyRole::Either => f.write_str("public or private"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AsymmetricError {
    #[error("key material could not be parsed: {0}")]
    KeyParse(String),

    #[error("private key passphrase is missing or incorrect: {0}")]
    KeyDecrypt(String),

    #[error("no {0} key loaded")]
    NoKeyLoaded(KeyRole),

    #[error("plaintext of {len} bytes exceeds the {capacity} byte capacity of this key")]
    PlaintextTooLarge { len: usize, capacity: usize },

    /// 填充校验失败、密钥不匹配或输入损坏。与底层原语一致，不区分具体原因。
    #[error("asymmetric decryption failed")]
    Decryption,

    #[error("RSA key error: {0}")]
    Key(String),
}
