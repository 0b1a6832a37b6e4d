//!
//! Secure password hashing for account credentials.
//!

use anyhow::{anyhow, ensure, Result};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;
use subtle::ConstantTimeEq;

/// Current version of the encoded password hash format.
pub const HASH_VERSION: u8 = 0x01;

/// Size of the salt in bytes.
pub const SALT_SIZE: usize = 16;

/// Size of the hash output in bytes.
pub const HASH_SIZE: usize = 32;

/// Total size of the encoded hash (version + salt + hash).
pub const ENCODED_SIZE: usize = 1 + SALT_SIZE + HASH_SIZE;

fn argon_params() -> Result<Params> {
    Params::new(19_456, 2, 1, Some(HASH_SIZE)).map_err(|e| anyhow!("invalid Argon2 params: {e}"))
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct EncodedPasswordHash {
    version: u8,
    salt: [u8; SALT_SIZE],
    hash: [u8; HASH_SIZE],
}

impl EncodedPasswordHash {
    fn encode(&self) -> String {
        let mut encoded = Vec::with_capacity(ENCODED_SIZE);
        encoded.push(self.version);
        encoded.extend_from_slice(&self.salt);
        encoded.extend_from_slice(&self.hash);
        hex::encode(encoded)
    }

    fn decode(encoded: &str) -> Result<Self> {
        let bytes = hex::decode(encoded)?;
        ensure!(
            bytes.len() == ENCODED_SIZE,
            "Invalid encoded hash length: expected {}, got {}",
            ENCODED_SIZE,
            bytes.len()
        );
        let version = bytes[0];
        ensure!(
            version == HASH_VERSION,
            "Unsupported hash version: {} (supported: {})",
            version,
            HASH_VERSION
        );

        let mut salt = [0u8; SALT_SIZE];
        salt.copy_from_slice(&bytes[1..1 + SALT_SIZE]);

        let mut hash = [0u8; HASH_SIZE];
        hash.copy_from_slice(&bytes[1 + SALT_SIZE..]);

        Ok(Self {
            version,
            salt,
            hash,
        })
    }
}

/// Hash a password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = generate_salt();
    let hash = argon2id_hash(password, &salt)?;

    Ok(EncodedPasswordHash {
        version: HASH_VERSION,
        salt,
        hash,
    }
    .encode())
}

/// Verify a password against an encoded hash in constant time.
pub fn verify_password(password: &str, encoded_hash: &str) -> Result<bool> {
    let decoded = EncodedPasswordHash::decode(encoded_hash)?;
    let computed = argon2id_hash(password, &decoded.salt)?;
    Ok(computed.ct_eq(&decoded.hash).into())
}

fn generate_salt() -> [u8; SALT_SIZE] {
    let mut salt = [0u8; SALT_SIZE];
    let mut rng = rand::rng();
    rng.fill_bytes(&mut salt);
    salt
}

fn argon2id_hash(password: &str, salt: &[u8; SALT_SIZE]) -> Result<[u8; HASH_SIZE]> {
    let mut output = [0u8; HASH_SIZE];
    let argon = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon_params()?);
    argon
        .hash_password_into(password.as_bytes(), salt, &mut output)
        .map_err(|e| anyhow!("Argon2id hashing failed: {e}"))?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_password_produces_expected_length() {
        let encoded = hash_password("correct horse").expect("hash password");
        assert_eq!(encoded.len(), ENCODED_SIZE * 2);
    }

    #[test]
    fn verify_accepts_matching_password() {
        let encoded = hash_password("correct horse").expect("hash password");
        assert!(verify_password("correct horse", &encoded).expect("verify"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let encoded = hash_password("correct horse").expect("hash password");
        assert!(!verify_password("battery staple", &encoded).expect("verify"));
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        let a = hash_password("correct horse").expect("hash");
        let b = hash_password("correct horse").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn tampered_encoding_is_rejected() {
        let encoded = hash_password("correct horse").expect("hash password");
        assert!(verify_password("correct horse", &encoded[..encoded.len() - 2]).is_err());
        assert!(verify_password("correct horse", "zz-not-hex").is_err());
    }
}
