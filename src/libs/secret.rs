//! Encrypted single-value files.
//!
//! Values are encrypted with AES-256-CBC using the key and IV embedded at
//! build time, then base64 encoded. Used for the durable session slot, whose
//! payload contains the account password.

use aes::Aes256;
use anyhow::Result;
use base64::prelude::*;
use block_modes::block_padding::Pkcs7;
use block_modes::{BlockMode, Cbc};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

// Include generated metadata with encryption keys
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

type Aes256Cbc = Cbc<Aes256, Pkcs7>;

#[derive(Clone, Debug)]
pub struct Secret {
    secret_file_path: PathBuf,
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl Secret {
    pub fn new(secret_file_path: impl Into<PathBuf>) -> Self {
        Self {
            secret_file_path: secret_file_path.into(),
            key: APP_METADATA_ENCRYPTION_KEY.to_vec(),
            iv: APP_METADATA_ENCRYPTION_IV.to_vec(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.secret_file_path
    }

    pub fn exists(&self) -> bool {
        fs::metadata(&self.secret_file_path).is_ok()
    }

    pub fn write(&self, value: &str) -> Result<()> {
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let ciphertext = cipher.encrypt_vec(value.as_bytes());
        let encoded = BASE64_STANDARD.encode(&ciphertext);

        if let Some(parent) = self.secret_file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(&self.secret_file_path)?;
        file.write_all(encoded.as_bytes())?;

        Ok(())
    }

    pub fn read(&self) -> Result<String> {
        let mut file = File::open(&self.secret_file_path)?;
        let mut encoded = String::new();
        file.read_to_string(&mut encoded)?;
        let ciphertext = BASE64_STANDARD.decode(encoded.trim())?;
        let cipher = Aes256Cbc::new_from_slices(&self.key, &self.iv)?;
        let decrypted = cipher.decrypt_vec(&ciphertext)?;

        Ok(String::from_utf8(decrypted)?)
    }

    /// Removes the file. A missing file is not an error.
    pub fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.secret_file_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_value_is_not_plaintext() {
        let dir = tempfile::tempdir().unwrap();
        let secret = Secret::new(dir.path().join("slot"));
        secret.write("hunter22").unwrap();

        let raw = fs::read_to_string(secret.path()).unwrap();
        assert!(!raw.contains("hunter22"));
        assert_eq!(secret.read().unwrap(), "hunter22");
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let secret = Secret::new(dir.path().join("slot"));
        secret.remove().unwrap();
        secret.write("x").unwrap();
        assert!(secret.exists());
        secret.remove().unwrap();
        secret.remove().unwrap();
        assert!(!secret.exists());
    }

    #[test]
    fn corrupted_file_fails_to_read() {
        let dir = tempfile::tempdir().unwrap();
        let secret = Secret::new(dir.path().join("slot"));
        fs::write(secret.path(), "not base64 !!").unwrap();
        assert!(secret.read().is_err());
    }
}
