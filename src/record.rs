//! User record model and generation.

use crate::error::Result;
use crate::hash::HashAlgorithm;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;
use rand::RngCore;
use serde::Serialize;

/// Caller tag stamped on every generated user.
pub const CALLER_ID: &str = "Kaizen.Caller";

/// Role granted to every generated user.
pub const ROLE: &str = "company-support";

/// Salt length in characters (and random bytes drawn).
pub const SALT_LEN: usize = 8;

/// Password length in characters (and random bytes drawn).
pub const PASSWORD_LEN: usize = 16;

/// One generated user account.
///
/// Serialized field order is the declaration order below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    /// Source email line, unmodified.
    #[serde(rename = "UserName")]
    pub user_name: String,

    #[serde(rename = "PasswordSalt")]
    pub password_salt: String,

    /// Lowercase hex digest of `password_salt + password`.
    #[serde(rename = "PasswordHash")]
    pub password_hash: String,

    #[serde(rename = "CallerId")]
    pub caller_id: &'static str,

    #[serde(rename = "Role")]
    pub role: &'static str,

    /// Algorithm that produced `password_hash`.
    pub hash: HashAlgorithm,
}

/// Draws `size` random bytes, base64-encodes them and keeps the first `size`
/// characters.
///
/// Cutting the encoding down to `size` characters leaves roughly 6 bits of
/// entropy per character rather than 8 per drawn byte.
pub fn random_token<R: RngCore>(rng: &mut R, size: usize) -> Result<String> {
    let mut bytes = vec![0u8; size];
    rng.try_fill_bytes(&mut bytes)?;

    let mut token = STANDARD.encode(&bytes);
    token.truncate(size);
    Ok(token)
}

/// Generates user records for a single run.
///
/// The algorithm is fixed at construction, so every record produced by one
/// generator carries the same `hash` value.
pub struct UserGenerator<R> {
    hash: HashAlgorithm,
    rng: R,
}

impl<R: RngCore> UserGenerator<R> {
    pub fn new(hash: HashAlgorithm, rng: R) -> Self {
        UserGenerator { hash, rng }
    }

    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// Builds a record for `email` with a fresh salt and password.
    ///
    /// The password only lives long enough to be hashed.
    pub fn generate(&mut self, email: &str) -> Result<UserRecord> {
        let salt = random_token(&mut self.rng, SALT_LEN)?;
        let password = random_token(&mut self.rng, PASSWORD_LEN)?;
        let password_hash = self.hash.hex_digest(&format!("{}{}", salt, password));
        drop(password);

        debug!("Generated user {}", email);

        Ok(UserRecord {
            user_name: email.to_owned(),
            password_salt: salt,
            password_hash,
            caller_id: CALLER_ID,
            role: ROLE,
            hash: self.hash,
        })
    }

    /// Generates one record per email, in input order.
    pub fn generate_all<S: AsRef<str>>(&mut self, emails: &[S]) -> Result<Vec<UserRecord>> {
        emails
            .iter()
            .map(|email| self.generate(email.as_ref()))
            .collect()
    }
}
