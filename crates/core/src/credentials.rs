//! Player password hashing and verification.
//!
//! Stored credentials use a three-part dotted format:
//!
//! ```text
//! {iterations}.{base64(salt)}.{base64(derived_key)}
//! ```
//!
//! derived with PBKDF2-HMAC-SHA256. Any stored value that does not contain
//! exactly two `.` separators is a legacy plaintext password; it verifies by
//! exact comparison and should be re-hashed by the caller after a match.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// PBKDF2 rounds used for newly hashed passwords.
pub const HASH_ITERATIONS: u32 = 100_000;

/// Random salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Derived key length in bytes.
pub const KEY_LEN: usize = 32;

/// Upper bound on the iteration count accepted from a stored credential.
const MAX_ITERATIONS: u32 = 10_000_000;

const SEPARATOR: char = '.';

/// Well-formed credential with an all-zero key, hashed at the production
/// round count. No password derives to it.
const DUMMY_CREDENTIAL: &str =
    "100000.AAAAAAAAAAAAAAAAAAAAAA==.AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

/// The three decoded parts of a hashed credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCredential {
    pub iterations: u32,
    pub salt: Vec<u8>,
    pub key: Vec<u8>,
}

impl EncodedCredential {
    /// Render as `iterations.salt.key`.
    pub fn encode(&self) -> String {
        format!(
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.iterations,
            STANDARD.encode(&self.salt),
            STANDARD.encode(&self.key)
        )
    }

    /// Parse a stored credential. Returns `None` for anything malformed:
    /// wrong separator count, non-numeric or out-of-range iterations,
    /// invalid base64, or an empty key.
    pub fn parse(stored: &str) -> Option<Self> {
        let mut parts = stored.split(SEPARATOR);
        let (iterations, salt, key) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }

        let iterations: u32 = iterations.parse().ok()?;
        if iterations == 0 || iterations > MAX_ITERATIONS {
            return None;
        }
        let salt = STANDARD.decode(salt).ok()?;
        let key = STANDARD.decode(key).ok()?;
        if key.is_empty() {
            return None;
        }

        Some(Self {
            iterations,
            salt,
            key,
        })
    }
}

/// Whether `stored` has the hashed three-part shape (exactly two separators).
pub fn is_hashed_format(stored: &str) -> bool {
    !stored.trim().is_empty() && stored.matches(SEPARATOR).count() == 2
}

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(plaintext: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    hash_with_salt(plaintext, &salt, HASH_ITERATIONS)
}

/// Hash with explicit parameters. Exposed for tests and migrations.
pub fn hash_with_salt(plaintext: &str, salt: &[u8], iterations: u32) -> String {
    EncodedCredential {
        iterations,
        salt: salt.to_vec(),
        key: derive_key(plaintext, salt, iterations, KEY_LEN),
    }
    .encode()
}

/// Verify a login attempt against a stored credential.
///
/// Never errors: malformed stored values verify as `false`.
pub fn verify_password(stored: &str, attempt: &str) -> bool {
    if stored.is_empty() {
        return false;
    }

    if !is_hashed_format(stored) {
        return stored == attempt;
    }

    let Some(credential) = EncodedCredential::parse(stored) else {
        return false;
    };

    let actual = derive_key(
        attempt,
        &credential.salt,
        credential.iterations,
        credential.key.len(),
    );
    actual.ct_eq(&credential.key).into()
}

/// Run a full verification against a credential that never matches.
///
/// Login calls this when there is no stored credential to check, so an
/// unknown account costs the same key derivation as a wrong password.
pub fn verify_dummy(attempt: &str) {
    let _ = verify_password(DUMMY_CREDENTIAL, attempt);
}

fn derive_key(plaintext: &str, salt: &[u8], iterations: u32, len: usize) -> Vec<u8> {
    let mut key = vec![0u8; len];
    pbkdf2::pbkdf2_hmac::<Sha256>(plaintext.as_bytes(), salt, iterations, &mut key);
    key
}
