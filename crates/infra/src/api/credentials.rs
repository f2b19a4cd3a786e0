//! Credential hashing for the carrier's authentication scheme

use sha2::{Digest, Sha512};

/// Hash the account password the way the carrier expects it: a single
/// unsalted SHA-512 pass.
///
/// The digest bytes go into every request body; the plaintext never leaves
/// the process. This is a per-request wire transformation, not a password
/// storage scheme.
pub fn sha512_digest(password: &str) -> [u8; 64] {
    let mut hasher = Sha512::new();
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_always_64_bytes() {
        for password in ["", "a", "hunter2", &"x".repeat(10_000)] {
            assert_eq!(sha512_digest(password).len(), 64);
        }
    }

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(sha512_digest("secret"), sha512_digest("secret"));
        assert_ne!(sha512_digest("secret"), sha512_digest("Secret"));
    }

    #[test]
    fn digest_matches_known_vector() {
        // SHA-512 of the empty string.
        assert_eq!(
            hex::encode(sha512_digest("")),
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
             47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        );
    }
}
