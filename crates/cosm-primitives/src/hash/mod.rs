//! Hash function primitives for the cosm SDK.
//!
//! Provides SHA-256, SHA-512, Keccak-256, SHA3-256, RIPEMD-160, Hash160
//! and HMAC variants used by mnemonic encoding, HD derivation, address
//! generation and transaction signing.

use hmac::digest::core_api::BlockSizeUser;
use hmac::{Hmac, Mac, SimpleHmac};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};
use sha3::{Keccak256, Sha3_256};

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Compute SHA-512 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 64-byte SHA-512 digest.
pub fn sha512(data: &[u8]) -> [u8; 64] {
    let result = Sha512::digest(data);
    let mut output = [0u8; 64];
    output.copy_from_slice(&result);
    output
}

/// Compute the original Keccak-256 hash (pre-FIPS padding, as used by Ethereum).
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Compute the FIPS-202 SHA3-256 hash.
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    Sha3_256::digest(data).into()
}

/// Compute RIPEMD-160 hash of the input data.
///
/// # Returns
/// A 20-byte RIPEMD-160 digest.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(data).into()
}

/// Compute Hash160: RIPEMD-160(SHA-256(data)).
///
/// Used for account address generation from secp256k1 public keys.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Compute an HMAC tag over `data` with any block-based digest `D`.
///
/// # Arguments
/// * `key` - The HMAC key bytes. Any length is accepted.
/// * `data` - The message bytes to authenticate.
///
/// # Returns
/// The tag, `D::output_size()` bytes long.
pub fn hmac<D>(key: &[u8], data: &[u8]) -> Vec<u8>
where
    D: Digest + BlockSizeUser,
{
    let mut mac = <SimpleHmac<D> as Mac>::new_from_slice(key)
        .expect("HMAC accepts any key length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Compute HMAC-SHA256 of the input data with the given key.
///
/// # Returns
/// A 32-byte HMAC-SHA256 tag.
pub fn sha256_hmac(key: &[u8], data: &[u8]) -> [u8; 32] {
    type HmacSha256 = Hmac<Sha256>;
    let mut mac = HmacSha256::new_from_slice(key)
        .expect("HMAC accepts any key length");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Compute HMAC-SHA512 of the input data with the given key.
///
/// This is the PRF behind both BIP-39 seed stretching and SLIP-10 derivation.
///
/// # Returns
/// A 64-byte HMAC-SHA512 tag.
pub fn sha512_hmac(key: &[u8], data: &[u8]) -> [u8; 64] {
    type HmacSha512 = Hmac<Sha512>;
    let mut mac = HmacSha512::new_from_slice(key)
        .expect("HMAC accepts any key length");
    mac.update(data);
    let mut output = [0u8; 64];
    output.copy_from_slice(&mac.finalize().into_bytes());
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &[u8] = b"abc";

    // ---- SHA-2 ----

    #[test]
    fn test_sha256_empty_string() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_abc() {
        assert_eq!(
            hex::encode(sha256(ABC)),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha512_abc() {
        assert_eq!(
            hex::encode(sha512(ABC)),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    // ---- Keccak / SHA-3 ----

    #[test]
    fn test_keccak256_empty_string() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_sha3_256_differs_from_keccak() {
        assert_eq!(
            hex::encode(sha3_256(b"")),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
        assert_ne!(sha3_256(b""), keccak256(b""));
    }

    // ---- RIPEMD-160 ----

    #[test]
    fn test_ripemd160_empty_string() {
        assert_eq!(
            hex::encode(ripemd160(b"")),
            "9c1185a5c5e9fc54612808977ee8f548b2258d31"
        );
    }

    #[test]
    fn test_ripemd160_abc() {
        assert_eq!(
            hex::encode(ripemd160(ABC)),
            "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc"
        );
    }

    #[test]
    fn test_hash160_empty_string() {
        assert_eq!(
            hex::encode(hash160(b"")),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );
    }

    // ---- HMAC (RFC 4231) ----

    #[test]
    fn test_sha256_hmac_rfc4231_case_2() {
        let mac = sha256_hmac(b"Jefe", b"what do ya want for nothing?");
        assert_eq!(
            hex::encode(mac),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_sha512_hmac_rfc4231_case_1() {
        let key = hex::decode("0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b").unwrap();
        let mac = sha512_hmac(&key, b"Hi There");
        assert_eq!(
            hex::encode(mac),
            "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde\
             daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854"
        );
    }

    #[test]
    fn test_generic_hmac_matches_fixed_variants() {
        let key = b"key";
        let data = b"The quick brown fox jumps over the lazy dog";
        assert_eq!(hmac::<Sha256>(key, data), sha256_hmac(key, data).to_vec());
        assert_eq!(hmac::<Sha512>(key, data), sha512_hmac(key, data).to_vec());
        // Any block digest works, not only SHA-2.
        assert_eq!(hmac::<Keccak256>(key, data).len(), 32);
    }
}
