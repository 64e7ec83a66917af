//! BIP-39 mnemonic generation and seed derivation.
//!
//! Converts between raw entropy and English mnemonic sentences with
//! SHA-256 checksum validation, and stretches a mnemonic plus optional
//! passphrase into a 64-byte seed with PBKDF2-HMAC-SHA512.
//!
//! Only the word list itself comes from the `bip39` crate; the bit packing,
//! checksum handling and seed stretching live here.

use std::fmt;

use ::bip39::Language;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::hash::sha256;
use crate::PrimitivesError;

/// Number of bits encoded by a single mnemonic word.
const BITS_PER_WORD: usize = 11;

/// PBKDF2 iteration count mandated by BIP-39.
const PBKDF2_ROUNDS: u32 = 2048;

/// Length of a derived seed in bytes.
pub const SEED_LEN: usize = 64;

/// The 2048-word English list. Index ↔ word is the only interface used.
pub fn wordlist() -> &'static [&'static str; 2048] {
    Language::English.word_list()
}

/// Look up a word's 11-bit index. The English list is sorted, so a binary
/// search is exact.
fn word_index(word: &str) -> Option<u16> {
    wordlist().binary_search(&word).ok().map(|i| i as u16)
}

/// Supported mnemonic lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    /// Number of entropy bytes backing a mnemonic of this length.
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    fn from_words(count: usize) -> Option<Self> {
        match count {
            12 => Some(WordCount::Twelve),
            15 => Some(WordCount::Fifteen),
            18 => Some(WordCount::Eighteen),
            21 => Some(WordCount::TwentyOne),
            24 => Some(WordCount::TwentyFour),
            _ => None,
        }
    }
}

/// A checksum-validated BIP-39 mnemonic sentence.
///
/// Every `Mnemonic` value has passed word-list and checksum validation, so
/// [`mnemonic_to_entropy`] on it cannot fail. The phrase is zeroized on drop
/// and never shown by `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    /// Normalized phrase: lowercase words separated by single spaces.
    phrase: String,
}

impl Mnemonic {
    /// Generate a fresh mnemonic from OS randomness.
    pub fn generate(word_count: WordCount) -> Self {
        let mut entropy = Zeroizing::new([0u8; 32]);
        let len = word_count.entropy_bytes();
        OsRng.fill_bytes(&mut entropy[..len]);
        Mnemonic {
            phrase: encode_words(&entropy[..len]),
        }
    }

    /// Parse and validate a mnemonic sentence.
    ///
    /// Whitespace is collapsed and words are lowercased before validation.
    ///
    /// # Returns
    /// `Ok(Mnemonic)` if the word count, every word and the checksum are valid.
    pub fn from_phrase(phrase: &str) -> Result<Self, PrimitivesError> {
        let normalized = phrase
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ");
        let mnemonic = Mnemonic { phrase: normalized };
        // Validation is the decode itself; the entropy is discarded.
        decode_entropy(&mnemonic.phrase)?;
        Ok(mnemonic)
    }

    /// Encode raw entropy as a mnemonic. Equivalent to [`entropy_to_mnemonic`].
    pub fn from_entropy(entropy: &[u8]) -> Result<Self, PrimitivesError> {
        entropy_to_mnemonic(entropy)
    }

    /// The normalized sentence. Handle with care: this is the wallet secret.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The individual words in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phrase.split(' ')
    }

    /// Number of words in the sentence.
    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// Recover the entropy. Equivalent to [`mnemonic_to_entropy`].
    pub fn to_entropy(&self) -> Result<Vec<u8>, PrimitivesError> {
        mnemonic_to_entropy(self)
    }

    /// Derive the 64-byte seed. Equivalent to [`mnemonic_to_seed`].
    pub fn to_seed(&self, passphrase: Option<&str>) -> Seed {
        mnemonic_to_seed(self, passphrase)
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

/// A 64-byte BIP-39 seed. Opaque input to HD derivation; zeroized on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Wrap raw seed bytes, e.g. a seed produced by another wallet.
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Seed(bytes)
    }

    /// Access the raw seed bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

/// Convert entropy to a mnemonic sentence.
///
/// The entropy is followed by the first `len_bits / 32` bits of its SHA-256
/// digest and the result is split into 11-bit word indices.
///
/// # Arguments
/// * `entropy` - 16, 20, 24, 28 or 32 bytes.
///
/// # Returns
/// The mnemonic, or `InvalidEntropyLength` for any other size.
pub fn entropy_to_mnemonic(entropy: &[u8]) -> Result<Mnemonic, PrimitivesError> {
    let bits = entropy.len() * 8;
    if !matches!(bits, 128 | 160 | 192 | 224 | 256) {
        return Err(PrimitivesError::InvalidEntropyLength(bits));
    }
    Ok(Mnemonic {
        phrase: encode_words(entropy),
    })
}

/// Convert a mnemonic back to its entropy, re-checking the checksum.
///
/// # Returns
/// The entropy bytes, `UnknownWord` if a word is not in the list, or
/// `ChecksumMismatch` if the encoded checksum disagrees with SHA-256 of the
/// recovered entropy.
pub fn mnemonic_to_entropy(mnemonic: &Mnemonic) -> Result<Vec<u8>, PrimitivesError> {
    decode_entropy(&mnemonic.phrase)
}

/// Stretch a mnemonic and optional passphrase into a 64-byte seed.
///
/// PBKDF2-HMAC-SHA512, 2048 rounds, password = sentence,
/// salt = `"mnemonic" || passphrase`. The passphrase is used byte-for-byte.
pub fn mnemonic_to_seed(mnemonic: &Mnemonic, passphrase: Option<&str>) -> Seed {
    let salt = Zeroizing::new(format!("mnemonic{}", passphrase.unwrap_or("")));
    let mut seed = [0u8; SEED_LEN];
    pbkdf2::pbkdf2_hmac::<Sha512>(
        mnemonic.phrase.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut seed,
    );
    Seed(seed)
}

/// Read bit `pos` (MSB-first) from a byte slice.
fn bit_at(bytes: &[u8], pos: usize) -> bool {
    (bytes[pos / 8] >> (7 - pos % 8)) & 1 == 1
}

/// Pack entropy plus checksum into words. Caller guarantees a valid length.
fn encode_words(entropy: &[u8]) -> String {
    let entropy_bits = entropy.len() * 8;
    let total_bits = entropy_bits + entropy_bits / 32;
    let checksum = sha256(entropy);
    let list = wordlist();

    let mut words = Vec::with_capacity(total_bits / BITS_PER_WORD);
    for w in 0..total_bits / BITS_PER_WORD {
        let mut index = 0usize;
        for b in 0..BITS_PER_WORD {
            let pos = w * BITS_PER_WORD + b;
            let bit = if pos < entropy_bits {
                bit_at(entropy, pos)
            } else {
                bit_at(&checksum, pos - entropy_bits)
            };
            index = (index << 1) | bit as usize;
        }
        words.push(list[index]);
    }
    words.join(" ")
}

fn decode_entropy(phrase: &str) -> Result<Vec<u8>, PrimitivesError> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let count = WordCount::from_words(words.len())
        .ok_or(PrimitivesError::InvalidWordCount(words.len()))?;

    let total_bits = words.len() * BITS_PER_WORD;
    let mut packed = Zeroizing::new(vec![0u8; total_bits.div_ceil(8)]);
    for (w, word) in words.iter().enumerate() {
        let index = word_index(word).ok_or_else(|| PrimitivesError::UnknownWord(word.to_string()))?;
        for b in 0..BITS_PER_WORD {
            if (index >> (BITS_PER_WORD - 1 - b)) & 1 == 1 {
                let pos = w * BITS_PER_WORD + b;
                packed[pos / 8] |= 1 << (7 - pos % 8);
            }
        }
    }

    let entropy_len = count.entropy_bytes();
    let entropy = packed[..entropy_len].to_vec();
    let checksum = sha256(&entropy);
    let checksum_bits = entropy_len * 8 / 32;
    let entropy_bits = entropy_len * 8;
    for i in 0..checksum_bits {
        if bit_at(&packed, entropy_bits + i) != bit_at(&checksum, i) {
            return Err(PrimitivesError::ChecksumMismatch);
        }
    }
    Ok(entropy)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABANDON_ABOUT: &str = "abandon abandon abandon abandon abandon abandon \
                                 abandon abandon abandon abandon abandon about";

    /// (entropy hex, mnemonic) pairs from the reference BIP-39 vectors.
    const VECTORS: &[(&str, &str)] = &[
        ("00000000000000000000000000000000", ABANDON_ABOUT),
        (
            "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
            "legal winner thank year wave sausage worth useful legal winner thank yellow",
        ),
        (
            "80808080808080808080808080808080",
            "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
        ),
        (
            "ffffffffffffffffffffffffffffffff",
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
        ),
        (
            "0000000000000000000000000000000000000000000000000000000000000000",
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon \
             abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon \
             abandon abandon abandon art",
        ),
        (
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo \
             zoo zoo zoo vote",
        ),
    ];

    #[test]
    fn test_wordlist_shape() {
        let list = wordlist();
        assert_eq!(list.len(), 2048);
        assert_eq!(list[0], "abandon");
        assert_eq!(list[2047], "zoo");
        assert_eq!(word_index("about"), Some(3));
        assert_eq!(word_index("notaword"), None);
    }

    #[test]
    fn test_reference_vectors() {
        for (entropy_hex, phrase) in VECTORS {
            let entropy = hex::decode(entropy_hex).unwrap();
            let phrase = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
            let m = entropy_to_mnemonic(&entropy).unwrap();
            assert_eq!(m.phrase(), phrase);
            assert_eq!(mnemonic_to_entropy(&m).unwrap(), entropy);
        }
    }

    #[test]
    fn test_roundtrip_all_lengths() {
        for len in [16usize, 20, 24, 28, 32] {
            let entropy: Vec<u8> = (0..len as u8).map(|b| b.wrapping_mul(37)).collect();
            let m = entropy_to_mnemonic(&entropy).unwrap();
            assert_eq!(m.word_count(), (len * 8 + len / 4) / 11);
            assert_eq!(m.to_entropy().unwrap(), entropy);
        }
    }

    #[test]
    fn test_invalid_entropy_length() {
        for len in [0usize, 15, 17, 33, 64] {
            match entropy_to_mnemonic(&vec![0u8; len]) {
                Err(PrimitivesError::InvalidEntropyLength(bits)) => assert_eq!(bits, len * 8),
                other => panic!("expected InvalidEntropyLength, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_checksum_mismatch() {
        // Twelve "abandon" is all-zero entropy with an all-zero checksum;
        // the real checksum for zero entropy is 0b0011.
        let phrase = ["abandon"; 12].join(" ");
        assert!(matches!(
            Mnemonic::from_phrase(&phrase),
            Err(PrimitivesError::ChecksumMismatch)
        ));
    }

    #[test]
    fn test_flipping_each_checksum_bit_is_detected() {
        let m = entropy_to_mnemonic(&[0x5a; 16]).unwrap();
        let mut words: Vec<&str> = m.words().collect();
        let last = word_index(words[11]).unwrap();
        // The last four bits of a 12-word sentence are checksum.
        for bit in 0..4 {
            words[11] = wordlist()[(last ^ (1 << bit)) as usize];
            let tampered = words.join(" ");
            assert!(matches!(
                Mnemonic::from_phrase(&tampered),
                Err(PrimitivesError::ChecksumMismatch)
            ));
        }
    }

    #[test]
    fn test_unknown_word() {
        let phrase = ABANDON_ABOUT.replace("about", "aboot");
        match Mnemonic::from_phrase(&phrase) {
            Err(PrimitivesError::UnknownWord(w)) => assert_eq!(w, "aboot"),
            other => panic!("expected UnknownWord, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_word_count() {
        assert!(matches!(
            Mnemonic::from_phrase("abandon abandon about"),
            Err(PrimitivesError::InvalidWordCount(3))
        ));
    }

    #[test]
    fn test_from_phrase_normalizes_whitespace_and_case() {
        let messy = format!("  {}  ", ABANDON_ABOUT.to_uppercase().replace(' ', "\t "));
        let m = Mnemonic::from_phrase(&messy).unwrap();
        assert_eq!(m.phrase(), Mnemonic::from_phrase(ABANDON_ABOUT).unwrap().phrase());
    }

    #[test]
    fn test_seed_trezor_vectors() {
        let m = Mnemonic::from_phrase(ABANDON_ABOUT).unwrap();
        assert_eq!(
            hex::encode(m.to_seed(Some("TREZOR")).as_bytes()),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e5349553\
             1f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
        assert_eq!(
            hex::encode(m.to_seed(None).as_bytes()),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
             9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn test_seed_is_deterministic_and_passphrase_sensitive() {
        let m = Mnemonic::generate(WordCount::TwentyFour);
        assert_eq!(m.to_seed(Some("pw")), m.to_seed(Some("pw")));
        assert_ne!(m.to_seed(Some("pw")), m.to_seed(None));
        // An empty passphrase and no passphrase are the same thing.
        assert_eq!(m.to_seed(Some("")), m.to_seed(None));
    }

    #[test]
    fn test_generate_word_counts() {
        for wc in [
            WordCount::Twelve,
            WordCount::Fifteen,
            WordCount::Eighteen,
            WordCount::TwentyOne,
            WordCount::TwentyFour,
        ] {
            let m = Mnemonic::generate(wc);
            assert_eq!(m.word_count(), wc as usize);
            assert_eq!(m.to_entropy().unwrap().len(), wc.entropy_bytes());
        }
    }

    #[test]
    fn test_debug_redacts_phrase() {
        let m = Mnemonic::from_phrase(ABANDON_ABOUT).unwrap();
        let dbg = format!("{:?}", m);
        assert!(!dbg.contains("abandon"));
        assert!(dbg.contains("REDACTED"));
    }
}
