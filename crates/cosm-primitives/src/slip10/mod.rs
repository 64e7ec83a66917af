//! SLIP-10 hierarchical deterministic key derivation.
//!
//! One engine serves both curves. For secp256k1 it is exactly BIP-32: the
//! master key comes from `HMAC-SHA512("Bitcoin seed", seed)` and a child
//! scalar is `IL + parent mod n`. For Ed25519 the master key comes from
//! `HMAC-SHA512("ed25519 seed", seed)`, the child key is `IL` itself and
//! every level is hardened.
//!
//! An out-of-range `IL` is reported as [`PrimitivesError::InvalidDerivedKey`]
//! naming the path position; the index is never skipped.

use k256::elliptic_curve::PrimeField;
use k256::{ProjectivePoint, Scalar};
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ec::{PrivateKey, PublicKey};
use crate::hash::sha512_hmac;
use crate::keypair::{Curve, Keypair};
use crate::PrimitivesError;

/// Offset that marks a child index as hardened.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// BIP-44 coin type registered for the Cosmos Hub.
pub const COSMOS_COIN_TYPE: u32 = 118;

/// A single step in an HD path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChildIndex {
    /// Public-derivable child, index below 2^31.
    Normal(u32),
    /// Private-only child, index below 2^31 before the hardened offset.
    Hardened(u32),
}

impl ChildIndex {
    /// A normal index. Fails if `index` already has the hardened bit set.
    pub fn normal(index: u32) -> Result<Self, PrimitivesError> {
        if index >= HARDENED_OFFSET {
            return Err(PrimitivesError::InvalidPath(format!(
                "index {} out of range",
                index
            )));
        }
        Ok(ChildIndex::Normal(index))
    }

    /// A hardened index. `index` is given without the offset.
    pub fn hardened(index: u32) -> Result<Self, PrimitivesError> {
        if index >= HARDENED_OFFSET {
            return Err(PrimitivesError::InvalidPath(format!(
                "index {} out of range",
                index
            )));
        }
        Ok(ChildIndex::Hardened(index))
    }

    /// Decode the 32-bit wire form (hardened iff the top bit is set).
    pub fn from_raw(raw: u32) -> Self {
        if raw >= HARDENED_OFFSET {
            ChildIndex::Hardened(raw - HARDENED_OFFSET)
        } else {
            ChildIndex::Normal(raw)
        }
    }

    /// The 32-bit wire form, `ser32(i)` in BIP-32 terms.
    pub fn to_raw(&self) -> u32 {
        match *self {
            ChildIndex::Normal(i) => i,
            ChildIndex::Hardened(i) => i | HARDENED_OFFSET,
        }
    }

    /// The index without the hardened offset.
    pub fn index(&self) -> u32 {
        match *self {
            ChildIndex::Normal(i) | ChildIndex::Hardened(i) => i,
        }
    }

    pub fn is_hardened(&self) -> bool {
        matches!(self, ChildIndex::Hardened(_))
    }

    /// The same index with the hardened flag forced on.
    pub fn to_hardened(&self) -> Self {
        ChildIndex::Hardened(self.index())
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildIndex::Normal(i) => write!(f, "{}", i),
            ChildIndex::Hardened(i) => write!(f, "{}'", i),
        }
    }
}

impl FromStr for ChildIndex {
    type Err = PrimitivesError;

    /// Parse `"44'"`, `"44h"`, `"44H"` (hardened) or `"0"` (normal).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, hardened) = match s.strip_suffix(&['\'', 'h', 'H'][..]) {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PrimitivesError::InvalidPath(format!(
                "invalid path component '{}'",
                s
            )));
        }
        let index: u32 = digits.parse().map_err(|_| {
            PrimitivesError::InvalidPath(format!("index '{}' out of range", digits))
        })?;
        if hardened {
            ChildIndex::hardened(index)
        } else {
            ChildIndex::normal(index)
        }
    }
}

/// An ordered list of child indices, printed as `m/44'/118'/0'/0/0`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HdPath(Vec<ChildIndex>);

impl HdPath {
    /// The empty path, naming the master key.
    pub fn master() -> Self {
        HdPath(Vec::new())
    }

    pub fn new(indices: Vec<ChildIndex>) -> Self {
        HdPath(indices)
    }

    /// Return a new path with `index` appended.
    pub fn child(&self, index: ChildIndex) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        HdPath(indices)
    }

    pub fn push(&mut self, index: ChildIndex) {
        self.0.push(index);
    }

    pub fn indices(&self) -> &[ChildIndex] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for HdPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for index in &self.0 {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

impl FromStr for HdPath {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let rest = match s.strip_prefix('m') {
            Some(rest) => rest,
            None => {
                return Err(PrimitivesError::InvalidPath(format!(
                    "path must start with 'm': {}",
                    s
                )))
            }
        };
        if rest.is_empty() {
            return Ok(HdPath::master());
        }
        let rest = rest.strip_prefix('/').ok_or_else(|| {
            PrimitivesError::InvalidPath(format!("expected '/' after 'm': {}", s))
        })?;
        rest.split('/')
            .map(ChildIndex::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(HdPath)
    }
}

impl From<Vec<ChildIndex>> for HdPath {
    fn from(indices: Vec<ChildIndex>) -> Self {
        HdPath(indices)
    }
}

/// The standard Cosmos path `m/44'/118'/0'/0/{account_index}`.
///
/// # Returns
/// `InvalidPath` if `account_index` is `2^31` or above; the last level is
/// non-hardened.
pub fn cosmos_hd_path(account_index: u32) -> Result<HdPath, PrimitivesError> {
    Ok(cosmos_path_ending(ChildIndex::normal(account_index)?))
}

/// `m/44'/118'/0'/0/0`, the first Cosmos account.
pub fn cosmos_default_hd_path() -> HdPath {
    cosmos_path_ending(ChildIndex::Normal(0))
}

fn cosmos_path_ending(account: ChildIndex) -> HdPath {
    HdPath(vec![
        ChildIndex::Hardened(44),
        ChildIndex::Hardened(COSMOS_COIN_TYPE),
        ChildIndex::Hardened(0),
        ChildIndex::Normal(0),
        account,
    ])
}

/// Derive the key at `path` from `seed` on `curve`.
///
/// # Arguments
/// * `seed` - BIP-39 seed bytes (16 to 64 bytes).
/// * `curve` - Which curve's SLIP-10 variant to run.
/// * `path` - Path to walk from the master key.
pub fn derive_path(
    seed: &[u8],
    curve: Curve,
    path: &HdPath,
) -> Result<ExtendedPrivateKey, PrimitivesError> {
    ExtendedPrivateKey::master(seed, curve)?.derive_path(path)
}

/// A private key plus chain code at some depth of an HD tree.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ExtendedPrivateKey {
    #[zeroize(skip)]
    curve: Curve,
    depth: u8,
    key: [u8; 32],
    chain_code: [u8; 32],
}

impl ExtendedPrivateKey {
    /// Compute the master key `I = HMAC-SHA512(curve constant, seed)`.
    ///
    /// # Returns
    /// The master key, or `InvalidDerivedKey` when a secp256k1 `IL` is zero
    /// or not below the curve order.
    pub fn master(seed: &[u8], curve: Curve) -> Result<Self, PrimitivesError> {
        if seed.len() < 16 || seed.len() > 64 {
            return Err(PrimitivesError::InvalidSeedLength(seed.len()));
        }
        let mut i = sha512_hmac(curve.master_secret(), seed);
        let master = Self::from_hmac_output(curve, 0, &i);
        i.zeroize();
        if curve == Curve::Secp256k1 {
            parse_scalar(&master.key).ok_or_else(|| invalid_at(&HdPath::master()))?;
        }
        Ok(master)
    }

    fn from_hmac_output(curve: Curve, depth: u8, i: &[u8; 64]) -> Self {
        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&i[..32]);
        chain_code.copy_from_slice(&i[32..]);
        ExtendedPrivateKey {
            curve,
            depth,
            key,
            chain_code,
        }
    }

    /// Derive one child.
    ///
    /// Ed25519 treats every index as hardened.
    pub fn derive_child(&self, index: ChildIndex) -> Result<Self, PrimitivesError> {
        self.derive_child_at(index, &HdPath::master().child(index))
    }

    /// Walk every index of `path` starting from this key.
    pub fn derive_path(&self, path: &HdPath) -> Result<Self, PrimitivesError> {
        let mut current = self.clone();
        let mut walked = HdPath::master();
        for index in path.indices() {
            walked.push(*index);
            current = current.derive_child_at(*index, &walked)?;
        }
        Ok(current)
    }

    fn derive_child_at(&self, index: ChildIndex, at: &HdPath) -> Result<Self, PrimitivesError> {
        let index = match self.curve {
            Curve::Secp256k1 => index,
            Curve::Ed25519 => index.to_hardened(),
        };

        let mut data = Vec::with_capacity(37);
        if index.is_hardened() {
            data.push(0x00);
            data.extend_from_slice(&self.key);
        } else {
            let parent = PrivateKey::from_bytes(&self.key)?;
            data.extend_from_slice(&parent.pub_key().to_compressed());
        }
        data.extend_from_slice(&index.to_raw().to_be_bytes());

        let mut i = sha512_hmac(&self.chain_code, &data);
        data.zeroize();
        let result = self.child_from_hmac(&i, at);
        i.zeroize();
        result
    }

    fn child_from_hmac(&self, i: &[u8; 64], at: &HdPath) -> Result<Self, PrimitivesError> {
        let mut child = Self::from_hmac_output(self.curve, self.depth.saturating_add(1), i);
        if self.curve == Curve::Secp256k1 {
            let il = parse_scalar(&child.key).ok_or_else(|| invalid_at(at))?;
            let parent = PrivateKey::from_bytes(&self.key)?.to_scalar();
            let sum = il + parent;
            if sum == Scalar::ZERO {
                return Err(invalid_at(at));
            }
            child.key.copy_from_slice(&sum.to_bytes());
        }
        Ok(child)
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Number of derivation steps from the master key.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// The raw 32-byte private key.
    pub fn private_key(&self) -> &[u8; 32] {
        &self.key
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Turn the key material into a signing keypair.
    pub fn to_keypair(&self) -> Result<Keypair, PrimitivesError> {
        Keypair::from_private_key(self.curve, &self.key)
    }

    /// Drop the private half, keeping the chain code for public derivation.
    ///
    /// Only secp256k1 supports public-parent derivation.
    pub fn neuter(&self) -> Result<ExtendedPublicKey, PrimitivesError> {
        match self.curve {
            Curve::Secp256k1 => Ok(ExtendedPublicKey {
                public_key: PrivateKey::from_bytes(&self.key)?.pub_key(),
                chain_code: self.chain_code,
                depth: self.depth,
            }),
            Curve::Ed25519 => Err(PrimitivesError::InvalidPublicKey(
                "ed25519 has no public-parent derivation".to_string(),
            )),
        }
    }
}

impl fmt::Debug for ExtendedPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedPrivateKey")
            .field("curve", &self.curve)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

/// A secp256k1 public key plus chain code, for watch-only derivation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtendedPublicKey {
    public_key: PublicKey,
    chain_code: [u8; 32],
    depth: u8,
}

impl ExtendedPublicKey {
    /// Derive a normal child: `child = IL·G + parent`.
    ///
    /// # Returns
    /// `HardenedPublicDerivation` for hardened indices, `InvalidDerivedKey`
    /// when `IL` is out of range or the child is the point at infinity.
    pub fn derive_child(&self, index: ChildIndex) -> Result<Self, PrimitivesError> {
        self.derive_child_at(index, &HdPath::master().child(index))
    }

    pub fn derive_path(&self, path: &HdPath) -> Result<Self, PrimitivesError> {
        let mut current = self.clone();
        let mut walked = HdPath::master();
        for index in path.indices() {
            walked.push(*index);
            current = current.derive_child_at(*index, &walked)?;
        }
        Ok(current)
    }

    fn derive_child_at(&self, index: ChildIndex, at: &HdPath) -> Result<Self, PrimitivesError> {
        if index.is_hardened() {
            return Err(PrimitivesError::HardenedPublicDerivation(index.to_raw()));
        }
        let mut data = Vec::with_capacity(37);
        data.extend_from_slice(&self.public_key.to_compressed());
        data.extend_from_slice(&index.to_raw().to_be_bytes());

        let i = sha512_hmac(&self.chain_code, &data);
        let mut il = [0u8; 32];
        il.copy_from_slice(&i[..32]);
        let tweak = parse_scalar(&il).ok_or_else(|| invalid_at(at))?;

        let point = ProjectivePoint::GENERATOR * tweak + self.public_key.to_projective_point();
        if point == ProjectivePoint::IDENTITY {
            return Err(invalid_at(at));
        }

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&i[32..]);
        Ok(ExtendedPublicKey {
            public_key: PublicKey::from_projective_point(point)?,
            chain_code,
            depth: self.depth.saturating_add(1),
        })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

/// Interpret 32 big-endian bytes as a non-zero scalar below n.
fn parse_scalar(bytes: &[u8; 32]) -> Option<Scalar> {
    let scalar: Option<Scalar> = Scalar::from_repr((*bytes).into()).into();
    scalar.filter(|s| *s != Scalar::ZERO)
}

fn invalid_at(path: &HdPath) -> PrimitivesError {
    PrimitivesError::InvalidDerivedKey(path.to_string())
}
