//! Process-wide crypto backend readiness.
//!
//! The primitives in this crate are synchronous and need no setup, but
//! async entry points (wallet construction) await [`ready`] once before
//! touching key material. The first call runs known-answer self-tests
//! against the hash, HMAC and PBKDF2 stack, checks the word list and does a
//! sign/verify round trip on both curves. The outcome is memoised in a
//! `tokio::sync::OnceCell`: concurrent callers share one in-flight
//! initialisation and a successful init never runs again.

use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::OnceCell;

use crate::bip39::{self, Mnemonic};
use crate::hash::{sha256, sha512_hmac};
use crate::keypair::{Curve, Keypair};
use crate::PrimitivesError;

static BACKEND: OnceCell<BackendInfo> = OnceCell::const_new();
static INIT_RUNS: AtomicUsize = AtomicUsize::new(0);

const TREZOR_ZERO_PHRASE: &str = "abandon abandon abandon abandon abandon abandon \
                                  abandon abandon abandon abandon abandon about";
const TREZOR_ZERO_SEED: &str = "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531\
                                f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04";

/// What the initialised backend verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendInfo {
    /// Curves whose sign/verify round trip passed.
    pub curves: Vec<Curve>,
    /// Number of words in the loaded mnemonic list.
    pub word_list_len: usize,
}

/// Wait until the crypto backend is initialised.
///
/// Safe to call from any number of tasks; only the first one does work.
///
/// # Returns
/// The memoised [`BackendInfo`], or `BackendSelfTest` naming the check that
/// failed. A failed init is not cached, so a later call retries.
pub async fn ready() -> Result<&'static BackendInfo, PrimitivesError> {
    BACKEND
        .get_or_try_init(|| async {
            INIT_RUNS.fetch_add(1, Ordering::SeqCst);
            tracing::debug!("initialising crypto backend");
            let info = self_test()?;
            tracing::debug!(
                word_list_len = info.word_list_len,
                curves = info.curves.len(),
                "crypto backend ready"
            );
            Ok(info)
        })
        .await
}

/// Whether [`ready`] has completed successfully in this process.
pub fn is_ready() -> bool {
    BACKEND.initialized()
}

/// How many times initialisation has started. Used to check memoisation.
pub fn init_runs() -> usize {
    INIT_RUNS.load(Ordering::SeqCst)
}

fn self_test() -> Result<BackendInfo, PrimitivesError> {
    check(
        hex::encode(sha256(b"abc"))
            == "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        "sha256 known answer",
    )?;
    check(
        hex::encode(sha512_hmac(b"Jefe", b"what do ya want for nothing?"))
            == "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
        "hmac-sha512 known answer",
    )?;

    let list = bip39::wordlist();
    check(list.len() == 2048, "word list length")?;
    check(list.windows(2).all(|w| w[0] < w[1]), "word list order")?;

    let mnemonic = Mnemonic::from_phrase(TREZOR_ZERO_PHRASE)?;
    check(
        hex::encode(mnemonic.to_seed(Some("TREZOR")).as_bytes()) == TREZOR_ZERO_SEED,
        "pbkdf2 seed known answer",
    )?;

    let mut curves = Vec::new();
    for curve in [Curve::Secp256k1, Curve::Ed25519] {
        let keypair = Keypair::from_private_key(curve, &sha256(b"cosm backend self-test"))?;
        let signature = keypair.sign(b"self-test")?;
        check(
            keypair.verify(b"self-test", &signature) && !keypair.verify(b"self-tesT", &signature),
            curve.algo(),
        )?;
        curves.push(curve);
    }

    Ok(BackendInfo {
        curves,
        word_list_len: list.len(),
    })
}

fn check(ok: bool, what: &str) -> Result<(), PrimitivesError> {
    if ok {
        Ok(())
    } else {
        Err(PrimitivesError::BackendSelfTest(what.to_string()))
    }
}
