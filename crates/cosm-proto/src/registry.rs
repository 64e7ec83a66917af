//! Type-URL registry.
//!
//! Maps a fully-qualified type URL to the codec for one concrete message
//! type. A codec is a pair of plain function pointers monomorphised per
//! type at registration, so encoding dispatches on the URL string and
//! never on the runtime type of a value.
//!
//! Registering a URL twice is an error. Tests and mocks that really want to
//! replace a codec call [`RegistryBuilder::register_override`], which says
//! so in the log.

use std::any::Any as StdAny;
use std::collections::BTreeMap;
use std::fmt;

use crate::any::Any;
use crate::cosmos::{auth, bank, base, crypto, distribution, gov, staking, tx};
use crate::RegistryError;

/// A prost message with a fixed protobuf type URL.
pub trait GeneratedType: ::prost::Message + Default + Clone + PartialEq + 'static {
    /// Fully-qualified type URL, leading slash included.
    const TYPE_URL: &'static str;
}

/// Object-safe view of any [`GeneratedType`].
///
/// Lets heterogeneous messages travel in one `Vec` while still being
/// encodable and downcastable.
pub trait DynMessage: fmt::Debug + Send + Sync + 'static {
    /// The type URL of the concrete message.
    fn type_url(&self) -> &'static str;

    /// Rust type name of the concrete message, for error messages.
    fn type_name(&self) -> &'static str;

    /// Protobuf encoding of the message.
    fn to_bytes(&self) -> Vec<u8>;

    fn as_any(&self) -> &dyn StdAny;

    fn into_any(self: Box<Self>) -> Box<dyn StdAny>;

    fn clone_boxed(&self) -> Box<dyn DynMessage>;
}

impl<T: GeneratedType> DynMessage for T {
    fn type_url(&self) -> &'static str {
        T::TYPE_URL
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn to_bytes(&self) -> Vec<u8> {
        ::prost::Message::encode_to_vec(self)
    }

    fn as_any(&self) -> &dyn StdAny {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn StdAny> {
        self
    }

    fn clone_boxed(&self) -> Box<dyn DynMessage> {
        Box::new(self.clone())
    }
}

impl dyn DynMessage {
    /// Borrow as `T` if that is the concrete type.
    pub fn downcast_ref<T: GeneratedType>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// A message ready for the registry: the URL to encode under plus the value.
#[derive(Debug)]
pub struct EncodeObject {
    pub type_url: String,
    pub value: Box<dyn DynMessage>,
}

impl EncodeObject {
    /// Wrap `value` under its own type URL.
    pub fn new<T: GeneratedType>(value: T) -> Self {
        EncodeObject {
            type_url: T::TYPE_URL.to_string(),
            value: Box::new(value),
        }
    }

    /// Wrap `value` under an explicit URL. The registry checks the URL's
    /// codec accepts the value's type at encode time.
    pub fn with_type_url(type_url: impl Into<String>, value: Box<dyn DynMessage>) -> Self {
        EncodeObject {
            type_url: type_url.into(),
            value,
        }
    }
}

impl Clone for EncodeObject {
    fn clone(&self) -> Self {
        EncodeObject {
            type_url: self.type_url.clone(),
            value: self.value.clone_boxed(),
        }
    }
}

type EncodeFn = fn(&dyn DynMessage) -> Option<Vec<u8>>;
type DecodeFn = fn(&[u8]) -> Result<Box<dyn DynMessage>, ::prost::DecodeError>;

#[derive(Clone, Copy)]
struct Codec {
    type_name: &'static str,
    encode: EncodeFn,
    decode: DecodeFn,
}

fn encode_erased<T: GeneratedType>(value: &dyn DynMessage) -> Option<Vec<u8>> {
    value
        .as_any()
        .downcast_ref::<T>()
        .map(::prost::Message::encode_to_vec)
}

fn decode_erased<T: GeneratedType>(bytes: &[u8]) -> Result<Box<dyn DynMessage>, ::prost::DecodeError> {
    T::decode(bytes).map(|m| Box::new(m) as Box<dyn DynMessage>)
}

impl Codec {
    fn of<T: GeneratedType>() -> Self {
        Codec {
            type_name: std::any::type_name::<T>(),
            encode: encode_erased::<T>,
            decode: decode_erased::<T>,
        }
    }
}

/// One registration: a type URL and the codec for the type behind it.
#[derive(Clone)]
pub struct TypeEntry {
    type_url: String,
    codec: Codec,
}

impl TypeEntry {
    /// Register `T` under its own [`GeneratedType::TYPE_URL`].
    pub fn of<T: GeneratedType>() -> Self {
        Self::with_url::<T>(T::TYPE_URL)
    }

    /// Register `T` under a different URL, for chains that fork a message.
    pub fn with_url<T: GeneratedType>(type_url: impl Into<String>) -> Self {
        TypeEntry {
            type_url: type_url.into(),
            codec: Codec::of::<T>(),
        }
    }

    pub fn type_url(&self) -> &str {
        &self.type_url
    }
}

impl fmt::Debug for TypeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeEntry")
            .field("type_url", &self.type_url)
            .field("type", &self.codec.type_name)
            .finish()
    }
}

/// The messages every registry knows unless built from an empty builder:
/// bank, staking, distribution and gov messages, the pubkey envelopes,
/// `BaseAccount` and `Coin`.
pub fn default_types() -> Vec<TypeEntry> {
    vec![
        TypeEntry::of::<base::Coin>(),
        TypeEntry::of::<bank::MsgSend>(),
        TypeEntry::of::<bank::MsgMultiSend>(),
        TypeEntry::of::<staking::MsgDelegate>(),
        TypeEntry::of::<staking::MsgUndelegate>(),
        TypeEntry::of::<staking::MsgBeginRedelegate>(),
        TypeEntry::of::<distribution::MsgWithdrawDelegatorReward>(),
        TypeEntry::of::<distribution::MsgSetWithdrawAddress>(),
        TypeEntry::of::<distribution::MsgWithdrawValidatorCommission>(),
        TypeEntry::of::<gov::MsgVote>(),
        TypeEntry::of::<gov::MsgDeposit>(),
        TypeEntry::of::<crypto::secp256k1::PubKey>(),
        TypeEntry::of::<crypto::ed25519::PubKey>(),
        TypeEntry::of::<auth::BaseAccount>(),
    ]
}

/// Collects registrations, then freezes them into a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    types: BTreeMap<String, TypeEntry>,
}

impl RegistryBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder pre-loaded with [`default_types`].
    pub fn with_defaults() -> Result<Self, RegistryError> {
        let mut builder = Self::new();
        for entry in default_types() {
            builder.add(entry)?;
        }
        Ok(builder)
    }

    /// Register `T` under its type URL.
    ///
    /// # Returns
    /// `DuplicateTypeUrl` if the URL is already taken.
    pub fn register<T: GeneratedType>(&mut self) -> Result<&mut Self, RegistryError> {
        self.add(TypeEntry::of::<T>())
    }

    /// Register an arbitrary entry. Fails on duplicates like [`register`](Self::register).
    pub fn add(&mut self, entry: TypeEntry) -> Result<&mut Self, RegistryError> {
        if self.types.contains_key(&entry.type_url) {
            return Err(RegistryError::DuplicateTypeUrl(entry.type_url));
        }
        self.types.insert(entry.type_url.clone(), entry);
        Ok(self)
    }

    /// Register `T`, replacing any codec already bound to its URL.
    ///
    /// Meant for tests and mocks. Replacements are logged at `warn`.
    pub fn register_override<T: GeneratedType>(&mut self) -> &mut Self {
        let entry = TypeEntry::of::<T>();
        if let Some(previous) = self.types.get(&entry.type_url) {
            tracing::warn!(
                type_url = %entry.type_url,
                previous = previous.codec.type_name,
                replacement = entry.codec.type_name,
                "overriding registered type"
            );
        }
        self.types.insert(entry.type_url.clone(), entry);
        self
    }

    /// Freeze the registrations.
    pub fn build(&mut self) -> Registry {
        let types = std::mem::take(&mut self.types);
        tracing::debug!(types = types.len(), "type registry built");
        Registry { types }
    }
}

/// An immutable map from type URL to codec.
#[derive(Debug, Clone)]
pub struct Registry {
    types: BTreeMap<String, TypeEntry>,
}

impl Registry {
    /// The default types plus `extra`.
    ///
    /// # Returns
    /// `DuplicateTypeUrl` if an extra entry collides with a default or with
    /// another extra.
    pub fn new(extra: impl IntoIterator<Item = TypeEntry>) -> Result<Self, RegistryError> {
        let mut builder = RegistryBuilder::with_defaults()?;
        for entry in extra {
            builder.add(entry)?;
        }
        Ok(builder.build())
    }

    /// Start from an empty builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Whether `type_url` has a codec.
    pub fn contains(&self, type_url: &str) -> bool {
        self.types.contains_key(type_url)
    }

    /// Registered URLs in sorted order.
    pub fn type_urls(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn codec(&self, type_url: &str) -> Result<&Codec, RegistryError> {
        self.types
            .get(type_url)
            .map(|entry| &entry.codec)
            .ok_or_else(|| RegistryError::UnknownTypeUrl(type_url.to_string()))
    }

    /// Encode a message with the codec registered for its type URL.
    ///
    /// # Returns
    /// The protobuf bytes, `UnknownTypeUrl` if the URL is not registered, or
    /// `Codec` if the value is not the type registered for the URL.
    pub fn encode(&self, object: &EncodeObject) -> Result<Vec<u8>, RegistryError> {
        let codec = self.codec(&object.type_url)?;
        (codec.encode)(object.value.as_ref()).ok_or_else(|| {
            RegistryError::codec(
                &object.type_url,
                format!(
                    "value is {}, registered type is {}",
                    object.value.type_name(),
                    codec.type_name
                ),
            )
        })
    }

    /// Encode a message into an `Any` envelope.
    pub fn encode_as_any(&self, object: &EncodeObject) -> Result<Any, RegistryError> {
        Ok(Any {
            type_url: object.type_url.clone(),
            value: self.encode(object)?,
        })
    }

    /// Decode bytes with the codec registered for `type_url`.
    pub fn decode(&self, type_url: &str, bytes: &[u8]) -> Result<Box<dyn DynMessage>, RegistryError> {
        let codec = self.codec(type_url)?;
        (codec.decode)(bytes).map_err(|e| RegistryError::codec(type_url, e))
    }

    /// Decode the contents of an `Any` envelope.
    pub fn decode_any(&self, any: &Any) -> Result<Box<dyn DynMessage>, RegistryError> {
        self.decode(&any.type_url, &any.value)
    }

    /// Decode and downcast to a concrete type.
    ///
    /// # Returns
    /// `Codec` if the type registered for the URL is not `T`.
    pub fn decode_as<T: GeneratedType>(&self, type_url: &str, bytes: &[u8]) -> Result<T, RegistryError> {
        let message = self.decode(type_url, bytes)?;
        let type_name = message.type_name();
        message
            .into_any()
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| {
                RegistryError::codec(
                    type_url,
                    format!("registered type is {}, requested {}", type_name, std::any::type_name::<T>()),
                )
            })
    }

    /// Build a `TxBody` from messages, encoding each through the registry.
    pub fn encode_tx_body(
        &self,
        messages: &[EncodeObject],
        memo: &str,
    ) -> Result<tx::TxBody, RegistryError> {
        let messages = messages
            .iter()
            .map(|m| self.encode_as_any(m))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tx::TxBody {
            messages,
            memo: memo.to_string(),
            timeout_height: 0,
        })
    }

    /// Decode every message of a `TxBody`.
    pub fn decode_tx_body(&self, body: &tx::TxBody) -> Result<Vec<Box<dyn DynMessage>>, RegistryError> {
        body.messages.iter().map(|any| self.decode_any(any)).collect()
    }
}

impl Default for Registry {
    /// The default types only.
    fn default() -> Self {
        let mut types = BTreeMap::new();
        for entry in default_types() {
            types.insert(entry.type_url.clone(), entry);
        }
        Registry { types }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmos::base::Coin;

    /// A message type that is not in the default set.
    #[derive(Clone, PartialEq, ::prost::Message)]
    struct MsgStoreCode {
        #[prost(string, tag = "1")]
        sender: String,
        #[prost(bytes = "vec", tag = "2")]
        wasm_byte_code: Vec<u8>,
    }

    impl GeneratedType for MsgStoreCode {
        const TYPE_URL: &'static str = "/cosmwasm.wasm.v1.MsgStoreCode";
    }

    /// Same URL as `MsgSend`, different shape.
    #[derive(Clone, PartialEq, ::prost::Message)]
    struct FakeMsgSend {
        #[prost(string, tag = "1")]
        from_address: String,
    }

    impl GeneratedType for FakeMsgSend {
        const TYPE_URL: &'static str = "/cosmos.bank.v1beta1.MsgSend";
    }

    fn msg_send() -> bank::MsgSend {
        bank::MsgSend {
            from_address: "cosmos1pkptre7fdkl6gfrzlesjjvhxhlc3r4gmmk8rs6".to_string(),
            to_address: "cosmos10dyr9899g6t0pelew4nvf4j5c3jcgv0r73qga5".to_string(),
            amount: vec![Coin::new("uatom", "1234567")],
        }
    }

    #[test]
    fn test_default_set_has_no_duplicates() {
        let registry = Registry::default();
        assert_eq!(registry.len(), default_types().len());
        assert!(RegistryBuilder::with_defaults().is_ok());
        assert!(registry.contains("/cosmos.bank.v1beta1.MsgSend"));
        assert!(registry.contains("/cosmos.crypto.secp256k1.PubKey"));
        assert!(registry.contains("/cosmos.gov.v1beta1.MsgVote"));
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let registry = Registry::default();
        let msg = msg_send();
        let object = EncodeObject::new(msg.clone());

        let bytes = registry.encode(&object).unwrap();
        assert_eq!(bytes, ::prost::Message::encode_to_vec(&msg));

        let decoded = registry.decode(bank::MsgSend::TYPE_URL, &bytes).unwrap();
        assert_eq!(decoded.type_url(), bank::MsgSend::TYPE_URL);
        assert_eq!(decoded.downcast_ref::<bank::MsgSend>(), Some(&msg));

        let typed: bank::MsgSend = registry.decode_as(bank::MsgSend::TYPE_URL, &bytes).unwrap();
        assert_eq!(typed, msg);
    }

    #[test]
    fn test_any_roundtrip() {
        let registry = Registry::default();
        let any = registry.encode_as_any(&EncodeObject::new(msg_send())).unwrap();
        assert_eq!(any.type_url, "/cosmos.bank.v1beta1.MsgSend");
        assert_eq!(any, Any::pack(&msg_send()));

        let decoded = registry.decode_any(&any).unwrap();
        assert_eq!(decoded.downcast_ref::<bank::MsgSend>(), Some(&msg_send()));
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut builder = RegistryBuilder::with_defaults().unwrap();
        let err = builder.register::<bank::MsgSend>().unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateTypeUrl(ref url) if url == "/cosmos.bank.v1beta1.MsgSend"));

        // Same URL through a different type is still a duplicate.
        assert!(matches!(
            builder.register::<FakeMsgSend>(),
            Err(RegistryError::DuplicateTypeUrl(_))
        ));

        assert!(matches!(
            Registry::new([TypeEntry::of::<MsgStoreCode>(), TypeEntry::of::<MsgStoreCode>()]),
            Err(RegistryError::DuplicateTypeUrl(_))
        ));
    }

    #[test]
    fn test_override_replaces_codec() {
        let mut builder = RegistryBuilder::with_defaults().unwrap();
        let registry = builder.register_override::<FakeMsgSend>().build();

        let bytes = ::prost::Message::encode_to_vec(&msg_send());
        let decoded = registry.decode(bank::MsgSend::TYPE_URL, &bytes).unwrap();
        assert!(decoded.downcast_ref::<FakeMsgSend>().is_some());
        assert!(decoded.downcast_ref::<bank::MsgSend>().is_none());
    }

    #[test]
    fn test_unknown_type_url() {
        let registry = Registry::default();
        let object = EncodeObject::new(MsgStoreCode {
            sender: "cosmos1abc".to_string(),
            wasm_byte_code: vec![0, 97, 115, 109],
        });
        assert!(matches!(
            registry.encode(&object),
            Err(RegistryError::UnknownTypeUrl(ref url)) if url == "/cosmwasm.wasm.v1.MsgStoreCode"
        ));
        assert!(matches!(
            registry.decode("/cosmwasm.wasm.v1.MsgStoreCode", &[]),
            Err(RegistryError::UnknownTypeUrl(_))
        ));
    }

    #[test]
    fn test_extra_types_are_usable() {
        let registry = Registry::new([TypeEntry::of::<MsgStoreCode>()]).unwrap();
        assert_eq!(registry.len(), default_types().len() + 1);

        let msg = MsgStoreCode {
            sender: "cosmos1abc".to_string(),
            wasm_byte_code: vec![0, 97, 115, 109],
        };
        let bytes = registry.encode(&EncodeObject::new(msg.clone())).unwrap();
        let back: MsgStoreCode = registry.decode_as(MsgStoreCode::TYPE_URL, &bytes).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_value_type_mismatch_is_codec_error() {
        let registry = Registry::default();
        let object = EncodeObject::with_type_url(
            bank::MsgSend::TYPE_URL,
            Box::new(Coin::new("uatom", "1")),
        );
        assert!(matches!(
            registry.encode(&object),
            Err(RegistryError::Codec { ref type_url, .. }) if type_url == bank::MsgSend::TYPE_URL
        ));

        let bytes = ::prost::Message::encode_to_vec(&msg_send());
        assert!(matches!(
            registry.decode_as::<Coin>(bank::MsgSend::TYPE_URL, &bytes),
            Err(RegistryError::Codec { .. })
        ));
    }

    #[test]
    fn test_malformed_bytes_is_codec_error() {
        let registry = Registry::default();
        // Field 1, wire type 2, length 10, but only 1 byte follows.
        let err = registry
            .decode(bank::MsgSend::TYPE_URL, &[0x0a, 0x0a, 0x61])
            .unwrap_err();
        match err {
            RegistryError::Codec { type_url, message } => {
                assert_eq!(type_url, bank::MsgSend::TYPE_URL);
                assert!(!message.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_encode_tx_body() {
        let registry = Registry::default();
        let messages = vec![
            EncodeObject::new(msg_send()),
            EncodeObject::new(gov::MsgVote {
                proposal_id: 7,
                voter: "cosmos1voter".to_string(),
                option: gov::VoteOption::Yes as i32,
            }),
        ];
        let body = registry.encode_tx_body(&messages, "hello").unwrap();
        assert_eq!(body.memo, "hello");
        assert_eq!(body.messages.len(), 2);
        assert_eq!(body.messages[1].type_url, "/cosmos.gov.v1beta1.MsgVote");

        let decoded = registry.decode_tx_body(&body).unwrap();
        assert_eq!(decoded[0].downcast_ref::<bank::MsgSend>(), Some(&msg_send()));
    }

    #[test]
    fn test_encode_object_clone() {
        let object = EncodeObject::new(msg_send());
        let copy = object.clone();
        assert_eq!(copy.type_url, object.type_url);
        assert_eq!(copy.value.to_bytes(), object.value.to_bytes());
    }
}
