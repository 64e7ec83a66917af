//! `google.protobuf.Any`, the envelope for polymorphic message fields.

use crate::registry::GeneratedType;
use crate::RegistryError;

/// A type URL plus the protobuf encoding of a message of that type.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Any {
    /// Fully-qualified type URL, e.g. `/cosmos.bank.v1beta1.MsgSend`.
    #[prost(string, tag = "1")]
    pub type_url: String,
    /// Protobuf encoding of the wrapped message.
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

impl Any {
    /// Wrap a typed message without going through a registry.
    pub fn pack<T: GeneratedType>(message: &T) -> Self {
        Any {
            type_url: T::TYPE_URL.to_string(),
            value: ::prost::Message::encode_to_vec(message),
        }
    }

    /// Unwrap into `T`, checking the type URL first.
    ///
    /// # Returns
    /// The decoded message, or `Codec` if the URL names a different type or
    /// the bytes do not decode.
    pub fn unpack<T: GeneratedType>(&self) -> Result<T, RegistryError> {
        if self.type_url != T::TYPE_URL {
            return Err(RegistryError::codec(
                &self.type_url,
                format!("expected {}", T::TYPE_URL),
            ));
        }
        T::decode(self.value.as_slice()).map_err(|e| RegistryError::codec(&self.type_url, e))
    }

    /// Whether this envelope holds a `T`.
    pub fn is<T: GeneratedType>(&self) -> bool {
        self.type_url == T::TYPE_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmos::base::Coin;
    use crate::cosmos::crypto::secp256k1;

    #[test]
    fn test_pack_unpack() {
        let coin = Coin::new("uatom", "42");
        let any = Any::pack(&coin);
        assert_eq!(any.type_url, "/cosmos.base.v1beta1.Coin");
        assert!(any.is::<Coin>());
        assert_eq!(any.unpack::<Coin>().unwrap(), coin);
    }

    #[test]
    fn test_unpack_wrong_type() {
        let any = Any::pack(&Coin::new("uatom", "42"));
        assert!(matches!(
            any.unpack::<secp256k1::PubKey>(),
            Err(RegistryError::Codec { ref type_url, .. }) if type_url == "/cosmos.base.v1beta1.Coin"
        ));
    }

    #[test]
    fn test_unpack_garbage_bytes() {
        let any = Any {
            type_url: Coin::TYPE_URL.to_string(),
            value: vec![0x0a, 0xff],
        };
        assert!(any.unpack::<Coin>().is_err());
    }
}
