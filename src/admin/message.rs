use std::collections::BTreeMap;

use bytes::Bytes;
use sha2::{Digest, Sha256};

use super::error::AdminError;
use crate::bencode::{decode_prefix, encode, BencodeError, Value};
use crate::constants::{COMMAND_AUTH, ERROR_AUTH_FAILED};

/// Hex SHA-256 of `password ∥ cookie`, the first pass of the request digest.
pub fn auth_digest(password: &str, cookie: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(cookie.as_bytes());
    hex::encode(hasher.finalize())
}

/// Encodes a request for `command`.
///
/// With both `password` and `cookie` non-empty the request is wrapped in an
/// `auth` call and signed; otherwise it is sent as a plain `q` call. Signing
/// is two-pass: the `hash` field first holds `sha256(password ∥ cookie)`, the
/// whole message is encoded, and `hash` is then replaced with the SHA-256 of
/// those encoded bytes before the final encoding.
///
/// ```
/// use cjdadmin::admin::encode_request;
///
/// let plain = encode_request("ping", None, "", "").unwrap();
/// assert_eq!(plain, b"d1:q4:pinge");
///
/// let signed = encode_request("ping", None, "secret", "1234").unwrap();
/// assert!(signed.starts_with(b"d2:aq4:ping6:cookie4:12344:hash64:"));
/// ```
pub fn encode_request(
    command: &str,
    args: Option<Value>,
    password: &str,
    cookie: &str,
) -> Result<Vec<u8>, BencodeError> {
    encode_tagged_request(command, args, None, password, cookie)
}

/// [`encode_request`] with a `txid` the daemon echoes in its reply. The txid
/// is part of the signed message.
pub(super) fn encode_tagged_request(
    command: &str,
    args: Option<Value>,
    txid: Option<&str>,
    password: &str,
    cookie: &str,
) -> Result<Vec<u8>, BencodeError> {
    let mut message = BTreeMap::new();
    if let Some(args) = args {
        message.insert(Bytes::from_static(b"args"), args);
    }
    if let Some(txid) = txid {
        message.insert(Bytes::from_static(b"txid"), Value::string(txid));
    }

    if password.is_empty() || cookie.is_empty() {
        message.insert(Bytes::from_static(b"q"), Value::string(command));
        return encode(&Value::Dict(message));
    }

    message.insert(Bytes::from_static(b"q"), Value::string(COMMAND_AUTH));
    message.insert(Bytes::from_static(b"aq"), Value::string(command));
    message.insert(Bytes::from_static(b"cookie"), Value::string(cookie));
    message.insert(
        Bytes::from_static(b"hash"),
        Value::from(auth_digest(password, cookie)),
    );

    let mut message = Value::Dict(message);
    let signed = hex::encode(Sha256::digest(encode(&message)?));
    if let Value::Dict(fields) = &mut message {
        fields.insert(Bytes::from_static(b"hash"), Value::from(signed));
    }

    encode(&message)
}

/// One decoded admin response.
///
/// An empty response stands for "nothing usable came back": the command was
/// empty, the exchange failed, or the reply did not decode. Every accessor
/// returns `Option`, so callers check for the keys they expect instead of
/// trusting the shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    fields: BTreeMap<Bytes, Value>,
}

impl Response {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decodes the first dictionary in `data`; bytes after it are ignored.
    pub fn from_datagram(data: &[u8]) -> Result<Self, AdminError> {
        let (value, _) = decode_prefix(data)?;
        let fields = value
            .into_dict()
            .ok_or_else(|| AdminError::InvalidResponse("expected dict".into()))?;
        Ok(Self { fields })
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key.as_bytes())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key.as_bytes())
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_integer()
    }

    /// The `error` field, if the daemon reported one.
    pub fn error(&self) -> Option<&str> {
        self.get_str("error")
    }

    /// True when the daemon refused the credentials for this call.
    pub fn is_auth_failure(&self) -> bool {
        self.error() == Some(ERROR_AUTH_FAILED)
    }

    pub fn into_value(self) -> Value {
        Value::Dict(self.fields)
    }
}

impl From<BTreeMap<Bytes, Value>> for Response {
    fn from(fields: BTreeMap<Bytes, Value>) -> Self {
        Self { fields }
    }
}
