//! Bencode, the wire encoding of the admin interface.
//!
//! Every admin request and response is a single bencoded dictionary:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` |
//! | Byte string | `<length>:<data>` | `4:pong` |
//! | List | `l<items>e` | `li1ei2ee` |
//! | Dictionary | `d<key><value>...e` | `d1:q4:pinge` |
//!
//! Encoding is canonical (sorted dictionary keys), which the request digest
//! depends on.
//!
//! ```
//! use cjdadmin::bencode::{decode, encode, Value};
//!
//! let ping = Value::dict([("q", Value::string("ping"))]);
//! let wire = encode(&ping).unwrap();
//! assert_eq!(wire, b"d1:q4:pinge");
//! assert_eq!(decode(&wire).unwrap(), ping);
//! ```

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, decode_prefix};
pub use encode::{encode, encode_to};
pub use error::BencodeError;
pub use value::Value;

#[cfg(test)]
mod tests;
