use super::error::BencodeError;
use super::value::Value;
use std::io::Write;

/// Encodes a value into a fresh buffer.
///
/// Dictionary keys come out in byte order because [`Value::Dict`] is a
/// `BTreeMap`, so equal values always encode to identical bytes. The admin
/// request digest is computed over this output and relies on that.
///
/// # Examples
///
/// ```
/// use cjdadmin::bencode::{encode, Value};
///
/// let request = Value::dict([("q", Value::string("ping"))]);
/// assert_eq!(encode(&request).unwrap(), b"d1:q4:pinge");
///
/// let args = Value::dict([("page", Value::Integer(2))]);
/// assert_eq!(encode(&args).unwrap(), b"d4:pagei2ee");
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>, BencodeError> {
    let mut buf = Vec::with_capacity(64);
    encode_to(value, &mut buf)?;
    Ok(buf)
}

/// Streams the encoding of `value` into `writer`.
pub fn encode_to<W: Write>(value: &Value, writer: &mut W) -> Result<(), BencodeError> {
    match value {
        Value::Integer(i) => write!(writer, "i{}e", i)?,
        Value::Bytes(b) => write_bytes(b, writer)?,
        Value::List(items) => {
            writer.write_all(b"l")?;
            for item in items {
                encode_to(item, writer)?;
            }
            writer.write_all(b"e")?;
        }
        Value::Dict(entries) => {
            writer.write_all(b"d")?;
            for (key, val) in entries {
                write_bytes(key, writer)?;
                encode_to(val, writer)?;
            }
            writer.write_all(b"e")?;
        }
    }
    Ok(())
}

fn write_bytes<W: Write>(bytes: &[u8], writer: &mut W) -> std::io::Result<()> {
    write!(writer, "{}:", bytes.len())?;
    writer.write_all(bytes)
}
