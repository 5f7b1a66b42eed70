use bytes::Bytes;

use super::*;

#[test]
fn test_decode_integer() {
    assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
    assert_eq!(decode(b"i-7e").unwrap(), Value::Integer(-7));
    assert_eq!(decode(b"i0e").unwrap(), Value::Integer(0));
}

#[test]
fn test_decode_integer_invalid() {
    assert!(decode(b"i-0e").is_err());
    assert!(decode(b"i03e").is_err());
    assert!(decode(b"ie").is_err());
    assert!(decode(b"i12").is_err());
}

#[test]
fn test_decode_pong_response() {
    let value = decode(b"d1:q4:ponge").unwrap();
    assert_eq!(value.get_str(b"q"), Some("pong"));
    assert!(value.get(b"error").is_none());
}

#[test]
fn test_decode_routing_table_page() {
    let data = b"d4:morei1e12:routingTableld2:ip4:fc004:linki5e4:path19:0000.0000.0000.00017:versioni8eeee";
    let value = decode(data).unwrap();

    assert_eq!(value.get_int(b"more"), Some(1));
    let rows = value.get(b"routingTable").and_then(|v| v.as_list()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get_str(b"ip"), Some("fc00"));
    assert_eq!(rows[0].get_str(b"path"), Some("0000.0000.0000.0001"));
    assert_eq!(rows[0].get_int(b"link"), Some(5));
}

#[test]
fn test_decode_prefix_ignores_trailing_bytes() {
    let (value, used) = decode_prefix(b"d6:cookie10:1234567890e\0\0\0").unwrap();
    assert_eq!(value.get_str(b"cookie"), Some("1234567890"));
    assert_eq!(used, 23);
}

#[test]
fn test_trailing_data_error() {
    assert!(matches!(
        decode(b"d1:q4:pongeextra"),
        Err(BencodeError::TrailingData)
    ));
}

#[test]
fn test_truncated_input() {
    assert!(matches!(decode(b"d1:q4:po"), Err(BencodeError::UnexpectedEof)));
    assert!(matches!(decode(b"l"), Err(BencodeError::UnexpectedEof)));
    assert!(matches!(decode(b""), Err(BencodeError::UnexpectedEof)));
}

#[test]
fn test_unexpected_byte_offset() {
    assert!(matches!(
        decode(b"d1:qxe"),
        Err(BencodeError::UnexpectedByte { byte: b'x', offset: 4 })
    ));
}

#[test]
fn test_oversized_string_length() {
    assert!(decode(b"99999999999999999999999:x").is_err());
    assert!(matches!(decode(b"5:abc"), Err(BencodeError::UnexpectedEof)));
}

#[test]
fn test_non_string_dict_key() {
    assert!(matches!(decode(b"di1ei2ee"), Err(BencodeError::NonStringKey(1))));
}

#[test]
fn test_nesting_limit() {
    let mut deep = vec![b'l'; 100];
    deep.extend(vec![b'e'; 100]);
    assert!(matches!(decode(&deep), Err(BencodeError::NestingTooDeep(64))));
}

#[test]
fn test_encode_sorts_keys() {
    let msg = Value::dict([
        ("q", Value::string("auth")),
        ("aq", Value::string("ping")),
        ("cookie", Value::string("123")),
    ]);
    assert_eq!(encode(&msg).unwrap(), b"d2:aq4:ping6:cookie3:1231:q4:authe");
}

#[test]
fn test_encode_nested() {
    let msg = Value::dict([
        ("args", Value::dict([("page", Value::Integer(3))])),
        ("q", Value::string("NodeStore_dumpTable")),
    ]);
    assert_eq!(
        encode(&msg).unwrap(),
        b"d4:argsd4:pagei3ee1:q19:NodeStore_dumpTablee".to_vec()
    );
}

#[test]
fn test_encode_list_and_bytes() {
    let list = Value::List(vec![
        Value::Bytes(Bytes::from_static(b"\x00\xff")),
        Value::Integer(-1),
    ]);
    assert_eq!(encode(&list).unwrap(), b"l2:\x00\xffi-1ee");
}

#[test]
fn test_value_accessors() {
    let value = Value::Integer(42);
    assert_eq!(value.as_integer(), Some(42));
    assert!(value.as_bytes().is_none());
    assert!(value.get(b"q").is_none());

    let value = Value::Bytes(Bytes::from_static(b"\xff\xfe"));
    assert!(value.as_bytes().is_some());
    assert!(value.as_str().is_none());

    let value = Value::List(vec![]);
    assert!(value.as_list().is_some());
    assert!(value.into_dict().is_none());
}
