use tempfile::TempDir;

use super::*;

const GENERATED: &str = r#"
{
    // Private key:
    // Your confidentiality and data integrity depend on this key, keep it secret!
    "privateKey": "751d3db85b848ed65bd3b5a5ef1bf2ab8f5a5c8ba4ff2b1e0e6d1b0f54b3e1c2",

    // This key corresponds to the public key and ipv6 address:
    "publicKey": "u2jf87mgqlxfzdnywp60z3tx6tkulvgh2nyc2jk1zc69zzt2s8u0.k",
    "ipv6": "fc8f:cc50:70b3:ed5b:2a8d:3f9e:e8d6:1b38",

    /*
     * Anyone connecting and offering these passwords on connection will be allowed.
     */
    "authorizedPasswords":
    [
        // A unique string which is known to the client and server.
        {"password": "abc123", "user": "default-login"}
    ],

    // Settings for administering and extracting information from your router.
    "admin":
    {
        // Port to bind the admin RPC server to.
        "bind": "127.0.0.1:11234",

        // Password for admin RPC server.
        "password": "4s8sh3z0vfxqc4z2ck5k4mvx"
    },

    "interfaces":
    {
        "UDPInterface":
        [
            {
                "bind": "0.0.0.0:41278",
                "connectTo":
                {
                    "192.0.2.10:10000":
                    {
                        "password": "peerpass",
                        "publicKey": "lpu15wrt3tb6d8vngq9yh3lr4gmnkuv0rgcd2jwl5rp5v0mhlg30.k",
                        "login": "default-login"
                    }
                }
            }
        ]
    },

    "router":
    {
        "interface":
        {
            "type": "TUNInterface"
            //"tunDevice": "tun0"
        }
    },

    "resetAfterInactivitySeconds": 100,
    "pidFile": "cjdroute.pid",
    "security": [ { "setuser": "nobody" } ],
    "version": 2
}
"#;

#[test]
fn test_parse_generated_config() {
    let config = Config::parse(GENERATED).unwrap();

    assert_eq!(config.ipv6, "fc8f:cc50:70b3:ed5b:2a8d:3f9e:e8d6:1b38");
    assert_eq!(config.authorized_passwords.len(), 1);
    assert_eq!(
        config.authorized_passwords[0].user.as_deref(),
        Some("default-login")
    );
    assert_eq!(config.admin.password, "4s8sh3z0vfxqc4z2ck5k4mvx");
    assert_eq!(config.reset_after_inactivity_seconds, Some(100));
    assert_eq!(config.pid_file.as_deref(), Some("cjdroute.pid"));
    assert_eq!(config.version, Some(2));

    let router = config.router.as_ref().unwrap();
    assert_eq!(router.interface.kind, "TUNInterface");
    assert_eq!(router.interface.tun_device, None);

    let udp = config.interfaces.udp.as_ref().unwrap();
    assert_eq!(udp.len(), 1);
    let iface = udp.iter().next().unwrap();
    let peer = &iface.connect_to["192.0.2.10:10000"];
    assert_eq!(peer.password, "peerpass");
    assert_eq!(peer.extra["login"], "default-login");

    assert!(config.extra.contains_key("security"));
}

#[test]
fn test_single_interface_block() {
    let text = r#"{
        "privateKey": "aa", "publicKey": "bb.k", "ipv6": "fc00::1",
        "authorizedPasswords": [],
        "admin": { "bind": "127.0.0.1:11234", "password": "x" },
        "interfaces": { "UDPInterface": { "bind": "0.0.0.0:10000" } }
    }"#;
    let config = Config::parse(text).unwrap();

    let udp = config.interfaces.udp.as_ref().unwrap();
    assert!(matches!(udp, InterfaceList::Single(_)));
    assert_eq!(udp.iter().map(|i| i.bind.as_str()).collect::<Vec<_>>(), vec!["0.0.0.0:10000"]);

    // The single-object form survives a write.
    let written = config.to_json_string().unwrap();
    let value: JsonValue = serde_json::from_str(&written).unwrap();
    assert!(value["interfaces"]["UDPInterface"].is_object());
}

#[test]
fn test_round_trip_through_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("cjdroute.conf");

    let config = Config::parse(GENERATED).unwrap();
    config.write(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(!written.contains("//"));
    assert!(!written.contains("/*"));

    let reread = Config::read(&path).unwrap();
    assert_eq!(reread, config);
}

#[test]
fn test_missing_required_field() {
    let text = r#"{ "privateKey": "aa", "publicKey": "bb.k" }"#;
    assert!(matches!(Config::parse(text), Err(ConfigError::Json(_))));
}

#[test]
fn test_read_missing_file() {
    let temp = TempDir::new().unwrap();
    let result = Config::read(temp.path().join("absent.conf"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_admin_endpoint() {
    let admin = |bind: &str| AdminBlock {
        bind: bind.to_string(),
        password: String::new(),
        extra: Map::new(),
    };

    assert_eq!(
        admin("127.0.0.1:11234").endpoint().unwrap(),
        ("127.0.0.1".to_string(), 11234)
    );
    assert_eq!(admin("[::1]:9000").endpoint().unwrap(), ("::1".to_string(), 9000));
    assert_eq!(
        admin("localhost:11234").endpoint().unwrap(),
        ("localhost".to_string(), 11234)
    );
    assert!(admin("127.0.0.1").endpoint().is_err());
    assert!(admin(":11234").endpoint().is_err());
    assert!(admin("127.0.0.1:port").endpoint().is_err());
    assert!(admin("::1:11234").endpoint().is_err());
}

#[test]
fn test_admin_options_from_config() {
    let config = Config::parse(GENERATED).unwrap();
    let options = crate::admin::AdminOptions::from_config(&config).unwrap();

    assert_eq!(options.address, "127.0.0.1");
    assert_eq!(options.port, 11234);
    assert_eq!(options.password, "4s8sh3z0vfxqc4z2ck5k4mvx");
}

#[test]
fn test_strip_comments_keeps_strings() {
    let text = r#"{"a": "x // y", "b": "/* z */", "c": "q\"//"} // tail"#;
    assert_eq!(
        strip_comments(text),
        r#"{"a": "x // y", "b": "/* z */", "c": "q\"//"} "#
    );
}

#[test]
fn test_strip_comments_preserves_line_count() {
    let text = "a /* one\ntwo\n*/ b // c\nd";
    let stripped = strip_comments(text);
    assert_eq!(stripped.lines().count(), text.lines().count());
    assert_eq!(stripped, "a \n\n  b \nd");
}

#[test]
fn test_strip_comments_unterminated() {
    assert_eq!(strip_comments("a // no newline"), "a ");
    assert_eq!(strip_comments("a /* open"), "a  ");
}
