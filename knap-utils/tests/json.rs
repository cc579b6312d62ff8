use knap_utils::{compress_obj, decompress_obj, dejsonify, jsonify, load_json_arg};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Settings {
    zeta: u32,
    alpha: Vec<u32>,
}

#[test]
fn test_jsonify_sorts_keys() {
    let value = json!({"b": 1, "a": {"d": 2, "c": [ {"y": 1, "x": 0} ]}});
    assert_eq!(
        jsonify(&value).unwrap(),
        r#"{"a":{"c":[{"x":0,"y":1}],"d":2},"b":1}"#
    );
}

#[test]
fn test_jsonify_struct_field_order_is_irrelevant() {
    let settings = Settings {
        zeta: 3,
        alpha: vec![1, 2],
    };
    assert_eq!(jsonify(&settings).unwrap(), r#"{"alpha":[1,2],"zeta":3}"#);
}

#[test]
fn test_dejsonify() {
    let settings: Settings = dejsonify(r#"{"zeta":3,"alpha":[1,2]}"#).unwrap();
    assert_eq!(
        settings,
        Settings {
            zeta: 3,
            alpha: vec![1, 2]
        }
    );
    assert!(dejsonify::<Settings>(r#"{"zeta":"x"}"#).is_err());
}

#[test]
fn test_compress_decompress() {
    let settings = Settings {
        zeta: 7,
        alpha: vec![9; 100],
    };
    let compressed = compress_obj(&settings).unwrap();
    let restored: Settings = decompress_obj(&compressed).unwrap();
    assert_eq!(restored, settings);
    assert!(decompress_obj::<Value>(b"not zlib").is_err());
}

#[test]
fn test_load_json_arg_inline() {
    let settings: Settings = load_json_arg(r#"{"zeta":1,"alpha":[]}"#).unwrap();
    assert_eq!(settings.zeta, 1);
    assert!(load_json_arg::<Settings>("{").is_err());
    assert!(load_json_arg::<Settings>("/definitely/not/here.json").is_err());
}
