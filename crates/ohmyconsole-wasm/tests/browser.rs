//! Browser logger tests (run with `wasm-pack test --headless --firefox`)

#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Function, Object, Reflect};
use ohmyconsole_core::{format, Arg};
use ohmyconsole_wasm::browser::{arg_from_js, oh_my_console};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn set_debug(filter: Option<&str>) {
    let global = js_sys::global();
    match filter {
        Some(filter) => {
            Reflect::set(&global, &"DEBUG".into(), &filter.into()).unwrap();
        }
        None => {
            Reflect::delete_property(&global, &"DEBUG".into()).unwrap();
        }
    }
}

#[wasm_bindgen_test]
fn test_non_string_id_throws() {
    assert!(oh_my_console(JsValue::from_f64(42.0)).is_err());
    assert!(oh_my_console(JsValue::NULL).is_err());
}

#[wasm_bindgen_test]
fn test_info_returns_plain_line() {
    let logger = oh_my_console("svc".into()).unwrap();
    let line = logger.info(&Array::of2(&"value=%d".into(), &JsValue::from(7)));
    assert!(line.ends_with("[svc][info] value=7"));
}

#[wasm_bindgen_test]
fn test_debug_follows_window_debug() {
    set_debug(Some("main"));
    let main = oh_my_console("main:sub".into()).unwrap();
    let other = oh_my_console("other".into()).unwrap();
    set_debug(None);

    let line = main.debug(&Array::of1(&"x".into()));
    assert!(line.as_string().unwrap().ends_with("[main:sub][debug] x"));
    assert_eq!(other.debug(&Array::of1(&"x".into())).as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn test_circular_object_is_opaque() {
    let obj = Object::new();
    Reflect::set(&obj, &"self".into(), &obj).unwrap();
    assert_eq!(arg_from_js(&obj.into()), Arg::Other("[object Object]".into()));
}

#[wasm_bindgen_test]
fn test_plain_object_is_structured() {
    let obj = Object::new();
    Reflect::set(&obj, &"foo".into(), &"bar".into()).unwrap();
    assert_eq!(
        arg_from_js(&obj.into()),
        Arg::Json(serde_json::json!({"foo": "bar"}))
    );
}

#[wasm_bindgen_test]
fn test_function_is_undefined_under_json() {
    let func = Function::new_no_args("return 1");
    let arg = arg_from_js(&func.into());
    assert_eq!(arg, Arg::Undefined);
    assert_eq!(format(&[Arg::from("%j"), arg]), "undefined");
}

#[wasm_bindgen_test]
fn test_object_keeps_key_order() {
    let obj = Object::new();
    Reflect::set(&obj, &"zeta".into(), &JsValue::from(1)).unwrap();
    Reflect::set(&obj, &"alpha".into(), &JsValue::from(2)).unwrap();
    let arg = arg_from_js(&obj.into());
    assert_eq!(format(&[Arg::from("%j"), arg]), r#"{"zeta":1,"alpha":2}"#);
}
