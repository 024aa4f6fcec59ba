use crate::core::{ConversionError, Convert, RawValue};
use crate::settings::{Setting, SettingError, SettingKind, Value};

/// Converter that ignores its input and returns fixed results.
///
/// Lets the tests pin down what a setting does with a converted value
/// independently of how text is parsed.
struct FixedConvert {
    int: i64,
    float: f64,
    boolean: bool,
}

impl FixedConvert {
    fn int(int: i64) -> Self {
        Self { int, float: 0.0, boolean: false }
    }

    fn float(float: f64) -> Self {
        Self { int: 0, float, boolean: false }
    }

    fn boolean(boolean: bool) -> Self {
        Self { int: 0, float: 0.0, boolean }
    }
}

impl Convert for FixedConvert {
    fn to_bool(&self, _raw: &RawValue) -> Result<bool, ConversionError> {
        Ok(self.boolean)
    }

    fn to_int(&self, _raw: &RawValue) -> Result<i64, ConversionError> {
        Ok(self.int)
    }

    fn to_float(&self, _raw: &RawValue) -> Result<f64, ConversionError> {
        Ok(self.float)
    }
}

fn any() -> RawValue {
    RawValue::from("any")
}

fn assert_float(setting: &Setting, expected: f64) {
    let Value::Float(actual) = setting.value() else {
        unreachable!("expected a float value, got {:?}", setting.value());
    };
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_init_setting() {
    let b = Setting::bool("bool", true);
    assert_eq!(b.default_value(), &Value::Bool(true));
    assert_eq!(b.value(), &Value::Bool(true));
    assert!(b.is_default());
    assert_eq!(b.kind(), SettingKind::Bool);
}

#[test]
fn test_every_kind_starts_at_default() {
    let settings = [
        Setting::bool("b", false),
        Setting::int("i", 3),
        Setting::float("f", 0.5),
        Setting::string("s", "default"),
        Setting::thumbnail_size("t", 256).unwrap(),
    ];

    assert!(settings.iter().all(Setting::is_default));
}

#[test]
fn test_check_default_after_change_for_setting() {
    let mut b = Setting::bool("bool", true);
    b.override_with(&"false".into(), &FixedConvert::boolean(false)).unwrap();

    assert!(!b.is_default());
    assert_eq!(b.default_value(), &Value::Bool(true));
}

#[test]
fn test_reset_restores_default() {
    let mut i = Setting::int("int", 1);
    i.override_value("7").unwrap();
    assert!(!i.is_default());

    i.reset();
    assert!(i.is_default());
    assert_eq!(i.value(), &Value::Int(1));
}

#[test]
fn test_override_with_same_value_stays_default() {
    let mut s = Setting::string("string", "default");
    s.override_value("default").unwrap();
    assert!(s.is_default());
}

#[test]
fn test_override_bool_setting() {
    let mut b = Setting::bool("bool", true);
    b.override_value("no").unwrap();
    assert_eq!(b.value(), &Value::Bool(false));
}

#[test]
fn test_toggle_bool_setting() {
    let mut b = Setting::bool("bool", false);
    b.toggle().unwrap();
    assert_eq!(b.value(), &Value::Bool(true));
    b.toggle().unwrap();
    assert!(b.is_default());
}

#[test]
fn test_toggle_rejected_for_int() {
    let mut i = Setting::int("int", 1);
    let err = i.toggle().unwrap_err();

    assert_eq!(
        err,
        SettingError::UnsupportedOperation {
            name: "int".to_string(),
            operation: "toggle",
            kind: SettingKind::Int,
        }
    );
    assert_eq!(i.value(), &Value::Int(1));
}

#[test]
fn test_override_int_setting() {
    let mut i = Setting::int("int", 1);
    i.override_with(&any(), &FixedConvert::int(2)).unwrap();
    assert_eq!(i.value(), &Value::Int(2));
}

#[test]
fn test_override_int_setting_rejects_text() {
    let mut i = Setting::int("int", 1);
    let err = i.override_value("many").unwrap_err();

    assert!(matches!(err, SettingError::TypeMismatch { .. }));
    assert_eq!(i.value(), &Value::Int(1));
}

#[test]
fn test_add_int_setting() {
    let mut i = Setting::int("int", 2);
    i.add_with(&any(), &FixedConvert::int(3)).unwrap();
    assert_eq!(i.value(), &Value::Int(5));
}

#[test]
fn test_multiply_int_setting() {
    let mut i = Setting::int("int", 5);
    i.multiply_with(&any(), &FixedConvert::int(2)).unwrap();
    assert_eq!(i.value(), &Value::Int(10));
}

#[test]
fn test_add_then_multiply_accumulates() {
    let mut i = Setting::int("int", 2);
    i.add("3").unwrap();
    i.multiply("2").unwrap();
    assert_eq!(i.value(), &Value::Int(10));
    assert_eq!(i.default_value(), &Value::Int(2));
}

#[test]
fn test_int_arithmetic_saturates() {
    let mut i = Setting::int("int", i64::MAX);
    i.add(RawValue::Int(1)).unwrap();
    assert_eq!(i.value(), &Value::Int(i64::MAX));
}

#[test]
fn test_override_float_setting() {
    let mut f = Setting::float("float", 2.2);
    f.override_with(&any(), &FixedConvert::float(3.3)).unwrap();
    assert_float(&f, 3.3);
}

#[test]
fn test_override_float_setting_rejects_nan() {
    let mut f = Setting::float("float", 2.2);
    assert!(matches!(
        f.override_value("nan"),
        Err(SettingError::TypeMismatch { .. })
    ));
    assert!(f.is_default());

    f.override_value("inf").unwrap_err();
    f.reset();
    assert!(f.is_default());
}

#[test]
fn test_add_float_setting() {
    let mut f = Setting::float("float", 1.1);
    f.add_with(&any(), &FixedConvert::float(0.3)).unwrap();
    assert_float(&f, 1.4);
}

#[test]
fn test_multiply_float_setting() {
    let mut f = Setting::float("float", 4.2);
    f.multiply_with(&any(), &FixedConvert::float(0.5)).unwrap();
    assert_float(&f, 2.1);
}

#[test]
fn test_add_rejected_for_bool() {
    let mut b = Setting::bool("bool", true);
    assert!(matches!(
        b.add("1"),
        Err(SettingError::UnsupportedOperation { operation: "add", .. })
    ));
}

#[test]
fn test_override_thumbnail_setting() {
    let mut t = Setting::thumbnail_size("thumb", 128).unwrap();
    t.override_with(&any(), &FixedConvert::int(64)).unwrap();
    assert_eq!(t.value(), &Value::ThumbnailSize(64));
}

#[test]
fn test_fail_override_thumbnail_setting() {
    let mut t = Setting::thumbnail_size("thumb", 128).unwrap();
    let err = t.override_with(&any(), &FixedConvert::int(13)).unwrap_err();

    assert!(matches!(err, SettingError::DomainViolation { .. }));
    assert!(err.to_string().contains("must be one of 64, 128, 256, 512"));
    assert_eq!(t.value(), &Value::ThumbnailSize(128));
}

#[test]
fn test_thumbnail_default_must_be_allowed() {
    let result = Setting::thumbnail_size("thumb", 100);
    assert!(matches!(result, Err(SettingError::DomainViolation { .. })));
}

#[test]
fn test_increase_thumbnail_size() {
    let mut t = Setting::thumbnail_size("thumb", 128).unwrap();
    t.increase().unwrap();
    assert_eq!(t.value(), &Value::ThumbnailSize(256));
}

#[test]
fn test_increase_thumbnail_size_at_limit() {
    let mut t = Setting::thumbnail_size("thumb", 512).unwrap();
    t.increase().unwrap();
    assert_eq!(t.value(), &Value::ThumbnailSize(512));
}

#[test]
fn test_increase_clamps_after_reaching_limit() {
    let mut t = Setting::thumbnail_size("thumb", 128).unwrap();
    for _ in 0..5 {
        t.increase().unwrap();
    }
    assert_eq!(t.value(), &Value::ThumbnailSize(512));
}

#[test]
fn test_decrease_thumbnail_size() {
    let mut t = Setting::thumbnail_size("thumb", 128).unwrap();
    t.decrease().unwrap();
    assert_eq!(t.value(), &Value::ThumbnailSize(64));
}

#[test]
fn test_decrease_thumbnail_size_at_limit() {
    let mut t = Setting::thumbnail_size("thumb", 64).unwrap();
    t.decrease().unwrap();
    assert_eq!(t.value(), &Value::ThumbnailSize(64));
}

#[test]
fn test_increase_rejected_for_float() {
    let mut f = Setting::float("float", 1.0);
    assert!(matches!(
        f.increase(),
        Err(SettingError::UnsupportedOperation { kind: SettingKind::Float, .. })
    ));
}

#[test]
fn test_override_str_setting() {
    let mut s = Setting::string("string", "default");
    s.override_value("new").unwrap();
    assert_eq!(s.value(), &Value::Str("new".to_string()));
}

#[test]
fn test_fail_override_str_setting() {
    let mut s = Setting::string("string", "default");
    let err = s.override_value(RawValue::Int(12)).unwrap_err();

    assert!(matches!(err, SettingError::TypeMismatch { .. }));
    assert!(err.to_string().contains("requires value of type str"));
    assert_eq!(s.value(), &Value::Str("default".to_string()));
}

#[test]
fn test_value_display() {
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Float(0.3).to_string(), "0.3");
    assert_eq!(Value::ThumbnailSize(256).to_string(), "256");
}
