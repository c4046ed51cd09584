/// A value that can be multiplied by a scale factor without changing
/// its shape. Arrays scale element-wise; non-numeric leaves are kept.
pub trait Scalable: Sized {
    fn scaled(self, factor: f64) -> Self;
}

impl Scalable for f64 {
    fn scaled(self, factor: f64) -> Self {
        self * factor
    }
}

impl Scalable for f32 {
    fn scaled(self, factor: f64) -> Self {
        (f64::from(self) * factor) as f32
    }
}

impl<T: Scalable> Scalable for Vec<T> {
    fn scaled(self, factor: f64) -> Self {
        self.into_iter().map(|v| v.scaled(factor)).collect()
    }
}

impl<T: Scalable, const N: usize> Scalable for [T; N] {
    fn scaled(self, factor: f64) -> Self {
        self.map(|v| v.scaled(factor))
    }
}

impl Scalable for serde_json::Value {
    fn scaled(self, factor: f64) -> Self {
        use serde_json::Value;
        match self {
            Value::Number(n) => match n.as_f64() {
                Some(x) => serde_json::Number::from_f64(x * factor)
                    .map(Value::Number)
                    .unwrap_or(Value::Null),
                None => Value::Number(n),
            },
            Value::Array(arr) => Value::Array(arr.scaled(factor)),
            other => other,
        }
    }
}

impl Scalable for toml::Value {
    fn scaled(self, factor: f64) -> Self {
        use toml::Value;
        match self {
            Value::Integer(i) => Value::Float(i as f64 * factor),
            Value::Float(x) => Value::Float(x * factor),
            Value::Array(arr) => Value::Array(arr.scaled(factor)),
            other => other,
        }
    }
}
