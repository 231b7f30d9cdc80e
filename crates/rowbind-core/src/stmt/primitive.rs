use super::Value;
use crate::{Error, Result};

/// A Rust type that can be stored in a mapped model field.
///
/// Generated model accessors go through this trait to move field values in
/// and out of [`Value`].
pub trait Primitive: Sized {
    fn load(value: Value) -> Result<Self>;

    fn into_value(self) -> Value;
}

impl Primitive for bool {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::I32(v) => Ok(v != 0),
            Value::I64(v) => Ok(v != 0),
            _ => Err(Error::type_conversion(value, "bool")),
        }
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl Primitive for i32 {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I32(v) => Ok(v),
            Value::I64(v) => i32::try_from(v).map_err(|_| Error::type_conversion(value, "i32")),
            _ => Err(Error::type_conversion(value, "i32")),
        }
    }

    fn into_value(self) -> Value {
        Value::I32(self)
    }
}

impl Primitive for i64 {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I32(v) => Ok(v.into()),
            Value::I64(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "i64")),
        }
    }

    fn into_value(self) -> Value {
        Value::I64(self)
    }
}

impl Primitive for f64 {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I32(v) => Ok(v.into()),
            _ => Err(Error::type_conversion(value, "f64")),
        }
    }

    fn into_value(self) -> Value {
        Value::F64(self)
    }
}

impl Primitive for String {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "String")),
        }
    }

    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl Primitive for Vec<u8> {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }

    fn into_value(self) -> Value {
        Value::Bytes(self)
    }
}

macro_rules! impl_list {
    ( $( $ty:ty => $name:literal ),* ) => {
        $(
            impl Primitive for Vec<$ty> {
                fn load(value: Value) -> Result<Self> {
                    match value {
                        Value::List(items) => items.into_iter().map(<$ty>::load).collect(),
                        _ => Err(Error::type_conversion(value, $name)),
                    }
                }

                fn into_value(self) -> Value {
                    Value::List(self.into_iter().map(Primitive::into_value).collect())
                }
            }
        )*
    };
}

impl_list!(i32 => "Vec<i32>", i64 => "Vec<i64>", String => "Vec<String>");

impl<T: Primitive> Primitive for Option<T> {
    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }
}
