use super::load::expect_direction;
use crate::{
    schema::{Direction, Mapping},
    stmt::Value,
    Model, Result,
};

/// Reads the fields of `model` named by `catalog` and hands each one to
/// `emit` as `(name, value, primary_key)`, in catalog order.
///
/// With `skip_null`, fields whose value is null, or whose rule converts them
/// to null, are not emitted at all. Without it they are emitted as
/// [`Value::Null`].
pub fn extract<M: Model>(
    model: &M,
    catalog: &Mapping,
    skip_null: bool,
    mut emit: impl FnMut(&str, Value, bool),
) -> Result<()> {
    expect_direction(catalog, Direction::ModelToParameter)?;

    for field in catalog {
        let value = field.convert(model.field(field.index)).map_err(|err| {
            err.context(format!("extracting `{}.{}`", catalog.model, field.field_name))
        })?;

        if value.is_null() && skip_null {
            continue;
        }

        emit(&field.name, value, field.primary_key);
    }

    Ok(())
}
