use crate::{
    row::RowSource,
    schema::{Direction, Mapping},
    stmt::Value,
    Error, Model, Result,
};

/// Builds a new `M` from values returned by `fetch`.
///
/// `fetch` is called once per descriptor with the descriptor's resolved name.
/// Absent and null values leave the field at its default, unless the field's
/// rule substitutes a default for nulls.
pub fn populate<M: Model>(
    catalog: &Mapping,
    mut fetch: impl FnMut(&str) -> Option<Value>,
) -> Result<M> {
    expect_direction(catalog, Direction::ResultToModel)?;

    let mut model = M::default();

    for field in catalog {
        let value = field.convert(fetch(&field.name).unwrap_or_default());

        let assigned = match value {
            Ok(value) if value.is_null() => continue,
            Ok(value) => model.set_field(field.index, value),
            Err(err) => Err(err),
        };

        assigned.map_err(|err| {
            err.context(format!("loading `{}.{}`", catalog.model, field.field_name))
        })?;
    }

    Ok(model)
}

/// Builds a new `M` from a row.
pub fn load<M: Model>(row: &impl RowSource, catalog: &Mapping) -> Result<M> {
    populate(catalog, |name| row.value_of(name))
}

/// Builds one `M` per row, in row order.
pub fn load_all<'a, M, R>(rows: impl IntoIterator<Item = &'a R>, catalog: &Mapping) -> Result<Vec<M>>
where
    M: Model,
    R: RowSource + 'a,
{
    rows.into_iter().map(|row| load(row, catalog)).collect()
}

pub(super) fn expect_direction(catalog: &Mapping, direction: Direction) -> Result<()> {
    if catalog.direction != direction {
        return Err(Error::model_configuration(
            &catalog.model,
            format!(
                "mapping was resolved for {}, but is used for {direction}",
                catalog.direction
            ),
        ));
    }
    Ok(())
}
