use super::{mapping, Direction, Field, Mapping, Model, Result};
use crate::Error;

use std::collections::HashSet;
use tracing::trace;

impl Mapping {
    /// Resolves the catalog of `model` for `direction`.
    ///
    /// The model's default metadata is layered first, then `supplemental`.
    /// A layered field that qualifies for `direction` replaces the entry of
    /// the same name in place, keeping the model's accessor. A layered field
    /// that does not qualify removes the entry.
    pub fn resolve(
        model: &Model,
        direction: Direction,
        supplemental: Option<&Model>,
    ) -> Result<Mapping> {
        model.verify()?;

        let mut fields: Vec<mapping::Field> = model
            .fields
            .iter()
            .filter(|field| field.qualifies(direction))
            .map(|field| descriptor(field, field.index, direction))
            .collect();

        if let Some(metadata) = model.default_metadata() {
            layer(model, &metadata, direction, &mut fields)?;
        }

        if let Some(metadata) = supplemental {
            layer(model, metadata, direction, &mut fields)?;
        }

        verify_names_are_unique(model, &fields)?;

        trace!(
            model = %model.name,
            %direction,
            fields = fields.len(),
            "resolved mapping"
        );

        Ok(Mapping {
            model: model.name.clone(),
            direction,
            fields,
        })
    }
}

fn descriptor(field: &Field, index: usize, direction: Direction) -> mapping::Field {
    mapping::Field {
        field_name: field.name.clone(),
        index,
        name: field.resolved_name(direction).to_string(),
        primary_key: field.primary_key,
        rule: field.rule(direction).cloned(),
    }
}

fn layer(
    model: &Model,
    metadata: &Model,
    direction: Direction,
    fields: &mut Vec<mapping::Field>,
) -> Result<()> {
    metadata.verify()?;

    for field in &metadata.fields {
        if !field.qualifies(direction) {
            fields.retain(|entry| entry.field_name != field.name);
            trace!(model = %model.name, metadata = %metadata.name, field = %field.name, "removed by metadata");
            continue;
        }

        if model.field(&field.name).is_none() {
            return Err(Error::configuration(
                &metadata.name,
                &field.name,
                format!("no field named `{}` on `{}`", field.name, model.name),
            ));
        }

        // Declared on the model but already filtered out for this direction
        let Some(entry) = fields
            .iter_mut()
            .find(|entry| entry.field_name == field.name)
        else {
            continue;
        };

        *entry = descriptor(field, entry.index, direction);
    }

    Ok(())
}

fn verify_names_are_unique(model: &Model, fields: &[mapping::Field]) -> Result<()> {
    let mut names = HashSet::new();

    for field in fields {
        if !names.insert(field.name.as_str()) {
            return Err(Error::configuration(
                &model.name,
                &field.field_name,
                format!("resolved name `{}` is used by more than one field", field.name),
            ));
        }
    }

    Ok(())
}
