use super::{Direction, Model, Result};
use crate::Error;

use std::collections::HashSet;

pub(super) fn verify(model: &Model) -> Result<()> {
    verify_field_names_are_unique(model)?;
    verify_one_rule_per_direction(model)?;
    verify_metadata_is_not_self(model)?;
    Ok(())
}

fn verify_field_names_are_unique(model: &Model) -> Result<()> {
    let mut names = HashSet::new();

    for field in &model.fields {
        if !names.insert(field.name.as_str()) {
            return Err(Error::configuration(
                &model.name,
                &field.name,
                "field is declared more than once",
            ));
        }
    }

    Ok(())
}

fn verify_one_rule_per_direction(model: &Model) -> Result<()> {
    for field in &model.fields {
        for direction in [Direction::ResultToModel, Direction::ModelToParameter] {
            let count = field
                .rules
                .iter()
                .filter(|rule| rule.direction == direction)
                .count();

            if count > 1 {
                return Err(Error::configuration(
                    &model.name,
                    &field.name,
                    format!("{count} conversion rules declared for {direction}; at most one is allowed"),
                ));
            }
        }
    }

    Ok(())
}

/// A model only holds a pointer to its metadata, never to its own schema
/// function, so a self reference is recognized two ways: the returned table
/// declares the same metadata function, or it repeats the model's name and
/// field names exactly. A different type that shares the name is allowed.
fn verify_metadata_is_not_self(model: &Model) -> Result<()> {
    let (Some(own), Some(metadata)) = (model.metadata, model.default_metadata()) else {
        return Ok(());
    };

    let same_pointer = metadata.metadata.is_some_and(|other| other as usize == own as usize);
    let same_table = metadata.name == model.name
        && metadata
            .fields
            .iter()
            .map(|field| &field.name)
            .eq(model.fields.iter().map(|field| &field.name));

    if same_pointer || same_table {
        return Err(Error::model_configuration(
            &model.name,
            "a model cannot be its own default metadata",
        ));
    }

    Ok(())
}
