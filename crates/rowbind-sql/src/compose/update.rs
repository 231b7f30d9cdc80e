use super::{Composer, Fields};
use crate::stmt::{Assignment, Statement, Update};

use rowbind_core::{bail, convert, Direction, Error, Model, Result};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOptions {
    pub fields: Fields,

    /// Leave null fields out of the SET list. Defaults to `true`.
    pub skip_null: bool,

    /// Names routed to the WHERE clause. When set, replaces the primary key
    /// flags of the mapping.
    pub primary_keys: Option<Vec<String>>,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        UpdateOptions {
            fields: Fields::all(),
            skip_null: true,
            primary_keys: None,
        }
    }
}

impl UpdateOptions {
    pub fn new() -> UpdateOptions {
        UpdateOptions::default()
    }

    pub fn fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }

    pub fn skip_null(mut self, skip_null: bool) -> Self {
        self.skip_null = skip_null;
        self
    }

    pub fn primary_keys<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_keys = Some(names.into_iter().map(Into::into).collect());
        self
    }

    fn is_key(&self, name: &str, primary_key: bool) -> bool {
        match &self.primary_keys {
            Some(keys) => keys.iter().any(|key| key == name),
            None => primary_key,
        }
    }
}

impl Composer {
    /// Builds `UPDATE table SET ... WHERE ...` from `model`.
    ///
    /// Key fields go to the WHERE clause and never to the SET list. A key
    /// with a null value is not bound.
    pub fn update<M: Model>(
        &self,
        table: &str,
        model: &M,
        options: &UpdateOptions,
    ) -> Result<Statement> {
        let mapping = self.mapping::<M>(Direction::ModelToParameter)?;

        let mut assignments = vec![];
        let mut filter = vec![];

        convert::extract(model, &mapping, false, |name, value, primary_key| {
            if !options.fields.contains(name) {
                return;
            }

            if options.is_key(name, primary_key) {
                if !value.is_null() {
                    filter.push(Assignment::new(name, value));
                }
            } else if !(options.skip_null && value.is_null()) {
                assignments.push(Assignment::new(name, value));
            }
        })?;

        if let Some(keys) = &options.primary_keys {
            // WHERE follows the order the keys were given in
            let mut ordered = Vec::with_capacity(keys.len());
            for key in keys {
                let Some(pos) = filter.iter().position(|a: &Assignment| &a.column == key) else {
                    return Err(Error::configuration(
                        &mapping.model,
                        key,
                        "primary key has no bound value",
                    ));
                };
                ordered.push(filter.swap_remove(pos));
            }
            filter = ordered;
        }

        if assignments.is_empty() {
            bail!("UPDATE {table} has no columns to set");
        }

        if filter.is_empty() {
            self.hazard(format!("UPDATE {table} has no primary key; every row is updated"))?;
        }

        debug!(
            table,
            columns = assignments.len(),
            keys = filter.len(),
            "composed update"
        );

        Ok(Update {
            table: table.to_string(),
            assignments,
            filter,
        }
        .into())
    }
}
