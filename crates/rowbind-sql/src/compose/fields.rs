/// Restricts which resolved names take part in a statement.
///
/// A name takes part if it is in `include` (or `include` is unset) and is not
/// in `exclude`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

impl Fields {
    /// Every field.
    pub fn all() -> Fields {
        Fields::default()
    }

    pub fn include<I, S>(mut self, names: I) -> Fields
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn exclude<I, S>(mut self, names: I) -> Fields
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        let included = match &self.include {
            Some(include) => include.iter().any(|n| n == name),
            None => true,
        };

        let excluded = match &self.exclude {
            Some(exclude) => exclude.iter().any(|n| n == name),
            None => false,
        };

        included && !excluded
    }
}
