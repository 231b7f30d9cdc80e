use super::{ErrorSet, RenameRule};

#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Default supplemental metadata type: `#[metadata(Type)]`
    pub(crate) metadata: Option<syn::Path>,

    /// Case convention for external names: `#[rename_all("...")]`
    pub(crate) rename_all: Option<RenameRule>,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if attr.path().is_ident("metadata") {
                if self.metadata.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[metadata] attribute",
                    ));
                } else {
                    self.metadata = Some(attr.parse_args()?);
                }
            } else if attr.path().is_ident("rename_all") {
                if self.rename_all.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[rename_all] attribute",
                    ));
                } else {
                    self.rename_all = Some(RenameRule::from_ast(attr)?);
                }
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
