use super::{ErrorSet, Field, ModelAttr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModelKind {
    /// A mapped record with storage and accessors
    Model,

    /// A supplemental metadata type; declares rules only
    Metadata,
}

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields
    pub(crate) fields: Vec<Field>,

    pub(crate) kind: ModelKind,

    /// Type-level attributes
    pub(crate) attrs: ModelAttr,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct, kind: ModelKind) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut attrs = ModelAttr::default();
        attrs.populate_from_ast(&ast.attrs)?;

        if kind == ModelKind::Metadata {
            if let Some(metadata) = &attrs.metadata {
                return Err(syn::Error::new_spanned(
                    metadata,
                    "metadata types cannot declare #[metadata]",
                ));
            }
        }

        let mut errs = ErrorSet::new();
        let mut fields = vec![];

        for (id, node) in node.named.iter().enumerate() {
            match Field::from_ast(node, id, attrs.rename_all) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Model {
            ident: ast.ident.clone(),
            fields,
            kind,
            attrs,
        })
    }
}
