use super::{Convert, ErrorSet, RenameRule};

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing model
    pub(crate) id: usize,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field name, as matched by supplemental metadata
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// True if the field is annotated with `#[key]`
    pub(crate) key: bool,

    /// Name override for both directions: `#[rename("...")]`
    pub(crate) rename: Option<syn::LitStr>,

    /// Result direction name override: `#[column("...")]`
    pub(crate) column: Option<syn::LitStr>,

    /// Parameter direction name override: `#[param("...")]`
    pub(crate) param: Option<syn::LitStr>,

    /// `#[skip(result)]`
    pub(crate) skip_result: bool,

    /// `#[skip(param)]`
    pub(crate) skip_param: bool,

    pub(crate) access: Access,

    /// Conversion rules, at most one per direction
    pub(crate) converts: Vec<Convert>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    #[default]
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

impl Field {
    pub(super) fn from_ast(
        field: &syn::Field,
        id: usize,
        rename_all: Option<RenameRule>,
    ) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    attrs.key = true;
                }
            } else if attr.path().is_ident("rename") {
                set_name(&mut attrs.rename, attr, "rename", &mut errs)?;
            } else if attr.path().is_ident("column") {
                set_name(&mut attrs.column, attr, "column", &mut errs)?;
            } else if attr.path().is_ident("param") {
                set_name(&mut attrs.param, attr, "param", &mut errs)?;
            } else if attr.path().is_ident("skip") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("result") {
                        attrs.skip_result = true;
                    } else if meta.path.is_ident("param") {
                        attrs.skip_param = true;
                    } else {
                        return Err(meta.error("expected `result` or `param`"));
                    }
                    Ok(())
                })?;
            } else if attr.path().is_ident("readonly") || attr.path().is_ident("writeonly") {
                let access = if attr.path().is_ident("readonly") {
                    Access::ReadOnly
                } else {
                    Access::WriteOnly
                };

                if attrs.access != Access::ReadWrite {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "field has more than one access attribute",
                    ));
                } else {
                    attrs.access = access;
                }
            } else if attr.path().is_ident("convert") {
                let convert = Convert::from_ast(attr)?;

                if attrs
                    .converts
                    .iter()
                    .any(|other| other.direction() == convert.direction())
                {
                    errs.push(syn::Error::new_spanned(
                        &convert.attr,
                        "field has more than one conversion for this direction",
                    ));
                } else {
                    attrs.converts.push(convert);
                }
            }
        }

        if attrs.rename.is_some() && (attrs.column.is_some() || attrs.param.is_some()) {
            errs.push(syn::Error::new_spanned(
                ident,
                "#[rename] cannot be combined with #[column] or #[param]",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let name = ident.to_string();
        let name = name.strip_prefix("r#").unwrap_or(&name).to_string();

        // `rename_all` only fills in names that were not given explicitly
        if let Some(rule) = rename_all {
            let renamed = rule.apply(&name);
            if renamed != name && attrs.rename.is_none() {
                let lit = syn::LitStr::new(&renamed, ident.span());
                attrs.column.get_or_insert_with(|| lit.clone());
                attrs.param.get_or_insert(lit);
            }
        }

        Ok(Field {
            id,
            attrs,
            ident: ident.clone(),
            name,
            ty: field.ty.clone(),
        })
    }
}

fn set_name(
    slot: &mut Option<syn::LitStr>,
    attr: &syn::Attribute,
    label: &str,
    errs: &mut ErrorSet,
) -> syn::Result<()> {
    if slot.is_some() {
        errs.push(syn::Error::new_spanned(
            attr,
            format!("duplicate #[{label}] attribute"),
        ));
    } else {
        *slot = Some(attr.parse_args()?);
    }
    Ok(())
}
