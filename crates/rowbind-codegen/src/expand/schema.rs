use super::{util, Expand};
use crate::schema::{Access, Convert, ConvertKind, Direction, Field};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_register_impl(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let model_ident = &self.model.ident;
        let model_name = model_ident.to_string();
        let fields = self.model.fields.iter().map(|field| self.expand_field(field));

        let metadata = match &self.model.attrs.metadata {
            Some(path) => quote!(Some(<#path as #rowbind::Register>::schema)),
            None => quote!(None),
        };

        quote! {
            impl #rowbind::Register for #model_ident {
                fn schema() -> #rowbind::schema::Model {
                    #rowbind::schema::Model {
                        name: #model_name.to_string(),
                        fields: vec![ #( #fields ),* ],
                        metadata: #metadata,
                    }
                }
            }
        }
    }

    fn expand_field(&self, field: &Field) -> TokenStream {
        let rowbind = &self.rowbind;
        let name = &field.name;
        let index = util::int(field.id);
        let attrs = &field.attrs;

        let mut setters = vec![];

        if attrs.key {
            setters.push(quote!(field.primary_key = true;));
        }

        match attrs.access {
            Access::ReadWrite => {}
            Access::ReadOnly => {
                setters.push(quote!(field.access = #rowbind::schema::Access::READ_ONLY;))
            }
            Access::WriteOnly => {
                setters.push(quote!(field.access = #rowbind::schema::Access::WRITE_ONLY;))
            }
        }

        if attrs.skip_result {
            setters.push(quote!(field.skip_result = true;));
        }

        if attrs.skip_param {
            setters.push(quote!(field.skip_param = true;));
        }

        if let Some(column) = attrs.column.as_ref().or(attrs.rename.as_ref()) {
            setters.push(quote!(field.column_name = Some(#column.to_string());));
        }

        if let Some(param) = attrs.param.as_ref().or(attrs.rename.as_ref()) {
            setters.push(quote!(field.param_name = Some(#param.to_string());));
        }

        for convert in &attrs.converts {
            let rule = self.expand_rule(convert);
            setters.push(quote!(field.rules.push(#rule);));
        }

        quote! {{
            #[allow(unused_mut)]
            let mut field = #rowbind::schema::Field::new(#name, #index);
            #( #setters )*
            field
        }}
    }

    fn expand_rule(&self, convert: &Convert) -> TokenStream {
        let rowbind = &self.rowbind;
        let direction = match convert.direction() {
            Direction::Result => quote!(#rowbind::Direction::ResultToModel),
            Direction::Param => quote!(#rowbind::Direction::ModelToParameter),
        };

        let rule = match &convert.kind {
            ConvertKind::JoinInts => quote!(#rowbind::Rule::join_ints()),
            ConvertKind::JoinStrings => quote!(#rowbind::Rule::join_strings()),
            ConvertKind::SplitInts => quote!(#rowbind::Rule::split_ints()),
            ConvertKind::SplitStrings => quote!(#rowbind::Rule::split_strings()),
            ConvertKind::Default(expr) => quote!(#rowbind::Rule::default_if_null(#expr)),
            ConvertKind::With(expr) => {
                return quote!(#rowbind::Rule::custom(#direction, #expr));
            }
        };

        quote!(#rule.with_direction(#direction))
    }
}
