use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let model_ident = &self.model.ident;
        let model_name = model_ident.to_string();

        let get_arms = self.model.fields.iter().map(|field| {
            let index = util::int(field.id);
            let ident = &field.ident;
            let ty = &field.ty;

            quote! {
                #index => <#ty as #rowbind::stmt::Primitive>::into_value(
                    ::core::clone::Clone::clone(&self.#ident)
                ),
            }
        });

        let set_arms = self.model.fields.iter().map(|field| {
            let index = util::int(field.id);
            let ident = &field.ident;
            let ty = &field.ty;

            quote! {
                #index => self.#ident = <#ty as #rowbind::stmt::Primitive>::load(value)?,
            }
        });

        quote! {
            impl #rowbind::Model for #model_ident {
                fn field(&self, index: usize) -> #rowbind::stmt::Value {
                    match index {
                        #( #get_arms )*
                        _ => #rowbind::stmt::Value::Null,
                    }
                }

                #[allow(unreachable_code)]
                fn set_field(&mut self, index: usize, value: #rowbind::stmt::Value) -> #rowbind::Result<()> {
                    match index {
                        #( #set_arms )*
                        _ => {
                            return Err(#rowbind::Error::model_configuration(
                                #model_name,
                                format!("no field at index {index}"),
                            ))
                        }
                    }
                    Ok(())
                }
            }
        }
    }
}
