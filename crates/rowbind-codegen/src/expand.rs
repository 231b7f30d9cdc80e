mod model;
mod schema;
mod util;

use crate::schema::{Model, ModelKind};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for rowbind types
    rowbind: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let register_impl = self.expand_register_impl();

        let model_impl = match self.model.kind {
            ModelKind::Model => self.expand_model_impl(),
            ModelKind::Metadata => quote!(),
        };

        wrap_in_const(quote! {
            #register_impl
            #model_impl
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        rowbind: quote!(_rowbind::codegen_support),
    }
    .expand()
}

pub(super) fn metadata(model: &Model) -> TokenStream {
    debug_assert_eq!(model.kind, ModelKind::Metadata);
    self::model(model)
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowbind as _rowbind;
            #code
        };
    }
}
