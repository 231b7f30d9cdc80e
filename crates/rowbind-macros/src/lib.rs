extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(
    Model,
    attributes(
        key, rename, column, param, skip, readonly, writeonly, convert, metadata, rename_all
    )
)]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match rowbind_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[proc_macro_derive(
    Metadata,
    attributes(key, rename, column, param, skip, readonly, writeonly, convert, rename_all)
)]
pub fn derive_metadata(input: TokenStream) -> TokenStream {
    match rowbind_codegen::generate_metadata(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
