mod expand;
mod schema;

use proc_macro2::TokenStream;

/// Expands `#[derive(Model)]`.
pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let model = schema::Model::from_ast(&item, schema::ModelKind::Model)?;

    Ok(expand::model(&model))
}

/// Expands `#[derive(Metadata)]`.
pub fn generate_metadata(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let model = schema::Model::from_ast(&item, schema::ModelKind::Metadata)?;

    Ok(expand::metadata(&model))
}
