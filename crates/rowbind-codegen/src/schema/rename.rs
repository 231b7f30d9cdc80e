use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

/// Case convention applied to external names by `#[rename_all("...")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    PascalCase,
    CamelCase,
    SnakeCase,
    ScreamingSnakeCase,
}

impl RenameRule {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<RenameRule> {
        let lit: syn::LitStr = attr.parse_args()?;

        match lit.value().as_str() {
            "PascalCase" => Ok(RenameRule::PascalCase),
            "camelCase" => Ok(RenameRule::CamelCase),
            "snake_case" => Ok(RenameRule::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Ok(RenameRule::ScreamingSnakeCase),
            _ => Err(syn::Error::new_spanned(
                &lit,
                "expected one of \"PascalCase\", \"camelCase\", \"snake_case\", \"SCREAMING_SNAKE_CASE\"",
            )),
        }
    }

    pub(crate) fn apply(self, name: &str) -> String {
        match self {
            RenameRule::PascalCase => name.to_upper_camel_case(),
            RenameRule::CamelCase => name.to_lower_camel_case(),
            RenameRule::SnakeCase => name.to_snake_case(),
            RenameRule::ScreamingSnakeCase => name.to_shouty_snake_case(),
        }
    }
}
