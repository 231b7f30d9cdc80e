/// A conversion rule declared with `#[convert(...)]`.
///
/// Allowed syntax:
///
/// ```text
/// #[convert(join_ints)]
/// #[convert(split_strings, direction = param)]
/// #[convert(default = 0)]
/// #[convert(with = Trim, direction = result)]
/// ```
#[derive(Debug)]
pub(crate) struct Convert {
    pub(crate) kind: ConvertKind,

    /// Explicit direction; rules other than `with` have a default one
    pub(crate) direction: Option<Direction>,

    /// The attribute, for error reporting
    pub(crate) attr: syn::Attribute,
}

#[derive(Debug)]
pub(crate) enum ConvertKind {
    JoinInts,
    JoinStrings,
    SplitInts,
    SplitStrings,
    Default(syn::Expr),
    With(syn::Expr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Result,
    Param,
}

impl Convert {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Convert> {
        let mut kind = None;
        let mut direction = None;

        attr.parse_nested_meta(|meta| {
            let parsed = if meta.path.is_ident("join_ints") {
                ConvertKind::JoinInts
            } else if meta.path.is_ident("join_strings") {
                ConvertKind::JoinStrings
            } else if meta.path.is_ident("split_ints") {
                ConvertKind::SplitInts
            } else if meta.path.is_ident("split_strings") {
                ConvertKind::SplitStrings
            } else if meta.path.is_ident("default") {
                ConvertKind::Default(meta.value()?.parse()?)
            } else if meta.path.is_ident("with") {
                ConvertKind::With(meta.value()?.parse()?)
            } else if meta.path.is_ident("direction") {
                if direction.is_some() {
                    return Err(meta.error("duplicate `direction`"));
                }

                let ident: syn::Ident = meta.value()?.parse()?;
                direction = Some(if ident == "result" {
                    Direction::Result
                } else if ident == "param" {
                    Direction::Param
                } else {
                    return Err(syn::Error::new_spanned(
                        &ident,
                        "expected `result` or `param`",
                    ));
                });
                return Ok(());
            } else {
                return Err(meta.error(
                    "expected `join_ints`, `join_strings`, `split_ints`, `split_strings`, `default = <expr>` or `with = <expr>`",
                ));
            };

            if kind.is_some() {
                return Err(meta.error("#[convert] takes a single conversion"));
            }

            kind = Some(parsed);
            Ok(())
        })?;

        let Some(kind) = kind else {
            return Err(syn::Error::new_spanned(attr, "expected a conversion"));
        };

        if matches!(kind, ConvertKind::With(_)) && direction.is_none() {
            return Err(syn::Error::new_spanned(
                attr,
                "`with` conversions must specify `direction = result` or `direction = param`",
            ));
        }

        Ok(Convert {
            kind,
            direction,
            attr: attr.clone(),
        })
    }

    /// The direction the rule applies in, after defaults.
    pub(crate) fn direction(&self) -> Direction {
        if let Some(direction) = self.direction {
            return direction;
        }

        match self.kind {
            ConvertKind::JoinInts | ConvertKind::JoinStrings => Direction::Param,
            ConvertKind::SplitInts
            | ConvertKind::SplitStrings
            | ConvertKind::Default(_)
            | ConvertKind::With(_) => Direction::Result,
        }
    }
}
