use super::{Flavor, Formatter, Params, Period, ToSql};

/// A quoted identifier. Embedded closing delimiters are doubled.
pub(super) struct Ident<S>(pub(super) S);

/// A possibly schema-qualified name such as `dbo.Users`; each segment is
/// quoted on its own.
pub(super) struct Name<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let (open, close) = match f.serializer.flavor {
            Flavor::SqlServer => ('[', ']'),
            Flavor::Postgresql | Flavor::Sqlite => ('"', '"'),
        };

        f.dst.push(open);
        for c in self.0.as_ref().chars() {
            if c == close {
                f.dst.push(close);
            }
            f.dst.push(c);
        }
        f.dst.push(close);
    }
}

impl<S: AsRef<str>> ToSql for Name<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        Period(self.0.as_ref().split('.').map(Ident)).to_sql(f);
    }
}
