use super::{Comma, Delimited, Formatter, Ident, Name, Params, ToSql};

use crate::stmt::{self, Assignment, Projection, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "DELETE FROM ", Name(&self.table), Filter(&self.filter));
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let columns = Comma(self.values.iter().map(|value| Ident(&value.column)));
        let values = Comma(self.values.iter().map(Bind));

        fmt!(
            f,
            "INSERT INTO ",
            Name(&self.table),
            " (",
            columns,
            ") VALUES (",
            values,
            ")"
        );
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "SELECT ");

        match &self.projection {
            Projection::All => fmt!(f, "*"),
            Projection::Columns(columns) => fmt!(f, Comma(columns.iter().map(Ident))),
        }

        fmt!(f, " FROM ", Name(&self.table), Filter(&self.filter));
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(
            f,
            "UPDATE ",
            Name(&self.table),
            " SET ",
            Comma(&self.assignments),
            Filter(&self.filter)
        );
    }
}

impl ToSql for &Assignment {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Ident(&self.column), " = ", Bind(self));
    }
}

/// The placeholder of an assignment, binding its value.
struct Bind<'a>(&'a Assignment);

impl ToSql for Bind<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(&self.0.column, &self.0.value);
        placeholder.to_sql(f);
    }
}

/// ` WHERE a = @a AND b = @b`, or nothing for an empty filter.
struct Filter<'a>(&'a [Assignment]);

impl ToSql for Filter<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if !self.0.is_empty() {
            fmt!(f, " WHERE ", Delimited(self.0, " AND "));
        }
    }
}
