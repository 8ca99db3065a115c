use super::{
    expr::{TableRef, Where},
    Comma, Flavor, Formatter, Ident, Name, Params, ToSql,
};

use knit_core::stmt::{Delete, Insert, Options, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::Select(options) => select(options, f),
            Statement::Count(options) => count(options, f),
            Statement::Insert(insert) => insert.to_sql(f),
            Statement::Delete(delete) => delete.to_sql(f),
        }
    }
}

fn select<P: Params>(options: &Options, f: &mut Formatter<'_, P>) {
    fmt!(f, "SELECT ");

    match &options.fields {
        Some(fields) if !fields.is_wildcard() => {
            let names = fields.clone().into_list();
            fmt!(f, Comma(names.iter().map(Name)));
        }
        _ => fmt!(f, "*"),
    }

    source(options, f);
    group_by(options, f);

    if !options.order_by.is_empty() {
        fmt!(f, " ORDER BY " Comma(&options.order_by));
    }

    match (options.limit, options.offset) {
        (Some(limit), offset) => {
            fmt!(f, " LIMIT " limit);
            if let Some(offset) = offset {
                fmt!(f, " OFFSET " offset);
            }
        }
        // Both dialects require a LIMIT before OFFSET.
        (None, Some(offset)) => {
            let unbounded = match f.serializer.flavor {
                Flavor::Sqlite => " LIMIT -1",
                Flavor::Mysql => " LIMIT 18446744073709551615",
            };
            fmt!(f, unbounded " OFFSET " offset);
        }
        (None, None) => {}
    }
}

fn count<P: Params>(options: &Options, f: &mut Formatter<'_, P>) {
    fmt!(f, "SELECT COUNT(*) AS " Ident("count"));

    if options.group_by.is_empty() {
        source(options, f);
        return;
    }

    // Count groups, not rows.
    fmt!(f, " FROM (SELECT " Comma(options.group_by.iter().map(Name)));
    source(options, f);
    group_by(options, f);
    fmt!(f, ") AS " Ident("grouped"));
}

fn group_by<P: Params>(options: &Options, f: &mut Formatter<'_, P>) {
    if !options.group_by.is_empty() {
        fmt!(f, " GROUP BY " Comma(options.group_by.iter().map(Name)));
    }
}

/// `FROM ... JOIN ... WHERE ...`
fn source<P: Params>(options: &Options, f: &mut Formatter<'_, P>) {
    fmt!(f, " FROM " TableRef(&options.table, options.alias.as_deref()));

    for join in &options.joins {
        join.to_sql(f);
    }

    Where(&options.filters).to_sql(f);
}

impl ToSql for &Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "INSERT INTO " Ident(&self.table));

        if self.record.is_empty() {
            let empty = match f.serializer.flavor {
                Flavor::Sqlite => " DEFAULT VALUES",
                Flavor::Mysql => " () VALUES ()",
            };
            fmt!(f, empty);
            return;
        }

        let columns = self.record.iter().map(|(column, _)| Ident(column));
        let values = self.record.iter().map(|(_, value)| value);

        fmt!(f, " (" Comma(columns) ") VALUES (" Comma(values) ")");
    }
}

impl ToSql for &Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match (f.serializer.flavor, self.alias.as_deref()) {
            // MySQL names the alias being deleted from before `FROM`.
            (Flavor::Mysql, Some(alias)) => {
                fmt!(f, "DELETE " Ident(alias) " FROM " TableRef(&self.table, Some(alias)));
            }
            (_, alias) => {
                fmt!(f, "DELETE FROM " TableRef(&self.table, alias));
            }
        }

        Where(&self.filters).to_sql(f);
    }
}
