use super::{Condition, Fields, Filter, Op, Selection};

/// Qualifies every unqualified field name with `alias`.
///
/// An empty selection or `*` becomes `<alias>.*`. Raw strings are split on
/// commas first. Names that already contain `.` are kept as written.
pub fn qualify_fields(fields: Option<&Fields>, alias: &str) -> Selection {
    let fields = match fields {
        Some(fields) if !fields.is_wildcard() => fields.clone(),
        _ => return Selection::All(format!("{alias}.*")),
    };

    Selection::List(
        fields
            .into_list()
            .into_iter()
            .map(|field| qualify(field, alias))
            .collect(),
    )
}

/// Rewrites a where list so every condition is a triple scoped to `alias`.
///
/// Conditions keep their position and get `alias` prefixed when their field
/// is unqualified. Keyed entries are moved to the end, in order, as equality
/// conditions. A keyed entry whose key already contains `.` keeps the key
/// verbatim.
pub fn qualify_where(filters: Vec<Filter>, alias: &str) -> Vec<Filter> {
    let mut conditions = Vec::with_capacity(filters.len());
    let mut keyed = vec![];

    for filter in filters {
        match filter {
            Filter::Condition(mut cond) => {
                cond.field = qualify(cond.field, alias);
                conditions.push(Filter::Condition(cond));
            }
            Filter::Keyed { key, value } => {
                keyed.push(Filter::Condition(Condition {
                    field: qualify(key, alias),
                    op: Op::Eq,
                    value,
                }));
            }
        }
    }

    conditions.extend(keyed);
    conditions
}

fn qualify(field: String, alias: &str) -> String {
    if field.contains('.') {
        field
    } else {
        format!("{alias}.{field}")
    }
}
