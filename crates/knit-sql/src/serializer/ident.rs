use super::{Formatter, Params, ToSql};

/// A single quoted identifier.
pub(super) struct Ident<S>(pub(super) S);

/// A possibly qualified column reference such as `users.id` or `users.*`.
///
/// Anything that is not a plain reference (`COUNT(*) AS n`, `lower(name)`)
/// is written verbatim.
pub(super) struct Name<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let quote = f.serializer.flavor.quote();

        f.dst.push(quote);
        for ch in self.0.as_ref().chars() {
            if ch == quote {
                f.dst.push(quote);
            }
            f.dst.push(ch);
        }
        f.dst.push(quote);
    }
}

impl<S: AsRef<str>> ToSql for Name<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let name = self.0.as_ref().trim();

        if !is_reference(name) {
            f.dst.push_str(name);
            return;
        }

        let mut s = "";
        for segment in name.split('.') {
            fmt!(f, s);
            if segment == "*" {
                f.dst.push('*');
            } else {
                Ident(segment).to_sql(f);
            }
            s = ".";
        }
    }
}

fn is_reference(name: &str) -> bool {
    let segments: Vec<_> = name.split('.').collect();
    let last = segments.len() - 1;

    segments.iter().enumerate().all(|(i, segment)| {
        (i == last && *segment == "*") || is_identifier(segment)
    })
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
