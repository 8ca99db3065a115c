#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
}

/// `<kind> JOIN <table> AS <alias> ON <left> = <right>`
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub kind: JoinKind,
    pub table: String,
    pub alias: Option<String>,

    /// Qualified column on the already-joined side
    pub left: String,

    /// Qualified column on the joined table
    pub right: String,
}

impl Join {
    pub fn inner(
        table: impl Into<String>,
        alias: Option<&str>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Join {
        Join {
            kind: JoinKind::Inner,
            table: table.into(),
            alias: alias.map(String::from),
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn left(
        table: impl Into<String>,
        alias: Option<&str>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Join {
        Join {
            kind: JoinKind::Left,
            ..Join::inner(table, alias, left, right)
        }
    }
}
