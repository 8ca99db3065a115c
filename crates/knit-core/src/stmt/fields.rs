/// Field selection as configured on a query.
#[derive(Debug, Clone, PartialEq)]
pub enum Fields {
    /// A single string, either `*` or a comma-separated list.
    Raw(String),

    /// Individual field names.
    List(Vec<String>),
}

impl Fields {
    /// True when no field name is selected, or for the bare `*` wildcard.
    pub fn is_wildcard(&self) -> bool {
        match self {
            Fields::Raw(raw) => raw.trim() == "*" || names(raw.split(',')).next().is_none(),
            Fields::List(list) => names(list.iter().map(String::as_str)).next().is_none(),
        }
    }

    /// The selected names. Raw strings are split on commas; blank entries
    /// are dropped.
    pub fn into_list(self) -> Vec<String> {
        match self {
            Fields::Raw(raw) => names(raw.split(',')).map(String::from).collect(),
            Fields::List(list) => list
                .into_iter()
                .filter(|name| !name.trim().is_empty())
                .map(|name| name.trim().to_string())
                .collect(),
        }
    }
}

fn names<'a>(pieces: impl Iterator<Item = &'a str>) -> impl Iterator<Item = &'a str> {
    pieces.map(str::trim).filter(|name| !name.is_empty())
}

impl From<&str> for Fields {
    fn from(value: &str) -> Self {
        Fields::Raw(value.to_string())
    }
}

impl From<String> for Fields {
    fn from(value: String) -> Self {
        Fields::Raw(value)
    }
}

impl From<Vec<String>> for Fields {
    fn from(value: Vec<String>) -> Self {
        Fields::List(value)
    }
}

impl From<Vec<&str>> for Fields {
    fn from(value: Vec<&str>) -> Self {
        Fields::List(value.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Fields {
    fn from(value: [&str; N]) -> Self {
        Fields::List(value.into_iter().map(String::from).collect())
    }
}

impl From<Selection> for Fields {
    fn from(value: Selection) -> Self {
        match value {
            Selection::All(all) => Fields::Raw(all),
            Selection::List(list) => Fields::List(list),
        }
    }
}

/// Field selection after qualification with a table alias.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// `<alias>.*`
    All(String),

    /// Every entry carries a qualifier.
    List(Vec<String>),
}

impl Selection {
    pub fn as_all(&self) -> Option<&str> {
        match self {
            Selection::All(all) => Some(all),
            Selection::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Selection::All(_) => None,
            Selection::List(list) => Some(list),
        }
    }
}
