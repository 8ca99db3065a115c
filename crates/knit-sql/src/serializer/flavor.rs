use super::Serializer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Sqlite,
    Mysql,
}

impl Flavor {
    /// Opening and closing identifier quote.
    pub(super) fn quote(self) -> char {
        match self {
            Flavor::Sqlite => '"',
            Flavor::Mysql => '`',
        }
    }
}

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }
}
