/// A database index over one or more columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Index {
    /// Columns, in index order
    pub columns: Vec<String>,
}

impl Index {
    pub fn new<I>(columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn single(column: &str) -> Self {
        Self::new([column])
    }
}
