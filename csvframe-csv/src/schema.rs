use csvframe_column_map::ColumnType;
use csvframe_result::{Error, Result};

/// Positional layout of a CSV source: field `i` of every data row becomes
/// column `names[i]`, cast to `types[i]`.
///
/// Names are independent of whatever header text the source carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSchema {
    names: Vec<String>,
    types: Vec<ColumnType>,
}

impl IngestSchema {
    /// Pair column names with column types.
    ///
    /// Fails with [`Error::InvalidConfiguration`] when the two lists differ in
    /// length or a name repeats.
    pub fn new<S: Into<String>>(names: Vec<S>, types: Vec<ColumnType>) -> Result<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != types.len() {
            return Err(Error::invalid_configuration(format!(
                "{} column names but {} data types",
                names.len(),
                types.len()
            )));
        }
        for (idx, name) in names.iter().enumerate() {
            if names[..idx].contains(name) {
                return Err(Error::invalid_configuration(format!(
                    "duplicate column name '{name}'"
                )));
            }
        }
        Ok(Self { names, types })
    }

    /// Like [`IngestSchema::new`], resolving each type with
    /// [`ColumnType::from_identifier`].
    pub fn from_identifiers<N, D>(names: &[N], dtypes: &[D]) -> Result<Self>
    where
        N: AsRef<str>,
        D: AsRef<str>,
    {
        let names = names.iter().map(|n| n.as_ref().to_string()).collect();
        let types = dtypes
            .iter()
            .map(|d| ColumnType::from_identifier(d.as_ref()))
            .collect();
        Self::new(names, types)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn types(&self) -> &[ColumnType] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ColumnType)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.types.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_lengths_are_invalid_configuration() {
        let err = IngestSchema::from_identifiers(&["ID", "NAME"], &["INTEGER"]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(msg) if msg.contains("2 column names")));
    }

    #[test]
    fn duplicate_names_are_invalid_configuration() {
        let err = IngestSchema::from_identifiers(&["ID", "ID"], &["INTEGER", "FLOAT"]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn identifiers_resolve_per_column() {
        let schema =
            IngestSchema::from_identifiers(&["A", "B", "C"], &["INTEGER", "FLOAT", "DATE"]).unwrap();
        let types: Vec<ColumnType> = schema.iter().map(|(_, t)| t).collect();
        assert_eq!(
            types,
            vec![ColumnType::Int64, ColumnType::Float64, ColumnType::Utf8]
        );
    }
}
