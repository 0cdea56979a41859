//! Organization registry — the list of organizations the pipeline serves.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One registered organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Org {
    pub id: String,
    pub name: String,
}

/// Load the registry TSV (columns `ID`, `Name`), sorted by name.
///
/// A missing registry is a hard error: without it there is nothing to serve.
pub fn load_orgs(path: &Path) -> Result<Vec<Org>> {
    #[derive(Deserialize)]
    struct Row {
        #[serde(rename = "ID")]
        id: String,
        #[serde(rename = "Name")]
        name: String,
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .map_err(|e| match e.into_kind() {
            csv::ErrorKind::Io(io) => Error::Io(io),
            other => Error::Parse {
                file: path.display().to_string(),
                message: format!("{other:?}"),
            },
        })?;

    let mut orgs = Vec::new();
    for record in reader.deserialize::<Row>() {
        let row = record.map_err(|e| Error::Parse {
            file: path.display().to_string(),
            message: e.to_string(),
        })?;
        orgs.push(Org { id: row.id, name: row.name });
    }
    orgs.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(orgs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("org.txt");
        std::fs::write(&path, "ID\tName\n2\tZeta Institute\n1\tAlpha University\n").unwrap();
        let orgs = load_orgs(&path).unwrap();
        assert_eq!(orgs[0].name, "Alpha University");
        assert_eq!(orgs[1].id, "2");
    }

    #[test]
    fn missing_registry_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_orgs(&dir.path().join("org.txt")).is_err());
    }
}
