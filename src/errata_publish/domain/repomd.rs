use crate::shared::RoundtripError;
use roxmltree::Document;

/// Parsed view of a repository's `repodata/repomd.xml` index.
///
/// repomd.xml is the indirection layer between a published repository and its
/// generated metadata files: each `<data type="...">` entry points at the
/// actual file through a `<location href="..."/>` child. Matching is done on
/// local element names so the repo namespace does not get in the way.
#[derive(Debug, Clone)]
pub struct RepomdIndex {
    entries: Vec<RepomdEntry>,
}

#[derive(Debug, Clone)]
pub struct RepomdEntry {
    pub data_type: String,
    pub location: String,
}

impl RepomdIndex {
    pub fn parse(xml: &str) -> Result<Self, RoundtripError> {
        let document = Document::parse(xml).map_err(|e| RoundtripError::Metadata {
            details: format!("repomd.xml: {e}"),
        })?;

        let mut entries = Vec::new();
        for data in document
            .root_element()
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "data")
        {
            let Some(data_type) = data.attribute("type") else {
                continue;
            };
            let location = data
                .children()
                .find(|n| n.is_element() && n.tag_name().name() == "location")
                .and_then(|n| n.attribute("href"));
            if let Some(location) = location {
                entries.push(RepomdEntry {
                    data_type: data_type.to_string(),
                    location: location.to_string(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Location href of the entry with the given data type.
    pub fn location_for(&self, data_type: &str) -> Result<&str, RoundtripError> {
        self.entries
            .iter()
            .find(|e| e.data_type == data_type)
            .map(|e| e.location.as_str())
            .ok_or_else(|| RoundtripError::RepomdEntryMissing {
                data_type: data_type.to_string(),
            })
    }

    pub fn entries(&self) -> &[RepomdEntry] {
        &self.entries
    }
}
