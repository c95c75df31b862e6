use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

/// A checksum pair attached to a package descriptor.
///
/// The wire format is a two-element array `["<algorithm>", "<digest>"]`,
/// so this serializes as a sequence rather than a map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct Checksum {
    pub algorithm: String,
    pub digest: String,
}

impl Checksum {
    pub fn new(algorithm: impl Into<String>, digest: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            digest: digest.into(),
        }
    }
}

impl From<(String, String)> for Checksum {
    fn from((algorithm, digest): (String, String)) -> Self {
        Self { algorithm, digest }
    }
}

impl Serialize for Checksum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(&self.algorithm)?;
        seq.serialize_element(&self.digest)?;
        seq.end()
    }
}

/// A single package descriptor inside a package group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    pub arch: String,
    pub epoch: String,
    pub filename: String,
    pub name: String,
    pub release: String,
    pub src: String,
    pub sum: Checksum,
    pub version: String,
}

/// A named group of package descriptors (one `pkglist` entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageGroup {
    pub name: String,
    pub packages: Vec<PackageDescriptor>,
}

/// An external reference attached to an erratum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub href: String,
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub ref_type: String,
}

/// A software update advisory record.
///
/// This is the unit submitted to the content server's import endpoint.
/// Optional fields are omitted from the serialized form entirely when
/// absent; the server's generated XML is expected to mirror that omission.
/// Instances are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Erratum {
    pub id: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pkglist: Option<Vec<PackageGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
    #[serde(rename = "type")]
    pub advisory_type: String,
    pub title: String,
    pub solution: String,
    pub status: String,
    pub version: String,
    pub issued: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reboot_suggested: Option<bool>,
}

/// Description used by the typical fixture. Contains non-ASCII characters and
/// a single long line that must survive the round trip byte-for-byte.
pub const TYPICAL_DESCRIPTION: &str = "This sample description contains some non-ASCII characters \
, such as: 汉堡™, and also contains a long line which some systems may be tempted to wrap.  \
It will be tested to see if the string survives a round-trip through the API and back out of \
the yum distributor as XML without any modification.";

/// Description used by the fixture with no package list.
pub const NO_PKGLIST_DESCRIPTION: &str = "this unit has no packages";

impl Erratum {
    /// Builds a typical erratum: full package list, external references and a
    /// description exercising non-ASCII text and unwrapped long lines.
    ///
    /// The identifier is freshly generated per call so repeated runs against
    /// the same server never collide.
    pub fn typical() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: TYPICAL_DESCRIPTION.to_string(),
            pkglist: Some(vec![PackageGroup {
                name: "pkglist-name".to_string(),
                packages: vec![PackageDescriptor {
                    arch: "i686".to_string(),
                    epoch: "0".to_string(),
                    filename: "libpfm-4.4.0-9.el7.i686.rpm".to_string(),
                    name: "libpfm".to_string(),
                    release: "9.el7".to_string(),
                    src: "libpfm-4.4.0-9.el7.src.rpm".to_string(),
                    sum: Checksum::new(
                        "sha256",
                        "ca42a0d97fd99a195b30f9256823a46c94f632c126ab4fbbdd7e127641f30ee4",
                    ),
                    version: "4.4.0".to_string(),
                }],
            }]),
            references: Some(vec![Reference {
                href: "https://example.com/errata/EXAMPLE-2017-1234.html".to_string(),
                id: "EXAMPLE-2017:1234".to_string(),
                title: "EXAMPLE-2017:1234".to_string(),
                ref_type: "self".to_string(),
            }]),
            advisory_type: "security".to_string(),
            title: "sample title".to_string(),
            solution: "sample solution".to_string(),
            status: "final".to_string(),
            // intentionally a string, not an integer
            version: "6".to_string(),
            issued: "2015-03-05 05:42:53 UTC".to_string(),
            reboot_suggested: None,
        }
    }

    /// Builds an erratum with no package list at all, used to verify that
    /// optional structure is omitted from the generated XML rather than
    /// emitted empty.
    pub fn without_pkglist() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            description: NO_PKGLIST_DESCRIPTION.to_string(),
            pkglist: None,
            references: None,
            advisory_type: "security".to_string(),
            title: "no pkglist".to_string(),
            solution: "solution for no pkglist".to_string(),
            status: "final".to_string(),
            version: "9".to_string(),
            issued: "2015-04-05 05:42:53 UTC".to_string(),
            reboot_suggested: None,
        }
    }
}

/// The immutable pair of errata a scenario run submits.
///
/// Constructed once during setup and passed by reference into each check,
/// so no check can observe another check's mutations.
#[derive(Debug, Clone)]
pub struct ScenarioFixture {
    pub typical: Erratum,
    pub no_pkglist: Erratum,
}

impl ScenarioFixture {
    pub fn generate() -> Self {
        Self {
            typical: Erratum::typical(),
            no_pkglist: Erratum::without_pkglist(),
        }
    }

    /// All errata in submission order.
    pub fn all(&self) -> Vec<&Erratum> {
        vec![&self.typical, &self.no_pkglist]
    }

    pub fn len(&self) -> usize {
        2
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
