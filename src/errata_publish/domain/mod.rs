pub mod erratum;
pub mod repomd;
pub mod repository;
pub mod task;
pub mod updateinfo;

pub use erratum::{Checksum, Erratum, PackageDescriptor, PackageGroup, Reference, ScenarioFixture};
pub use repomd::RepomdIndex;
pub use repository::{
    DistributorConfig, DistributorHandle, NewDistributor, NewRepository, RepositoryHandle,
};
pub use task::{AsyncCallReport, Task, TaskRef, TaskResult, TaskState};
pub use updateinfo::{UpdateNode, UpdateinfoTree};
