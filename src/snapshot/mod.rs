//! Per-version inputs: snapshot summaries, commit metadata, release tags.

mod loader;
mod release;
mod types;

pub use loader::{CommitLoad, SnapshotLoader};
pub use release::{
    ReleaseVersionSet, load_release_versions, normalize_version, read_release_versions,
};
pub use types::{CodeMetric, CommitRecord, VersionRecord, recent_commits};
