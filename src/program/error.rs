use std::path::PathBuf;

use thiserror::Error;

pub type LoadResult<T> = Result<T, LoadError>;

/// Failures raised while turning program dumps into a declaration tree.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read program dump `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed program dump `{name}`: {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("program dump `{name}`: unknown declaration kind `{kind}`")]
    UnknownKind { name: String, kind: String },
    #[error("program dump `{name}`: unknown modifier `{modifier}`")]
    UnknownModifier { name: String, modifier: String },
}
