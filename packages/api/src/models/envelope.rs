use serde::{Deserialize, Serialize};

/// The `{ "data": ... }` wrapper most list endpoints use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// A body that is either wrapped in `{ "data": ... }` or bare.
///
/// Single-resource endpoints are not consistent about the wrapper, so
/// decoders go through this and call [`Payload::into_inner`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Payload<T> {
    pub fn into_inner(self) -> T {
        match self {
            Payload::Wrapped { data } => data,
            Payload::Bare(value) => value,
        }
    }
}
