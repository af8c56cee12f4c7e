//! Response envelopes shared by several endpoints.

use serde::Deserialize;
use url::Url;

/// One page of a paginated listing; `next` is null on the last page.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub next: Option<Url>,
    pub results: Vec<T>,
}

/// Declares a `serde_with` adapter for an id newtype that the API sends as an integer but that
/// is kept as a string. Serializing an id that is not a `u64` is an error.
macro_rules! id_as_int {
    ($vis:vis $name:ident, $id:ty) => {
        $vis struct $name;

        impl serde_with::SerializeAs<$id> for $name {
            fn serialize_as<S>(source: &$id, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let value: u64 = source.as_str().parse().map_err(|err| {
                    <S::Error as serde::ser::Error>::custom(format!(
                        "id `{}` is not an integer: {err}",
                        source.as_str()
                    ))
                })?;
                serializer.serialize_u64(value)
            }
        }

        impl<'de> serde_with::DeserializeAs<'de, $id> for $name {
            fn deserialize_as<D>(deserializer: D) -> Result<$id, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <u64 as serde::Deserialize>::deserialize(deserializer)?;
                Ok(<$id>::new(value.to_string()))
            }
        }
    };
}

pub(crate) use id_as_int;
