pub mod codec;
pub mod content;
mod escape;
pub mod error;
pub mod fingerprint;
pub mod id;

pub use codec::{parse, stringify, try_parse};
pub use content::{canonical_map, hash_file_rule, hash_query_rule, HashSettings};
pub use error::MalformedIdentifier;
pub use fingerprint::{fingerprint, fingerprint_string};
pub use id::{
    denotes_same_rule, equal, ContentId, QueryResultId, RuleIdentifier, MANAGED_SOURCE_NAME,
};
