pub mod codec;
pub mod constants;
pub mod errors;
pub mod structures;

pub use codec::{deserialize, serialize, Codec};
pub use errors::{CodecError, Result};
pub use structures::tree::node::TreeNode;
