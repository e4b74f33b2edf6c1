pub mod directed;
pub mod generators;
pub mod path;
pub mod traits;

pub use directed::DirectedGraph;
pub use path::Path;
pub use traits::{Graph, LengthMap};
