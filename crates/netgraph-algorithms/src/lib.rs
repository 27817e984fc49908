pub mod common;
pub mod components;
pub mod traversal;

pub use common::{Adjacent, EdgeKey, GraphView, NodeId};
pub use components::{strongly_connected_components, SccResult};
pub use traversal::{add_lateral_edges, bounded_bfs, LevelResult};
