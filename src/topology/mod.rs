//! Triangle and edge bookkeeping for the Delaunay sweep

mod edge;
mod face;
mod face_list;

pub use edge::{Edge, EdgeList};
pub use face::{Face, FaceEx};
pub use face_list::FaceExList;
