mod vfile;
mod vfiles;

pub use vfile::{Contents, VFile, VFileData};
pub use vfiles::{Position, VFiles};
