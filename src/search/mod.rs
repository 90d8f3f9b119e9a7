mod cursor;
mod matchset;
mod overlay;
mod session;

pub use cursor::NavigationCursor;
pub use matchset::{MatchDescriptor, MatchSet};
pub use overlay::{Overlay, Segment};
pub use session::{SearchOutcome, SearchSession};
