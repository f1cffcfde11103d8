// ── Composite record storage ──
//
// Reactive per-slice storage for the open property. Slices are replaced
// wholesale on refresh; subscribers get push-based change notification
// through `watch` channels.

mod slice;

pub use slice::{SliceCell, SliceStream, SliceWatchStream, ValueCell};
