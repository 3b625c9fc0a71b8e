// NOTE: Engine Design Rationale
//
// Why recompute-on-change (not incremental maintenance)?
// - The filtered view is a pure projection of (collection, criteria)
// - Recomputing on every criteria change keeps the window-reset invariant
//   trivially correct: one code path derives the view, one resets the window
// - Collections are session-sized and in memory; there is nothing to win
//   by maintaining the projection incrementally
//
// Why an injected clock (tick(Instant), no sleeping)?
// - Debounce and the simulated extension delays are the only time-dependent
//   behavior; feeding `now` in from the event loop makes every transition
//   deterministic under test
// - The same engine drives the interactive browser (real ticks) and the
//   scripted commands (Pacing::immediate, one tick settles everything)

pub mod browser;
pub mod filter;
pub mod loader;
pub mod pacing;
pub mod session;
pub mod window;

pub use browser::Browser;
pub use loader::{load_collection, parse_collection};
pub use pacing::Pacing;
pub use session::Session;
pub use window::PageWindow;
