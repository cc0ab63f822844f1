//! Three 4-byte allocations from a 128-byte arena.
//!
//! Demonstrates: build arena → bump-allocate → report addresses. Addresses
//! are plain offsets, so the output is always 0, 4 and 8.
//!
//! Run with `RUST_LOG=debug` to also see the arena state after each step.

use burrow_arena::Arena;
use burrow_core::ArenaError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ArenaError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let mut arena = Arena::new(128)?;

    for name in ["a", "b", "c"] {
        let address = arena.alloc(4)?;
        tracing::info!(%address, "address of {name}");
        tracing::debug!(offset = arena.offset(), remaining = arena.remaining(), "arena state");
    }

    tracing::info!(stats = %arena.stats(), "done");
    Ok(())
}
