//! A linked list laid out by hand in arena memory.
//!
//! Demonstrates: build nodes tail first → walk the chain → inspect the raw
//! big-endian bytes → reset and observe that the old head is rejected.

use burrow_arena::Arena;
use burrow_core::ArenaError;
use burrow_node::{create_node, traverse, value, NODE_SIZE};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ArenaError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let mut arena = Arena::new(64)?;

    let n3 = create_node(&mut arena, 30, None)?;
    let n2 = create_node(&mut arena, 20, Some(n3))?;
    let n1 = create_node(&mut arena, 10, Some(n2))?;

    for ptr in traverse(&arena, Some(n1)) {
        let ptr = ptr?;
        let bytes = arena.read_bytes(ptr, NODE_SIZE)?;
        tracing::info!(address = %ptr, value = value(&arena, ptr)?, ?bytes, "node");
    }

    arena.reset();
    match value(&arena, n1) {
        Ok(v) => tracing::warn!(v, "stale head still readable"),
        Err(e) => tracing::info!(error = %e, "head rejected after reset"),
    }
    Ok(())
}
