//! Running evaluation on a stack deep enough for the sheet's depth limit.
//!
//! Cell resolution and cycle scanning recurse once per level of reference
//! nesting. The calling thread's stack (2 MiB for spawned threads, often
//! 8 MiB for `main`) is not enough at high limits, so the work runs on a
//! scoped thread sized by [`stack_size_for_depth`].

use postgrid_engine::engine::stack_size_for_depth;

use crate::error::{PostgridError, Result};

pub(crate) fn with_depth_stack<T, F>(max_depth: usize, f: F) -> Result<T>
where
    F: FnOnce() -> T + Send,
    T: Send,
{
    std::thread::scope(|scope| {
        let handle = std::thread::Builder::new()
            .name("postgrid-eval".to_string())
            .stack_size(stack_size_for_depth(max_depth))
            .spawn_scoped(scope, f)
            .map_err(PostgridError::Thread)?;
        match handle.join() {
            Ok(value) => Ok(value),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    })
}
