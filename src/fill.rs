// Iterative 4-connected flood fill.
// An explicit point stack replaces recursion, so region size is bounded by the
// buffer area and never by the call stack.

use crate::stack::PointStack;
use crate::types::{Color, FrameBuffer, Point};

/// Recolor the 4-connected region of the seed's color with `fill`.
///
/// Out-of-bounds seeds and seeds already `fill` are no-ops. A popped pixel
/// that no longer matches the target is skipped, which also drops duplicate
/// pushes without a visited set.
pub fn flood_fill(fb: &mut FrameBuffer, seed_x: i32, seed_y: i32, fill: Color, capacity: usize) {
    let Some(target) = fb.get(seed_x, seed_y) else {
        return;
    };
    if target == fill {
        return;
    }

    let mut stack = PointStack::new(capacity);
    stack.push(Point::new(seed_x, seed_y));
    let mut recolored = 0usize;
    let mut peak = 1usize;

    while !stack.is_empty() {
        let p = stack.pop();
        if fb.get(p.x, p.y) != Some(target) {
            continue;
        }
        fb.put(p.x, p.y, fill);
        recolored += 1;

        // right, left, down, up
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let (nx, ny) = (p.x + dx, p.y + dy);
            if fb.in_bounds(nx, ny) {
                stack.push(Point::new(nx, ny));
            }
        }
        peak = peak.max(stack.len());
    }

    tracing::debug!(
        seed_x,
        seed_y,
        recolored,
        peak_depth = peak,
        stack_capacity = stack.capacity(),
        "flood fill done"
    );
    stack.destroy();
}
