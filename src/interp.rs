// Fills the gap between two pointer samples so a fast drag stays continuous.

use crate::types::Point;

/// Evenly spaced points from the previous sample to the current one.
///
/// With no previous sample, or no displacement, yields just `current`.
/// Otherwise yields `floor(|d|) + 1` points at `t = i / steps`, each truncated
/// to integer pixels. Differences are taken in i64/f64, so any pair of `i32`
/// samples is valid.
pub fn interpolate(last: Option<Point>, current: Point) -> PathSteps {
    let (start, steps) = match last {
        Some(last) if last != current => {
            let dx = (current.x as i64 - last.x as i64) as f64;
            let dy = (current.y as i64 - last.y as i64) as f64;
            (last, (dx * dx + dy * dy).sqrt().floor() as u64)
        }
        _ => (current, 0),
    };
    PathSteps { start, end: current, steps, next: 0 }
}

/// Iterator returned by [`interpolate`].
#[derive(Clone, Debug)]
pub struct PathSteps {
    start: Point,
    end: Point,
    steps: u64,
    next: u64, // index of the next point to yield, 0..=steps
}

impl PathSteps {
    fn point_at(&self, i: u64) -> Point {
        if self.steps == 0 {
            return self.end;
        }
        let t = i as f64 / self.steps as f64;
        let dx = (self.end.x as i64 - self.start.x as i64) as f64;
        let dy = (self.end.y as i64 - self.start.y as i64) as f64;
        Point::new(
            (self.start.x as f64 + t * dx) as i32,
            (self.start.y as f64 + t * dy) as i32,
        )
    }
}

impl Iterator for PathSteps {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next > self.steps {
            return None;
        }
        let p = self.point_at(self.next);
        self.next += 1;
        Some(p)
    }

    fn nth(&mut self, n: usize) -> Option<Point> {
        self.next = self.next.saturating_add(n as u64);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.steps + 1).saturating_sub(self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for PathSteps {}
