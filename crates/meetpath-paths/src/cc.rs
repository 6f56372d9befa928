//! Connected-component labelling.

use meetpath_core::{Occupancy, Point};

/// 8-connected labels of the passable cells of an [`Occupancy`] grid.
///
/// Two passable cells share a label exactly when a bidirectional search
/// between them succeeds, so labelling once answers many reachability
/// queries without searching.
#[derive(Debug, Clone)]
pub struct Components {
    width: i32,
    height: i32,
    labels: Vec<i32>,
    count: usize,
}

impl Components {
    /// Label every passable cell of `grid`. Blocked cells stay unlabelled.
    pub fn label(grid: &Occupancy) -> Self {
        let len = grid.len();
        let mut labels = vec![-1; len];
        let mut stack = Vec::new();
        let mut label: i32 = 0;

        for start in 0..len {
            if labels[start] >= 0 || !grid.cells()[start] {
                continue;
            }

            // Iterative DFS from `start`.
            stack.clear();
            stack.push(start);
            labels[start] = label;

            while let Some(ci) = stack.pop() {
                for np in grid.point(ci).neighbors_8() {
                    let Some(ni) = grid.index(np) else {
                        continue;
                    };
                    if grid.cells()[ni] && labels[ni] < 0 {
                        labels[ni] = label;
                        stack.push(ni);
                    }
                }
            }

            label += 1;
        }

        Self {
            width: grid.width(),
            height: grid.height(),
            labels,
            count: label as usize,
        }
    }

    /// Number of components found.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Component of `p`, or `None` if `p` is blocked or outside the grid.
    pub fn label_at(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return None;
        }
        let label = self.labels[p.y as usize * self.width as usize + p.x as usize];
        (label >= 0).then_some(label as usize)
    }

    /// Whether `a` and `b` are passable cells of the same component.
    pub fn same_component(&self, a: Point, b: Point) -> bool {
        match (self.label_at(a), self.label_at(b)) {
            (Some(la), Some(lb)) => la == lb,
            _ => false,
        }
    }

    /// Cells of component `label`, in row-major order.
    pub fn cells(&self, label: usize) -> Vec<Point> {
        let w = self.width.max(1) as usize;
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &l)| l >= 0 && l as usize == label)
            .map(|(i, _)| Point::new((i % w) as i32, (i / w) as i32))
            .collect()
    }
}
