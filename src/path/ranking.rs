use super::route::MazePath;

/// Summary of path lengths. Only exists for a non-empty set of paths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathStats {
    pub count: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
}

impl PathStats {
    /// Computes statistics over `paths`, or `None` if there are none.
    pub fn from_paths(paths: &[MazePath]) -> Option<Self> {
        let lengths = paths.iter().map(MazePath::length);
        let min = lengths.clone().min()?;
        let max = lengths.clone().max()?;
        let total: usize = lengths.sum();
        let count = paths.len();
        Some(Self {
            count,
            min,
            max,
            mean: total as f64 / count as f64,
        })
    }
}

/// Paths ordered from shortest to longest, with their statistics.
#[derive(Clone, Debug, Default)]
pub struct RankedPaths {
    paths: Vec<MazePath>,
    stats: Option<PathStats>,
}

impl RankedPaths {
    pub fn paths(&self) -> &[MazePath] {
        &self.paths
    }

    pub fn stats(&self) -> Option<PathStats> {
        self.stats
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn shortest(&self) -> Option<&MazePath> {
        self.paths.first()
    }

    pub fn longest(&self) -> Option<&MazePath> {
        self.paths.last()
    }

    /// Lengths of all paths, ascending.
    pub fn lengths(&self) -> Vec<usize> {
        self.paths.iter().map(MazePath::length).collect()
    }
}

/// Sorts `paths` by length, shortest first, and derives their statistics.
pub fn rank_paths(paths: Vec<MazePath>) -> RankedPaths {
    let paths = partition_sort(paths);
    let stats = PathStats::from_paths(&paths);
    RankedPaths { paths, stats }
}

/// Three-way partition sort on path length.
///
/// The middle element is the pivot; paths are split into shorter, equal and
/// longer buckets and the outer buckets are sorted recursively. Bucket order
/// preserves input order, so the result is deterministic.
fn partition_sort(paths: Vec<MazePath>) -> Vec<MazePath> {
    if paths.len() <= 1 {
        return paths;
    }

    let pivot = paths[paths.len() / 2].length();
    let mut shorter = Vec::new();
    let mut equal = Vec::new();
    let mut longer = Vec::new();
    for path in paths {
        match path.length().cmp(&pivot) {
            std::cmp::Ordering::Less => shorter.push(path),
            std::cmp::Ordering::Equal => equal.push(path),
            std::cmp::Ordering::Greater => longer.push(path),
        }
    }

    let mut sorted = partition_sort(shorter);
    sorted.append(&mut equal);
    sorted.extend(partition_sort(longer));
    sorted
}
