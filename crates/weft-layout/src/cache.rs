#![forbid(unsafe_code)]

//! Per-frame rect cache.
//!
//! Layout nodes carry no identity across frames, so collaborators that
//! need a widget's on-screen rectangle after the pass (hit-testing,
//! scroll-into-view, focus rings) query this cache by the widget's
//! child-index path instead. The cache is rebuilt from the frame's
//! [`ComputedLayout`] in one walk, converting the tree's parent-relative
//! rects to absolute screen coordinates, and is valid only until the next
//! rebuild.

use std::collections::HashMap;

use weft_core::Rect;

use crate::resolve::ComputedLayout;

/// Hit/miss counters for one cache lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameCacheStats {
    /// Lookups that found a rect.
    pub hits: u64,
    /// Lookups for paths absent from the current frame.
    pub misses: u64,
    /// Frames the cache has been rebuilt for.
    pub rebuilds: u64,
}

impl FrameCacheStats {
    /// Hit ratio in `0.0..=1.0`; `0.0` when nothing was looked up.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Absolute rects for the current frame, keyed by child-index path from
/// the root.
#[derive(Debug, Default)]
pub struct FrameCache {
    rects: HashMap<Vec<u32>, Rect>,
    stats: FrameCacheStats,
}

impl FrameCache {
    /// An empty cache; every lookup misses until the first rebuild.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached rects with the given frame's layout.
    ///
    /// `origin` is the root's absolute position, usually the viewport
    /// origin. Stats survive across rebuilds.
    pub fn rebuild(&mut self, layout: &ComputedLayout, origin: (i32, i32)) {
        self.rects.clear();
        let root = layout.rect.offset(origin.0, origin.1);
        self.rects.insert(Vec::new(), root);
        let mut path = Vec::new();
        for (index, child) in layout.children.iter().enumerate() {
            path.push(index as u32);
            self.insert_subtree(child, (root.x, root.y), &mut path);
            path.pop();
        }
        self.stats.rebuilds += 1;
    }

    fn insert_subtree(&mut self, layout: &ComputedLayout, parent: (i32, i32), path: &mut Vec<u32>) {
        let rect = layout.rect.offset(parent.0, parent.1);
        self.rects.insert(path.clone(), rect);
        for (index, child) in layout.children.iter().enumerate() {
            path.push(index as u32);
            self.insert_subtree(child, (rect.x, rect.y), path);
            path.pop();
        }
    }

    /// Absolute rect for a path, counting the lookup.
    pub fn get(&mut self, path: &[u32]) -> Option<Rect> {
        match self.rects.get(path) {
            Some(&rect) => {
                self.stats.hits += 1;
                Some(rect)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Absolute rect for a path without touching the stats.
    pub fn peek(&self, path: &[u32]) -> Option<Rect> {
        self.rects.get(path).copied()
    }

    /// The deepest cached rect containing the given absolute point,
    /// preferring later siblings (paint order) at each level.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<Vec<u32>> {
        let mut path = Vec::new();
        self.peek(&path)?.contains(x, y).then_some(())?;
        loop {
            let mut found = None;
            let mut index = 0u32;
            loop {
                path.push(index);
                let Some(rect) = self.peek(&path) else {
                    path.pop();
                    break;
                };
                if rect.contains(x, y) {
                    found = Some(index);
                }
                path.pop();
                index += 1;
            }
            match found {
                Some(index) => path.push(index),
                None => return Some(path),
            }
        }
    }

    /// Number of cached rects (including the root).
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Whether the cache holds no rects.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Counters accumulated since creation (or the last reset).
    pub fn stats(&self) -> FrameCacheStats {
        self.stats
    }

    /// Zero the counters without touching the rects.
    pub fn reset_stats(&mut self) {
        self.stats = FrameCacheStats::default();
    }
}
