//! First-fit segment allocator.
//!
//! Each segment keeps a free list of `(offset, size)` blocks sorted by
//! offset. Freed blocks are merged with their neighbours so the list stays
//! minimal. Invariant: per segment, free bytes + allocated bytes ==
//! `seg_size`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use cachestat_core::error::{CacheStatError, Result};
use cachestat_core::SharedMemoryInfo;

/// All allocations are rounded up to this many bytes.
pub const ALIGN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub segment: usize,
    pub offset: usize,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    offset: usize,
    size: usize,
}

#[derive(Debug)]
struct Segment {
    free: Vec<Block>,
}

#[derive(Debug)]
pub struct SegmentAllocator {
    seg_size: usize,
    segments: Mutex<Vec<Segment>>,
}

fn align_up(n: usize) -> Option<usize> {
    n.max(1).checked_add(ALIGN - 1).map(|v| v & !(ALIGN - 1))
}

impl SegmentAllocator {
    pub fn new(num_seg: usize, seg_size: usize) -> Result<Self> {
        if num_seg == 0 {
            return Err(CacheStatError::BadConfig("allocator needs at least one segment".into()));
        }
        if seg_size < ALIGN || seg_size % ALIGN != 0 {
            return Err(CacheStatError::BadConfig(format!(
                "segment size must be a positive multiple of {ALIGN}"
            )));
        }

        let segments = (0..num_seg)
            .map(|_| Segment { free: vec![Block { offset: 0, size: seg_size }] })
            .collect();

        Ok(Self { seg_size, segments: Mutex::new(segments) })
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Segment>> {
        self.segments.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn seg_size(&self) -> usize {
        self.seg_size
    }

    pub fn num_seg(&self) -> usize {
        self.lock().len()
    }

    /// Whether `size` could ever be satisfied, i.e. it fits in one empty
    /// segment.
    pub fn fits(&self, size: usize) -> bool {
        align_up(size).is_some_and(|need| need <= self.seg_size)
    }

    /// First block (lowest segment, lowest offset) that fits wins.
    pub fn alloc(&self, size: usize) -> Option<Allocation> {
        let need = align_up(size)?;
        if need > self.seg_size {
            return None;
        }

        let mut segments = self.lock();
        for (si, seg) in segments.iter_mut().enumerate() {
            let Some(bi) = seg.free.iter().position(|b| b.size >= need) else {
                continue;
            };
            let block = seg.free[bi];
            if block.size == need {
                seg.free.remove(bi);
            } else {
                seg.free[bi] = Block { offset: block.offset + need, size: block.size - need };
            }
            let offset = block.offset;
            return Some(Allocation { segment: si, offset, size: need });
        }
        None
    }

    pub fn free(&self, a: Allocation) {
        let mut segments = self.lock();
        let Some(seg) = segments.get_mut(a.segment) else {
            tracing::warn!(segment = a.segment, "free on unknown segment ignored");
            return;
        };

        let idx = seg.free.partition_point(|b| b.offset < a.offset);
        seg.free.insert(idx, Block { offset: a.offset, size: a.size });

        // merge with next, then with previous
        if idx + 1 < seg.free.len() && a.offset + a.size == seg.free[idx + 1].offset {
            let next = seg.free.remove(idx + 1);
            seg.free[idx].size += next.size;
        }
        if idx > 0 {
            let prev = seg.free[idx - 1];
            if prev.offset + prev.size == seg.free[idx].offset {
                let cur = seg.free.remove(idx);
                seg.free[idx - 1].size += cur.size;
            }
        }
    }

    /// Total free bytes across all segments.
    pub fn available(&self) -> usize {
        self.lock()
            .iter()
            .flat_map(|s| s.free.iter())
            .map(|b| b.size)
            .sum()
    }

    pub fn info(&self) -> SharedMemoryInfo {
        let segments = self.lock();
        let mut avail = 0usize;
        let mut largest = 0usize;
        let mut blocks = 0usize;
        for b in segments.iter().flat_map(|s| s.free.iter()) {
            avail += b.size;
            largest = largest.max(b.size);
            blocks += 1;
        }
        let fragmentation = if avail == 0 {
            0.0
        } else {
            1.0 - largest as f64 / avail as f64
        };

        SharedMemoryInfo::new()
            .with("num_seg", segments.len())
            .with("seg_size", self.seg_size)
            .with("avail_mem", avail)
            .with("fragmentation", fragmentation)
            .with("block_count", blocks)
    }
}
