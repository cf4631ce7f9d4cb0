// Simulated SIMT lane model, 100% CPU-only, without real GPU nor parallelism.
// Gives the shuffle surfaces and the tests a warp to run against.

use crate::shfl::WARP_WIDTH;

/// Logical mask of active lanes. Backed by a u64 so a 64-lane wavefront fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneMask {
    bits: u64,
}

impl LaneMask {
    pub fn full(width: u32) -> Self {
        let bits = if width >= 64 { !0 } else { (1u64 << width) - 1 };
        Self { bits }
    }

    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn from_predicate(pred: &[bool]) -> Self {
        let mut bits = 0u64;
        for (i, p) in pred.iter().enumerate().take(64) {
            if *p {
                bits |= 1 << i;
            }
        }
        Self { bits }
    }

    pub fn is_active(&self, lane: u32) -> bool {
        lane < 64 && (self.bits >> lane) & 1 == 1
    }

    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Mask in the form the `_sync` calling convention takes. Covers the low
    /// 32 lanes; the fallback backend discards it either way.
    pub fn shfl_mask(&self) -> u32 {
        self.bits as u32
    }
}

#[derive(Debug, Clone)]
pub struct VLane {
    pub tid: usize,
    pub value: f32,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct VWarp {
    pub lanes: Vec<VLane>,
    /// Logical mask of active lanes, kept in sync with the per-lane flags.
    pub mask: LaneMask,
}

impl VWarp {
    pub fn new(width: u32, base_tid: usize) -> Self {
        let mut lanes = Vec::new();
        for i in 0..width as usize {
            lanes.push(VLane {
                tid: base_tid + i,
                value: 0.0,
                active: true,
            });
        }
        Self {
            lanes,
            mask: LaneMask::full(width),
        }
    }

    pub fn width(&self) -> u32 {
        self.lanes.len() as u32
    }

    pub fn values(&self) -> Vec<f32> {
        self.lanes.iter().map(|l| l.value).collect()
    }

    pub fn load(&mut self, vals: &[f32]) {
        assert_eq!(
            vals.len(),
            self.lanes.len(),
            "expected one value per lane ({}), got {}",
            self.lanes.len(),
            vals.len()
        );
        for (lane, v) in self.lanes.iter_mut().zip(vals.iter()) {
            lane.value = *v;
        }
    }

    /// Apply a predicate to each lane, updating the SIMT bitmask.
    pub fn apply_predicate<F>(&mut self, pred: F)
    where
        F: Fn(usize) -> bool,
    {
        let mut pred_bits = vec![false; self.lanes.len()];
        for (i, lane) in self.lanes.iter_mut().enumerate() {
            lane.active = pred(lane.tid);
            pred_bits[i] = lane.active;
        }
        self.mask = LaneMask::from_predicate(&pred_bits);
    }

    /// Reconverge: all lanes become active again.
    pub fn reconverge(&mut self) {
        for lane in self.lanes.iter_mut() {
            lane.active = true;
        }
        self.mask = LaneMask::full(self.width());
    }
}

impl Default for VWarp {
    fn default() -> Self {
        Self::new(WARP_WIDTH, 0)
    }
}
