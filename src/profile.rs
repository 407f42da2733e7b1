use rayon::prelude::*;

use crate::error::{NplotError, Result};

/// One named set of length measurements with its derived cumulative curve.
///
/// `lengths` is sorted descending at construction and `cumulative[i]` holds
/// the sum of the `i + 1` largest lengths. Batch normalization rescales
/// `cumulative` into proportions of the genome length exactly once; the
/// profile is read-only afterwards.
pub struct LengthProfile {
    pub name: String,
    lengths: Vec<u64>,
    cumulative: Vec<f64>,
    total: u64,
}

impl LengthProfile {
    /// Build a profile from parsed lengths. `pre_sorted` asserts the input
    /// is already sorted descending and skips the sort, which matters for
    /// inputs with hundreds of millions of reads.
    pub fn new(name: impl Into<String>, mut lengths: Vec<u64>, pre_sorted: bool) -> Self {
        if !pre_sorted {
            lengths.par_sort_unstable_by(|a, b| b.cmp(a));
        }
        let mut cumulative = Vec::with_capacity(lengths.len());
        // Genome-scale totals reach tens of billions; accumulate in u64.
        let mut running: u64 = 0;
        for &len in &lengths {
            running += len;
            cumulative.push(running as f64);
        }
        LengthProfile {
            name: name.into(),
            lengths,
            cumulative,
            total: running,
        }
    }

    pub fn count(&self) -> usize {
        self.lengths.len()
    }

    /// Sum of all lengths, unaffected by normalization.
    pub fn total_length(&self) -> u64 {
        self.total
    }

    pub fn lengths(&self) -> &[u64] {
        &self.lengths
    }

    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Paired (cumulative proportion, length) series ordered by descending
    /// length, ready for plotting. Valid once the batch is normalized.
    pub fn curve(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.cumulative
            .iter()
            .zip(&self.lengths)
            .map(|(&x, &len)| (x, len as f64))
    }

    /// The Nx statistic: the length of the measurement whose inclusion in
    /// the cumulative sum first pushes the proportion strictly past `x`.
    /// A proportion exactly equal to `x` counts as not yet crossed. Returns
    /// 0 when the threshold is never exceeded. The profile must already be
    /// normalized.
    pub fn n_value(&self, x: f64) -> Result<u64> {
        if !(0.0 < x && x < 1.0) {
            return Err(NplotError::Range(x));
        }
        let k = self.cumulative.iter().filter(|&&c| c > x).count();
        if k == 0 {
            return Ok(0);
        }
        Ok(self.lengths[self.lengths.len() - k])
    }
}

/// Rescale every profile's cumulative curve into proportions of the genome
/// length. When no explicit length is given, the largest total across the
/// batch is used. Returns the resolved denominator.
pub fn normalize(profiles: &mut [LengthProfile], genome_length: Option<f64>) -> Result<f64> {
    let resolved = match genome_length {
        Some(g) => g,
        None => profiles
            .iter()
            .filter_map(|p| p.cumulative.last().copied())
            .fold(0.0_f64, f64::max),
    };
    if resolved <= 0.0 {
        return Err(NplotError::Config(resolved));
    }
    for profile in profiles.iter_mut() {
        for c in &mut profile.cumulative {
            *c /= resolved;
        }
    }
    Ok(resolved)
}
