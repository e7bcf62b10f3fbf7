//! 两角比较与两组逐项比较的规则。

use thiserror::Error;

use crate::domain::angle::{abs_differences, indices_over, normalize_degrees, normalize_group};

/// 比较阈值（单位：度）。
///
/// 双值比较（5°）与多值比较（1°）的阈值刻意不同，不要合并。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonLimits {
    pub pair_deg: f64,
    pub group_deg: f64,
}

impl Default for ComparisonLimits {
    fn default() -> Self {
        Self {
            pair_deg: 5.0,
            group_deg: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("两组数据数量不匹配")]
pub struct CountMismatch {
    pub first: usize,
    pub second: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PairComparison {
    pub difference: f64,
    pub limit: f64,
    pub over_limit: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupComparison {
    pub first: Vec<f64>,
    pub second: Vec<f64>,
    pub differences: Vec<f64>,
    pub limit: f64,
    pub over_limit_indices: Vec<usize>,
}

impl GroupComparison {
    pub fn all_within_limit(&self) -> bool {
        self.over_limit_indices.is_empty()
    }
}

/// 两个弧度值的归一化角度差，超过 `limits.pair_deg` 即为越限。
pub fn compare_pair(a: f64, b: f64, limits: &ComparisonLimits) -> PairComparison {
    let difference = (normalize_degrees(a) - normalize_degrees(b)).abs();
    PairComparison {
        difference,
        limit: limits.pair_deg,
        over_limit: difference > limits.pair_deg,
    }
}

/// 两组弧度值按下标逐项比较。数量不同时返回 [`CountMismatch`]。
pub fn compare_groups(
    first: &[f64],
    second: &[f64],
    limits: &ComparisonLimits,
) -> Result<GroupComparison, CountMismatch> {
    if first.len() != second.len() {
        return Err(CountMismatch {
            first: first.len(),
            second: second.len(),
        });
    }

    let first = normalize_group(first);
    let second = normalize_group(second);
    let differences = abs_differences(&first, &second);
    let over_limit_indices = indices_over(&differences, limits.group_deg);

    Ok(GroupComparison {
        first,
        second,
        differences,
        limit: limits.group_deg,
        over_limit_indices,
    })
}
