//! Monthly support-amount estimation.
//!
//! A simplified rendition of the public guideline model: each child carries
//! a monthly maintenance cost by age bracket, the payer covers their share
//! of combined income, a visitation deduction is subtracted per child, and
//! the total is capped by the payer's ability to pay and rounded to the
//! nearest 10 kroner. The estimate is advisory; the agreed amounts in the
//! wizard are whatever the parties enter.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::params::EstimateParams;

/// Visitation arrangement class, deciding the per-child deduction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VisitationClass {
    /// No agreed visitation
    #[default]
    None,

    /// 2-3 nights per month
    Class1,

    /// 4-8 nights per month
    Class2,

    /// 9-13 nights per month
    Class3,

    /// 14-15 nights per month
    Class4,
}

impl FromStr for VisitationClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" | "none" => Ok(VisitationClass::None),
            "1" => Ok(VisitationClass::Class1),
            "2" => Ok(VisitationClass::Class2),
            "3" => Ok(VisitationClass::Class3),
            "4" => Ok(VisitationClass::Class4),
            _ => Err(format!("Invalid visitation class: {s}")),
        }
    }
}

impl VisitationClass {
    /// Monthly deduction per child, in whole kroner.
    pub fn deduction(self) -> i64 {
        match self {
            VisitationClass::None => 0,
            VisitationClass::Class1 => 250,
            VisitationClass::Class2 => 850,
            VisitationClass::Class3 => 1950,
            VisitationClass::Class4 => 2750,
        }
    }
}

/// Monthly maintenance cost for a child of the given age, in whole kroner.
fn maintenance_cost(age: u8) -> i64 {
    match age {
        0..=5 => 6850,
        6..=10 => 7450,
        11..=14 => 8250,
        _ => 9000,
    }
}

/// Share of gross monthly income above which the payer is not asked to pay.
const ABILITY_TO_PAY_SHARE: f64 = 0.25;

/// Per-child breakdown of an estimate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChildEstimate {
    /// Age the estimate was computed for
    pub age: u8,

    /// Monthly maintenance cost for the age bracket
    pub cost: i64,

    /// The payer's income-weighted share of the cost
    pub share: i64,

    /// Visitation deduction applied
    pub deduction: i64,

    /// Resulting monthly amount, floored at zero
    pub amount: i64,
}

/// Result of a support estimate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Estimate {
    /// One entry per child, in input order
    pub children: Vec<ChildEstimate>,

    /// The payer's share of combined income (0.0 - 1.0)
    pub income_share: f64,

    /// Whether the ability-to-pay cap reduced the total
    pub capped: bool,

    /// Total monthly amount, capped and rounded to the nearest 10 kroner
    pub total: i64,
}

/// Estimate the monthly support amount for the given incomes and children.
///
/// Pure and deterministic. With zero combined income the cost is split
/// evenly rather than dividing by zero.
pub fn estimate(params: &EstimateParams) -> Estimate {
    let combined = params.payer_income + params.receiver_income;
    let income_share = if combined == 0 {
        0.5
    } else {
        params.payer_income as f64 / combined as f64
    };

    let deduction = params.visitation.deduction();
    let children: Vec<ChildEstimate> = params
        .child_ages
        .iter()
        .map(|&age| {
            let cost = maintenance_cost(age);
            let share = (cost as f64 * income_share).round() as i64;
            ChildEstimate {
                age,
                cost,
                share,
                deduction,
                amount: (share - deduction).max(0),
            }
        })
        .collect();

    let sum: i64 = children.iter().map(|c| c.amount).sum();
    let cap = (params.payer_income as f64 / 12.0 * ABILITY_TO_PAY_SHARE).round() as i64;
    let capped = sum > cap;
    let total = round_to_ten(sum.min(cap));

    Estimate {
        children,
        income_share,
        capped,
        total,
    }
}

/// Round a non-negative amount to the nearest 10 kroner.
fn round_to_ten(amount: i64) -> i64 {
    (amount + 5) / 10 * 10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(payer: u64, receiver: u64, ages: &[u8], visitation: VisitationClass) -> EstimateParams {
        EstimateParams {
            payer_income: payer,
            receiver_income: receiver,
            child_ages: ages.to_vec(),
            visitation,
        }
    }

    #[test]
    fn test_equal_incomes_split_cost_evenly() {
        let result = estimate(&params(480_000, 480_000, &[4], VisitationClass::None));
        assert_eq!(result.income_share, 0.5);
        assert_eq!(result.children[0].share, 3425);
        assert_eq!(result.total, 3430);
        assert!(!result.capped);
    }

    #[test]
    fn test_zero_combined_income_splits_evenly() {
        let result = estimate(&params(0, 0, &[8], VisitationClass::None));
        assert_eq!(result.income_share, 0.5);
        // Cap is zero with no payer income.
        assert_eq!(result.total, 0);
        assert!(result.capped);
    }

    #[test]
    fn test_visitation_deduction_floors_at_zero() {
        let result = estimate(&params(100_000, 900_000, &[2], VisitationClass::Class4));
        // Share is 10% of 6850 = 685, deduction 2750.
        assert_eq!(result.children[0].amount, 0);
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_age_brackets_select_cost() {
        for (age, cost) in [(0, 6850), (5, 6850), (6, 7450), (10, 7450), (11, 8250), (14, 8250), (15, 9000), (17, 9000)] {
            assert_eq!(maintenance_cost(age), cost, "age {age}");
        }
    }

    #[test]
    fn test_ability_to_pay_cap_engages() {
        // Monthly income 10_000, cap 2_500; three teenagers cost far more.
        let result = estimate(&params(120_000, 0, &[15, 16, 17], VisitationClass::None));
        assert!(result.capped);
        assert_eq!(result.total, 2500);
    }

    #[test]
    fn test_total_rounds_to_nearest_ten() {
        assert_eq!(round_to_ten(0), 0);
        assert_eq!(round_to_ten(4), 0);
        assert_eq!(round_to_ten(5), 10);
        assert_eq!(round_to_ten(3424), 3420);
        assert_eq!(round_to_ten(3425), 3430);
    }

    #[test]
    fn test_visitation_class_parsing() {
        assert_eq!("0".parse::<VisitationClass>(), Ok(VisitationClass::None));
        assert_eq!("3".parse::<VisitationClass>(), Ok(VisitationClass::Class3));
        assert!("5".parse::<VisitationClass>().is_err());
    }
}
