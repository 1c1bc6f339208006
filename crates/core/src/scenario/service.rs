//! Scenario impact calculations.
//!
//! This is a coarse proportional model over the wedding-level total. It is
//! intentionally separate from the line-item model in `crate::estimate` and
//! the two are not expected to agree.

use rust_decimal::Decimal;

use super::error::ScenarioError;
use super::types::{
    BudgetScenario, RankedScenario, ScenarioAssumptions, ScenarioBaseline, ScenarioComparison,
    ScenarioFormData, ScenarioImpact,
};

/// Service for scenario previews and validation.
pub struct ScenarioService;

impl ScenarioService {
    /// Computes the impact of a scenario against a baseline.
    ///
    /// Each term is computed independently against the same baseline and the
    /// terms are added, never compounded. Amounts beyond the `Decimal` range
    /// saturate at its bounds.
    #[must_use]
    pub fn calculate_impact(
        baseline: &ScenarioBaseline,
        form: &ScenarioFormData,
        assumptions: &ScenarioAssumptions,
    ) -> ScenarioImpact {
        let total_budget = baseline.total_budget;
        let per_person_cost = Self::per_person_cost(baseline, assumptions);

        let guest_impact = Decimal::from(form.guest_count_change).saturating_mul(per_person_cost);
        let venue_impact = total_budget
            .saturating_mul(assumptions.venue_share)
            .saturating_mul(form.venue_multiplier.saturating_sub(Decimal::ONE));
        let catering_impact = total_budget
            .saturating_mul(assumptions.catering_share)
            .saturating_mul(form.catering_multiplier.saturating_sub(Decimal::ONE));
        let overall_impact =
            total_budget.saturating_mul(form.overall_multiplier.saturating_sub(Decimal::ONE));

        let total_impact = guest_impact
            .saturating_add(venue_impact)
            .saturating_add(catering_impact)
            .saturating_add(overall_impact);
        let percent_change = if total_budget.is_zero() {
            Decimal::ZERO
        } else {
            saturating_div(total_impact, total_budget).saturating_mul(Decimal::ONE_HUNDRED)
        };

        ScenarioImpact {
            per_person_cost,
            guest_impact,
            venue_impact,
            catering_impact,
            overall_impact,
            total_impact,
            new_total: total_budget.saturating_add(total_impact),
            percent_change,
        }
    }

    /// Budget attributed to one guest, or the fallback when it is undefined.
    #[must_use]
    pub fn per_person_cost(
        baseline: &ScenarioBaseline,
        assumptions: &ScenarioAssumptions,
    ) -> Decimal {
        if baseline.total_budget > Decimal::ZERO && baseline.base_guest_count > 0 {
            saturating_div(
                baseline.total_budget.saturating_mul(assumptions.per_guest_share),
                Decimal::from(baseline.base_guest_count),
            )
        } else {
            assumptions.fallback_per_person_cost
        }
    }

    /// Validates a scenario form before it is saved.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: an empty name, a non-positive
    /// multiplier, or a guest change that leaves fewer than zero guests.
    pub fn validate(form: &ScenarioFormData, base_guest_count: i64) -> Result<(), ScenarioError> {
        if form.name.trim().is_empty() {
            return Err(ScenarioError::EmptyName);
        }

        for (field, value) in [
            ("venue_multiplier", form.venue_multiplier),
            ("catering_multiplier", form.catering_multiplier),
            ("overall_multiplier", form.overall_multiplier),
        ] {
            if value <= Decimal::ZERO {
                return Err(ScenarioError::NonPositiveMultiplier { field, value });
            }
        }

        let resulting = base_guest_count.saturating_add(form.guest_count_change);
        if resulting < 0 {
            return Err(ScenarioError::NegativeGuestCount { resulting });
        }

        Ok(())
    }

    /// Ranks saved scenarios by resulting total, cheapest first.
    ///
    /// Ties keep their input order.
    #[must_use]
    pub fn compare(
        baseline: &ScenarioBaseline,
        scenarios: &[BudgetScenario],
        assumptions: &ScenarioAssumptions,
    ) -> ScenarioComparison {
        let mut ranked: Vec<RankedScenario> = scenarios
            .iter()
            .map(|s| RankedScenario {
                scenario_id: s.id,
                name: s.form.name.clone(),
                impact: Self::calculate_impact(baseline, &s.form, assumptions),
            })
            .collect();

        ranked.sort_by(|a, b| a.impact.new_total.cmp(&b.impact.new_total));

        ScenarioComparison {
            baseline: *baseline,
            scenarios: ranked,
        }
    }
}

/// Division that clamps to the `Decimal` bounds instead of overflowing.
/// The divisor must be non-zero.
fn saturating_div(numerator: Decimal, divisor: Decimal) -> Decimal {
    numerator.checked_div(divisor).unwrap_or_else(|| {
        if numerator.is_sign_negative() == divisor.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use chrono::Utc;
    use mandap_shared::types::{ScenarioId, WeddingId};
    use rust_decimal_macros::dec;

    fn baseline(total: Decimal, guests: i64) -> ScenarioBaseline {
        ScenarioBaseline {
            total_budget: total,
            base_guest_count: guests,
        }
    }

    fn form(name: &str) -> ScenarioFormData {
        ScenarioFormData {
            name: name.to_string(),
            ..ScenarioFormData::default()
        }
    }

    #[test]
    fn test_worked_example() {
        let form = ScenarioFormData {
            guest_count_change: 20,
            venue_multiplier: dec!(1.1),
            ..form("Bigger venue")
        };
        let impact = ScenarioService::calculate_impact(
            &baseline(dec!(100000), 200),
            &form,
            &ScenarioAssumptions::default(),
        );

        assert_eq!(impact.per_person_cost, dec!(300));
        assert_eq!(impact.guest_impact, dec!(6000));
        assert_eq!(impact.venue_impact, dec!(2500));
        assert_eq!(impact.catering_impact, Decimal::ZERO);
        assert_eq!(impact.overall_impact, Decimal::ZERO);
        assert_eq!(impact.total_impact, dec!(8500));
        assert_eq!(impact.new_total, dec!(108500));
        assert_eq!(impact.percent_change, dec!(8.5));
    }

    #[test]
    fn test_terms_are_not_compounded() {
        let form = ScenarioFormData {
            venue_multiplier: dec!(2),
            catering_multiplier: dec!(2),
            overall_multiplier: dec!(2),
            ..form("Everything doubles")
        };
        let impact = ScenarioService::calculate_impact(
            &baseline(dec!(10000), 100),
            &form,
            &ScenarioAssumptions::default(),
        );

        assert_eq!(impact.venue_impact, dec!(2500));
        assert_eq!(impact.catering_impact, dec!(3500));
        assert_eq!(impact.overall_impact, dec!(10000));
        assert_eq!(impact.new_total, dec!(26000));
    }

    #[test]
    fn test_zero_baseline_uses_fallbacks() {
        let form = ScenarioFormData {
            guest_count_change: 10,
            overall_multiplier: dec!(1.5),
            ..form("From scratch")
        };
        let impact = ScenarioService::calculate_impact(
            &baseline(Decimal::ZERO, 0),
            &form,
            &ScenarioAssumptions::default(),
        );

        assert_eq!(impact.per_person_cost, dec!(150));
        assert_eq!(impact.guest_impact, dec!(1500));
        assert_eq!(impact.overall_impact, Decimal::ZERO);
        assert_eq!(impact.new_total, dec!(1500));
        assert_eq!(impact.percent_change, Decimal::ZERO);
    }

    #[test]
    fn test_huge_budget_saturates_new_total() {
        let form = ScenarioFormData {
            overall_multiplier: dec!(2),
            ..form("Double everything")
        };
        let impact = ScenarioService::calculate_impact(
            &baseline(dec!(60000000000000000000000000000), 200),
            &form,
            &ScenarioAssumptions::default(),
        );

        assert_eq!(impact.overall_impact, dec!(60000000000000000000000000000));
        assert_eq!(impact.total_impact, dec!(60000000000000000000000000000));
        assert_eq!(impact.new_total, Decimal::MAX);
        assert_eq!(impact.percent_change, dec!(100));
    }

    #[test]
    fn test_tiny_budget_saturates_percent_change() {
        let form = ScenarioFormData {
            guest_count_change: 1,
            ..form("One more")
        };
        let impact = ScenarioService::calculate_impact(
            &baseline(dec!(0.0000000000000000000000000001), 0),
            &form,
            &ScenarioAssumptions::default(),
        );

        assert_eq!(impact.guest_impact, dec!(150));
        assert_eq!(impact.percent_change, Decimal::MAX);

        let fewer = ScenarioFormData {
            guest_count_change: -1,
            ..self::form("One fewer")
        };
        let impact = ScenarioService::calculate_impact(
            &baseline(dec!(0.0000000000000000000000000001), 0),
            &fewer,
            &ScenarioAssumptions::default(),
        );
        assert_eq!(impact.percent_change, Decimal::MIN);
    }

    #[test]
    fn test_zero_guests_uses_fallback_per_person() {
        let per_person = ScenarioService::per_person_cost(
            &baseline(dec!(50000), 0),
            &ScenarioAssumptions::default(),
        );
        assert_eq!(per_person, dec!(150));
    }

    #[test]
    fn test_validate() {
        assert!(ScenarioService::validate(&form("Plan B"), 100).is_ok());
        assert_eq!(
            ScenarioService::validate(&form("   "), 100),
            Err(ScenarioError::EmptyName)
        );

        let zero_venue = ScenarioFormData {
            venue_multiplier: Decimal::ZERO,
            ..form("Free venue")
        };
        assert_eq!(
            ScenarioService::validate(&zero_venue, 100),
            Err(ScenarioError::NonPositiveMultiplier {
                field: "venue_multiplier",
                value: Decimal::ZERO,
            })
        );

        let too_few = ScenarioFormData {
            guest_count_change: -101,
            ..form("Elope")
        };
        assert_eq!(
            ScenarioService::validate(&too_few, 100),
            Err(ScenarioError::NegativeGuestCount { resulting: -1 })
        );

        let exactly_zero = ScenarioFormData {
            guest_count_change: -100,
            ..form("Elope")
        };
        assert!(ScenarioService::validate(&exactly_zero, 100).is_ok());
    }

    #[test]
    fn test_compare_ranks_by_new_total() {
        let wedding_id = WeddingId::new();
        let saved = |f: ScenarioFormData| BudgetScenario {
            id: ScenarioId::new(),
            wedding_id,
            form: f,
            created_at: Utc::now(),
        };
        let scenarios = vec![
            saved(ScenarioFormData {
                overall_multiplier: dec!(1.2),
                ..form("Splurge")
            }),
            saved(ScenarioFormData {
                guest_count_change: -50,
                ..form("Trim list")
            }),
            saved(form("As is")),
        ];

        let comparison = ScenarioService::compare(
            &baseline(dec!(100000), 200),
            &scenarios,
            &ScenarioAssumptions::default(),
        );

        let names: Vec<&str> = comparison
            .scenarios
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Trim list", "As is", "Splurge"]);
        assert_eq!(comparison.scenarios[0].impact.new_total, dec!(85000));
    }

    #[test]
    fn test_form_defaults_from_json() {
        let form: ScenarioFormData =
            serde_json::from_str(r#"{"name":"Plan C","guestCountChange":5}"#).unwrap();
        assert_eq!(form.guest_count_change, 5);
        assert_eq!(form.venue_multiplier, Decimal::ONE);
        assert_eq!(form.catering_multiplier, Decimal::ONE);
        assert_eq!(form.overall_multiplier, Decimal::ONE);
    }
}
