use crate::{Activity, ActivitySupport, CostMode};

/// Anything with a price tag that can enter an event's totals
pub trait CostItem {
    fn item_id(&self) -> &str;
    fn cost_mode(&self) -> &CostMode;
    fn cost(&self) -> Option<&str>;
    fn min_cost(&self) -> Option<&str>;
}

impl CostItem for Activity {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn cost_mode(&self) -> &CostMode {
        &self.cost_mode
    }

    fn cost(&self) -> Option<&str> {
        self.cost.as_deref()
    }

    fn min_cost(&self) -> Option<&str> {
        self.min_cost.as_deref()
    }
}

impl CostItem for ActivitySupport {
    fn item_id(&self) -> &str {
        &self.id
    }

    fn cost_mode(&self) -> &CostMode {
        &self.cost_mode
    }

    fn cost(&self) -> Option<&str> {
        self.cost.as_deref()
    }

    fn min_cost(&self) -> Option<&str> {
        self.min_cost.as_deref()
    }
}

/// Parse a decimal price string, treating anything unparseable as zero
pub fn parse_cost(value: Option<&str>) -> f64 {
    value
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|cost| cost.is_finite())
        .unwrap_or(0.0)
}

/// Sum the costs of `items`, optionally restricted to the ids in `selected`
///
/// Fixed-mode items contribute their `cost`, range-mode items their
/// `min_cost`, anything else contributes zero.
pub fn sum_item_cost<T: CostItem>(items: &[T], selected: Option<&[String]>) -> f64 {
    items
        .iter()
        .filter(|item| selected.map_or(true, |ids| ids.iter().any(|id| id == item.item_id())))
        .map(|item| match item.cost_mode() {
            CostMode::Fixed => parse_cost(item.cost()),
            CostMode::Range => parse_cost(item.min_cost()),
            CostMode::Unknown => 0.0,
        })
        .sum()
}

/// Total an event's activity and support costs independently and add them up
pub fn calculate_event_cost(
    activities: &[Activity],
    supports: &[ActivitySupport],
    selected_activities: Option<&[String]>,
    selected_supports: Option<&[String]>,
) -> f64 {
    sum_item_cost(activities, selected_activities) + sum_item_cost(supports, selected_supports)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(id: &str, cost_mode: CostMode, cost: &str, min_cost: &str) -> Activity {
        Activity {
            id: id.to_string(),
            cost_mode,
            cost: Some(cost.to_string()),
            min_cost: Some(min_cost.to_string()),
            ..Default::default()
        }
    }

    fn support(id: &str, cost_mode: CostMode, cost: &str, min_cost: &str) -> ActivitySupport {
        ActivitySupport {
            id: id.to_string(),
            cost_mode,
            cost: Some(cost.to_string()),
            min_cost: Some(min_cost.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn empty_list_sums_to_zero() {
        assert_eq!(sum_item_cost::<Activity>(&[], None), 0.0);
    }

    #[test]
    fn mode_picks_the_meaningful_field() {
        let items = vec![
            activity("fixed", CostMode::Fixed, "20.00", "999"),
            activity("range", CostMode::Range, "999", "15.00"),
            activity("unknown", CostMode::Unknown, "999", "999"),
        ];

        assert_eq!(sum_item_cost(&items, None), 35.0);
    }

    #[test]
    fn unparseable_costs_contribute_zero() {
        let items = vec![
            Activity {
                id: "blank".to_string(),
                cost_mode: CostMode::Fixed,
                ..Default::default()
            },
            activity("garbage", CostMode::Fixed, "twenty", "0"),
            activity("paid", CostMode::Fixed, "5.00", "0"),
        ];

        assert_eq!(sum_item_cost(&items, None), 5.0);
    }

    #[test]
    fn selection_restricts_the_sum_order_independently() {
        let items = vec![
            activity("a", CostMode::Fixed, "1.00", "0"),
            activity("b", CostMode::Fixed, "2.00", "0"),
            activity("c", CostMode::Fixed, "4.00", "0"),
        ];

        let selected = vec!["c".to_string(), "a".to_string()];
        assert_eq!(sum_item_cost(&items, Some(&selected)), 5.0);

        let reversed = vec!["a".to_string(), "c".to_string()];
        assert_eq!(sum_item_cost(&items, Some(&reversed)), 5.0);
    }

    #[test]
    fn event_cost_is_additive() {
        let activities = vec![
            activity("a", CostMode::Fixed, "20.00", "0"),
            activity("b", CostMode::Range, "0", "15.00"),
        ];
        let supports = vec![
            support("s1", CostMode::Fixed, "5.00", "0"),
            support("s2", CostMode::Range, "0", "10.00"),
        ];

        assert_eq!(calculate_event_cost(&activities, &supports, None, None), 50.0);
        assert_eq!(
            calculate_event_cost(&activities, &supports, None, None),
            sum_item_cost(&activities, None) + sum_item_cost(&supports, None)
        );
    }
}
