use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::QueryError;
use crate::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimatedItem<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub time: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEstimate<'a> {
    pub valid_items: Vec<EstimatedItem<'a>>,
    pub invalid_items: Vec<String>,
    pub estimated_total_minutes: u64,
    pub estimated_total_hours: f64,
}

/// Total time for a batch of crafts.
///
/// Ids absent from the catalog are reported in `invalid_items` and
/// contribute nothing. Only the first number in each `time_required`
/// text counts, so "15-20 minutes" adds 15 and "1-2 hours" adds 60.
pub fn estimate_time<'a, S>(catalog: &'a Catalog, ids: &[S]) -> Result<TimeEstimate<'a>, QueryError>
where
    S: AsRef<str>,
{
    if ids.is_empty() {
        return Err(QueryError::EmptyInput("ids cannot be empty".to_string()));
    }

    let mut valid_items = Vec::new();
    let mut invalid_items = Vec::new();
    let mut total: u64 = 0;

    for id in ids {
        let id = id.as_ref();
        match catalog.get_key_value(id) {
            Some((known, item)) => {
                total = total.saturating_add(minutes_for(&item.time_required));
                valid_items.push(EstimatedItem {
                    id: known,
                    name: &item.name,
                    time: &item.time_required,
                });
            }
            None => invalid_items.push(id.to_string()),
        }
    }

    Ok(TimeEstimate {
        valid_items,
        invalid_items,
        estimated_total_minutes: total,
        estimated_total_hours: round_hours(total),
    })
}

/// Minutes contributed by one `time_required` text.
///
/// "minute" wins over "hour" when both appear. No unit or no digits
/// means zero.
fn minutes_for(time_required: &str) -> u64 {
    let text = time_required.to_lowercase();
    if text.contains("minute") {
        first_number(&text)
    } else if text.contains("hour") {
        first_number(&text).saturating_mul(60)
    } else {
        0
    }
}

fn first_number(text: &str) -> u64 {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    let digits = DIGITS.get_or_init(|| Regex::new("[0-9]+").expect("digit pattern must compile"));

    digits
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn round_hours(minutes: u64) -> f64 {
    (minutes as f64 / 60.0 * 100.0).round() / 100.0
}
