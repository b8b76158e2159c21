pub mod panels;
pub mod plot;

use crate::data::filter::Choice;

/// Label shown for a filter choice in the widgets.
pub fn choice_label(choice: &Choice) -> &str {
    match choice {
        Choice::All => "All",
        Choice::Value(v) => v,
    }
}

/// Format an amount as dollars with thousands separators, e.g. `$12,345.67`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Format a percentage with one decimal, e.g. `33.3%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
