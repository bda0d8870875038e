use crate::shared::icons::icon;
use leptos::prelude::*;

/// How a KPI value is rendered on its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiFormat {
    /// Thousands-separated integer, `—` when absent.
    Integer,
    /// Two decimal places, `—` when absent.
    Decimal2,
    /// Two decimal places with a `%` suffix, `0%` when absent or zero.
    Percent2,
}

pub fn format_kpi(value: Option<f64>, format: KpiFormat) -> String {
    match format {
        KpiFormat::Integer => match value {
            Some(v) => format_thousands(v as i64),
            None => "\u{2014}".to_string(),
        },
        KpiFormat::Decimal2 => match value {
            Some(v) => format!("{:.2}", v),
            None => "\u{2014}".to_string(),
        },
        KpiFormat::Percent2 => match value {
            Some(v) if v != 0.0 => format!("{:.2}%", v),
            _ => "0%".to_string(),
        },
    }
}

fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[component]
pub fn KpiCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// KPI value (`None` = not reported by the backend)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: KpiFormat,
) -> impl IntoView {
    let formatted = move || format_kpi(value.get(), format);

    view! {
        <div class="kpi-card">
            <div class="kpi-card__icon">{icon(icon_name)}</div>
            <div class="kpi-card__content">
                <div class="kpi-card__label">{label}</div>
                <div class="kpi-card__value" title=formatted>
                    {formatted}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_format() {
        assert_eq!(format_kpi(Some(1234567.0), KpiFormat::Integer), "1\u{a0}234\u{a0}567");
        assert_eq!(format_kpi(Some(0.0), KpiFormat::Integer), "0");
        assert_eq!(format_kpi(None, KpiFormat::Integer), "\u{2014}");
    }

    #[test]
    fn test_decimal_format() {
        assert_eq!(format_kpi(Some(1234.5), KpiFormat::Decimal2), "1234.50");
        assert_eq!(format_kpi(None, KpiFormat::Decimal2), "\u{2014}");
    }

    #[test]
    fn test_percent_shows_zero_when_absent_or_zero() {
        assert_eq!(format_kpi(None, KpiFormat::Percent2), "0%");
        assert_eq!(format_kpi(Some(0.0), KpiFormat::Percent2), "0%");
        assert_eq!(format_kpi(Some(3.456), KpiFormat::Percent2), "3.46%");
    }
}
