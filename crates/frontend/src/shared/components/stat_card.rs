use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Neutral,
    Good,
    Warning,
}

/// 1234567 -> "1,234,567"
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// None while loading or after an error
    #[prop(into)]
    value: Signal<Option<usize>>,
    #[prop(into, optional)]
    tone: Signal<Option<StatTone>>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let class = move || match tone.get().unwrap_or(StatTone::Neutral) {
        StatTone::Good => "stat-card stat-card--success",
        StatTone::Warning => "stat-card stat-card--warning",
        StatTone::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_count(v),
        None => "-".to_string(),
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
