//! Output formatting utilities

use crate::application::{Dashboard, EntrySummary, ProfileCard};
use crate::domain::{DraftField, Entry, EntryType};
use chrono::NaiveDate;

fn format_date(date: NaiveDate, date_format: &str) -> String {
    date.format(date_format).to_string()
}

fn format_summary_line(summary: &EntrySummary, date_format: &str) -> String {
    format!(
        "{}  {:<11}  {}: {}\n",
        format_date(summary.date, date_format),
        summary.entry_type,
        summary.headline,
        summary.body
    )
}

/// Format the timeline of one profile
pub fn format_timeline(profile_name: Option<&str>, entries: &[&Entry], date_format: &str) -> String {
    let Some(name) = profile_name else {
        return "No active profile".to_string();
    };

    let mut output = format!("{}\n", name);
    if entries.is_empty() {
        output.push_str("No entries yet\n");
        return output;
    }

    for entry in entries {
        output.push_str(&format_summary_line(&EntrySummary::from(*entry), date_format));
    }
    output
}

/// Format the home dashboard
pub fn format_dashboard(dashboard: &Dashboard, date_format: &str) -> String {
    let mut output = format!("Total entries: {}\n", dashboard.total_entries);
    output.push_str(&format!(
        "Favorite categories: {}\n",
        dashboard.favorite_categories
    ));
    for entry_type in EntryType::ALL {
        output.push_str(&format!(
            "  {:<11}  {}\n",
            entry_type,
            dashboard.count(entry_type)
        ));
    }

    match &dashboard.most_recent {
        Some(summary) => {
            output.push_str("Most recent:\n");
            output.push_str(&format_summary_line(summary, date_format));
        }
        None => output.push_str("No entries yet\n"),
    }
    output
}

/// Format the profile list; the active profile is starred
pub fn format_profiles(cards: &[ProfileCard<'_>], date_format: &str) -> String {
    if cards.is_empty() {
        return "No profiles found".to_string();
    }

    let mut output = String::new();
    for card in cards {
        output.push_str(&format!(
            "{} {}  born {}  age {}\n",
            if card.active { "*" } else { " " },
            card.profile.name,
            format_date(card.profile.birthday, date_format),
            card.age
        ));
    }
    output
}

/// Format a favorites list
pub fn format_favorites(entries: &[&Entry], date_format: &str) -> String {
    if entries.is_empty() {
        return "No favorites found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let summary = EntrySummary::from(*entry);
        output.push_str(&format!(
            "{}  {}: {}\n",
            format_date(summary.date, date_format),
            summary.headline,
            summary.body
        ));
    }
    output
}

/// Format entry types and the suggestion lists of list-backed fields
pub fn format_suggestions() -> String {
    let types: Vec<&str> = EntryType::ALL.iter().map(EntryType::as_str).collect();
    let mut output = format!("Entry types: {}\n", types.join(", "));

    for (label, field) in [
        ("Favorite categories", DraftField::FavoriteCategory),
        ("Measurements", DraftField::MeasurementType),
        ("Milestone categories", DraftField::MilestoneCategory),
    ] {
        output.push_str(&format!("{}: {}\n", label, field.suggestions().join(", ")));
    }
    output
}
