use chrono::NaiveDate;

/// `2024-01-05` -> `January 5, 2024`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// First character of each whitespace-separated word: `Jane Q Doe` -> `JQD`.
pub fn author_initials(author: &str) -> String {
    author
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
