//! Order status labels and their display colors

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;

use super::error::ContractViolation;

/// Closed set of order lifecycle labels. Display only; no workflow hangs
/// off these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusLabel {
    InProgress,
    Complete,
    Pending,
    Approved,
    Rejected,
}

impl StatusLabel {
    pub const ALL: [StatusLabel; 5] = [
        StatusLabel::InProgress,
        StatusLabel::Complete,
        StatusLabel::Pending,
        StatusLabel::Approved,
        StatusLabel::Rejected,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            StatusLabel::InProgress => "In Progress",
            StatusLabel::Complete => "Complete",
            StatusLabel::Pending => "Pending",
            StatusLabel::Approved => "Approved",
            StatusLabel::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for StatusLabel {
    type Err = ContractViolation;

    /// Accepts the display title in any case, with or without the space
    /// ("In Progress", "inprogress").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "inprogress" => Ok(StatusLabel::InProgress),
            "complete" => Ok(StatusLabel::Complete),
            "pending" => Ok(StatusLabel::Pending),
            "approved" => Ok(StatusLabel::Approved),
            "rejected" => Ok(StatusLabel::Rejected),
            _ => Err(ContractViolation::UnknownStatus(s.to_string())),
        }
    }
}

/// Color category a status renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayCategory {
    Active,
    Done,
    Waiting,
    Accepted,
    Muted,
}

impl DisplayCategory {
    pub fn color(&self) -> Color {
        match self {
            DisplayCategory::Active => Color::Rgb(0x3b, 0x82, 0xf6),
            DisplayCategory::Done => Color::Rgb(0x22, 0xc5, 0x5e),
            DisplayCategory::Waiting => Color::Rgb(0xb1, 0xe3, 0xfe),
            DisplayCategory::Accepted => Color::Rgb(0xff, 0xe8, 0x98),
            DisplayCategory::Muted => Color::Rgb(0x71, 0x71, 0x7a),
        }
    }
}

/// Total mapping from label to category. Adding a label without a category
/// is a compile error.
pub fn classify(status: StatusLabel) -> DisplayCategory {
    match status {
        StatusLabel::InProgress => DisplayCategory::Active,
        StatusLabel::Complete => DisplayCategory::Done,
        StatusLabel::Pending => DisplayCategory::Waiting,
        StatusLabel::Approved => DisplayCategory::Accepted,
        StatusLabel::Rejected => DisplayCategory::Muted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_classify_is_total_and_distinct() {
        let categories: HashSet<DisplayCategory> =
            StatusLabel::ALL.iter().map(|s| classify(*s)).collect();
        assert_eq!(categories.len(), StatusLabel::ALL.len());
    }

    #[test]
    fn test_colors_are_distinct() {
        let colors: Vec<Color> = StatusLabel::ALL
            .iter()
            .map(|s| classify(*s).color())
            .collect();
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_parse_titles() {
        for status in StatusLabel::ALL {
            assert_eq!(status.title().parse::<StatusLabel>(), Ok(status));
        }
        assert_eq!("in-progress".parse(), Ok(StatusLabel::InProgress));
        assert_eq!("APPROVED".parse(), Ok(StatusLabel::Approved));
    }

    #[test]
    fn test_unknown_label_is_violation() {
        assert_eq!(
            "Shipped".parse::<StatusLabel>(),
            Err(ContractViolation::UnknownStatus("Shipped".to_string()))
        );
    }
}
