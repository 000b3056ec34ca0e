//! Plain-text rendering of a directory page.
//!
//! The card layout is the same one `bootstrap::parse_rendered_cards` reads
//! back, so a rendered listing can seed a new session.

use crate::model::employee::Employee;

pub const EMPTY_LISTING: &str = "No employees found.";

/// Renders one employee card.
pub fn render_card(employee: &Employee) -> String {
    format!(
        "{}\nEmail: {}\nDepartment: {}\nRole: {}",
        employee.full_name(),
        employee.email,
        employee.department,
        employee.role
    )
}

/// Renders a sequence of cards separated by blank lines.
pub fn render_cards(records: &[Employee]) -> String {
    if records.is_empty() {
        return EMPTY_LISTING.to_string();
    }
    records
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Pagination caption, e.g. `Page 2 of 3`.
pub fn page_label(current_page: usize, total_pages: usize) -> String {
    format!("Page {current_page} of {total_pages}")
}

/// Renders cards followed by the pagination caption.
pub fn render_listing(records: &[Employee], current_page: usize, total_pages: usize) -> String {
    format!(
        "{}\n\n{}",
        render_cards(records),
        page_label(current_page, total_pages)
    )
}

#[cfg(test)]
mod tests {
    use super::{render_card, render_cards, render_listing};
    use crate::model::employee::Employee;

    #[test]
    fn card_lists_fields_with_labels() {
        let card = render_card(&Employee::new("Ann", "Lee", "a@x.com", "Eng", "Dev"));
        assert_eq!(card, "Ann Lee\nEmail: a@x.com\nDepartment: Eng\nRole: Dev");
    }

    #[test]
    fn empty_listing_has_placeholder() {
        assert_eq!(render_cards(&[]), "No employees found.");
        assert_eq!(render_listing(&[], 1, 1), "No employees found.\n\nPage 1 of 1");
    }
}
