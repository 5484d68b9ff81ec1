//! Navigation Tracker
//!
//! Maps the scroll offset to the section the viewport has most recently
//! scrolled past.

/// A page section and its top offset in document order
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Last section (in document order) whose `top - offset_px` is at or above
/// `scroll_y`. `None` while the page is above every section.
pub fn active_section<'a>(scroll_y: f64, sections: &'a [SectionOffset], offset_px: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|section| scroll_y >= section.top - offset_px)
        .last()
        .map(|section| section.id.as_str())
}

/// `"#about"` -> `Some("about")`
pub fn section_id_from_href(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sections() -> Vec<SectionOffset> {
        vec![
            SectionOffset::new("home", 0.0),
            SectionOffset::new("about", 600.0),
            SectionOffset::new("checklist", 1400.0),
            SectionOffset::new("tips", 2600.0),
        ]
    }

    #[test]
    fn test_active_section_uses_threshold() {
        let sections = make_sections();
        assert_eq!(active_section(0.0, &sections, 200.0), Some("home"));
        assert_eq!(active_section(399.0, &sections, 200.0), Some("home"));
        assert_eq!(active_section(400.0, &sections, 200.0), Some("about"));
        assert_eq!(active_section(1300.0, &sections, 200.0), Some("checklist"));
        assert_eq!(active_section(9000.0, &sections, 200.0), Some("tips"));
    }

    #[test]
    fn test_no_section_reached() {
        let sections = vec![SectionOffset::new("late", 1000.0)];
        assert_eq!(active_section(100.0, &sections, 200.0), None);
        assert_eq!(active_section(100.0, &[], 200.0), None);
    }

    #[test]
    fn test_section_id_from_href() {
        assert_eq!(section_id_from_href("#tips"), Some("tips"));
        assert_eq!(section_id_from_href("#"), None);
        assert_eq!(section_id_from_href("tips.html"), None);
    }
}
