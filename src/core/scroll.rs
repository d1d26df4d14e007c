/// Percentage of the page scrolled, in \[0, 100\].
///
/// A document that fits in the viewport (no scrollable height) reports 0.
#[inline]
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// CSS width for the progress bar.
#[inline]
pub fn progress_width(percent: f64) -> String {
    format!("{:.2}%", percent)
}

/// Document y to scroll to so a section starting at `element_top` (viewport
/// relative) clears a fixed header of `header_offset` px.
#[inline]
pub fn section_scroll_target(element_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    element_top + page_y_offset - header_offset
}
