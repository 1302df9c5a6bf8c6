//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub tabs: Rect,
    pub body: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Gallery overlay areas
pub struct GalleryLayout {
    pub popup: Rect,
    pub image: Rect,
    pub indicator: Rect,
    pub details: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout: section tabs, body, status line, help bar
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    MainLayout {
        tabs: chunks[0],
        body: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}

/// Calculate the gallery overlay: image panel with a position strip on the
/// left (2/3), project details on the right (1/3)
pub fn calculate_gallery_layout(area: Rect) -> GalleryLayout {
    let margin = 2;
    let popup = Rect::new(
        area.x + margin,
        area.y + margin,
        area.width.saturating_sub(margin * 2),
        area.height.saturating_sub(margin * 2),
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .margin(1)
        .split(popup);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(columns[0]);

    GalleryLayout {
        popup,
        image: left[0],
        indicator: left[1],
        details: columns[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_popup(area, 40, 10), Rect::new(30, 15, 40, 10));

        let small = Rect::new(0, 0, 20, 5);
        let popup = centered_popup(small, 40, 10);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 5);
    }

    #[test]
    fn test_gallery_layout_fits_inside_popup() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = calculate_gallery_layout(area);

        assert!(layout.popup.width <= area.width);
        for inner in [layout.image, layout.indicator, layout.details] {
            assert!(inner.x >= layout.popup.x);
            assert!(inner.right() <= layout.popup.right());
            assert!(inner.bottom() <= layout.popup.bottom());
        }
        assert!(layout.image.width > layout.details.width);
    }

    #[test]
    fn test_main_layout_stacks_vertically() {
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.tabs.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.help.height, 3);
        assert_eq!(layout.body.height, 23);
    }
}
