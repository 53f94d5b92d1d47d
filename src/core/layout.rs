use crate::domain::model::{ItemSize, MenuItem, Position};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Breakpoint {
    Phone,
    Tablet,
    LargeTablet,
    Desktop,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 4] = [
        Breakpoint::Phone,
        Breakpoint::Tablet,
        Breakpoint::LargeTablet,
        Breakpoint::Desktop,
    ];

    pub fn from_width(width_px: u32) -> Self {
        match width_px {
            0..=767 => Breakpoint::Phone,
            768..=1023 => Breakpoint::Tablet,
            1024..=1279 => Breakpoint::LargeTablet,
            _ => Breakpoint::Desktop,
        }
    }

    pub fn policy(self) -> &'static LayoutPolicy {
        &POLICIES[self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavStyle {
    BottomTabs,
    SideRail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetailStyle {
    /// Full-width image, overlay capped at 70% of the viewport height.
    Sheet,
    /// Thumbnail next to the description.
    Inline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPolicy {
    pub breakpoint: Breakpoint,
    /// Gallery bubble diameters for small, medium and large items.
    pub diameters_px: [u16; 3],
    pub label_font_rem: f32,
    /// Positions are clamped into this percent range when set.
    pub position_clamp: Option<(u8, u8)>,
    pub nav: NavStyle,
    pub detail: DetailStyle,
}

static POLICIES: [LayoutPolicy; 4] = [
    LayoutPolicy {
        breakpoint: Breakpoint::Phone,
        diameters_px: [64, 80, 96],
        label_font_rem: 0.7,
        position_clamp: Some((20, 80)),
        nav: NavStyle::BottomTabs,
        detail: DetailStyle::Sheet,
    },
    LayoutPolicy {
        breakpoint: Breakpoint::Tablet,
        diameters_px: [80, 96, 112],
        label_font_rem: 0.8,
        position_clamp: None,
        nav: NavStyle::SideRail,
        detail: DetailStyle::Inline,
    },
    LayoutPolicy {
        breakpoint: Breakpoint::LargeTablet,
        diameters_px: [88, 112, 136],
        label_font_rem: 0.85,
        position_clamp: None,
        nav: NavStyle::SideRail,
        detail: DetailStyle::Inline,
    },
    LayoutPolicy {
        breakpoint: Breakpoint::Desktop,
        diameters_px: [96, 128, 160],
        label_font_rem: 0.9,
        position_clamp: None,
        nav: NavStyle::SideRail,
        detail: DetailStyle::Inline,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub x: u8,
    pub y: u8,
    pub diameter_px: u16,
    pub font_rem: f32,
}

impl LayoutPolicy {
    pub fn diameter(&self, size: ItemSize) -> u16 {
        match size {
            ItemSize::Small => self.diameters_px[0],
            ItemSize::Medium => self.diameters_px[1],
            ItemSize::Large => self.diameters_px[2],
        }
    }

    pub fn adjust(&self, position: Position) -> Position {
        match self.position_clamp {
            Some((lo, hi)) => Position {
                x: position.x.clamp(lo, hi),
                y: position.y.clamp(lo, hi),
            },
            None => position,
        }
    }

    pub fn place(&self, item: &MenuItem) -> Placement {
        let Position { x, y } = self.adjust(item.position);
        Placement {
            x,
            y,
            diameter_px: self.diameter(item.size),
            font_rem: self.label_font_rem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Money;

    #[test]
    fn test_breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(375), Breakpoint::Phone);
        assert_eq!(Breakpoint::from_width(767), Breakpoint::Phone);
        assert_eq!(Breakpoint::from_width(768), Breakpoint::Tablet);
        assert_eq!(Breakpoint::from_width(1024), Breakpoint::LargeTablet);
        assert_eq!(Breakpoint::from_width(1280), Breakpoint::Desktop);
    }

    #[test]
    fn test_table_is_indexed_by_breakpoint() {
        for breakpoint in Breakpoint::ALL {
            assert_eq!(breakpoint.policy().breakpoint, breakpoint);
            let [s, m, l] = breakpoint.policy().diameters_px;
            assert!(s < m && m < l);
        }
    }

    #[test]
    fn test_phone_clamps_positions() {
        let item = MenuItem {
            id: 4,
            name: "Grilled Shrimp Skewers".to_string(),
            description: String::new(),
            price: Money::from_major(20),
            image: None,
            category: "starters".to_string(),
            position: Position { x: 90, y: 10 },
            size: ItemSize::Medium,
        };

        let phone = Breakpoint::Phone.policy().place(&item);
        assert_eq!((phone.x, phone.y, phone.diameter_px), (80, 20, 80));

        let desktop = Breakpoint::Desktop.policy().place(&item);
        assert_eq!((desktop.x, desktop.y, desktop.diameter_px), (90, 10, 128));
        assert_eq!(Breakpoint::Desktop.policy().nav, NavStyle::SideRail);
        assert_eq!(Breakpoint::Phone.policy().nav, NavStyle::BottomTabs);
    }
}
