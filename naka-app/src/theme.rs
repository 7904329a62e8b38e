use iced::{
    theme,
    widget::{button, container},
    Background, Border, Color, Shadow, Theme,
};

/// Black theme with the chain's red accent.
#[derive(Debug, Clone, Copy)]
pub struct NakaTheme;

impl NakaTheme {
    // Core colors
    pub const BLACK: Color = Color::from_rgb(0.0, 0.0, 0.0); // #000000
    pub const PRIMARY: Color = Color::from_rgb(0.863, 0.149, 0.149); // #DC2626 red-600
    pub const PRIMARY_HOVER: Color = Color::from_rgb(0.725, 0.110, 0.110); // #B91C1C red-700
    pub const AMBER: Color = Color::from_rgb(0.573, 0.251, 0.055); // #92400E amber-800
    pub const AMBER_HOVER: Color = Color::from_rgb(0.471, 0.208, 0.059); // #78350F amber-900

    // Grays
    pub const CARD_BG: Color = Color::from_rgb(0.122, 0.161, 0.216); // #1F2937 gray-800
    pub const CARD_HOVER: Color = Color::from_rgb(0.216, 0.255, 0.318); // #374151 gray-700
    pub const BORDER_COLOR: Color = Color::from_rgb(0.216, 0.255, 0.318); // #374151

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0); // #FFFFFF
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.612, 0.639, 0.686); // #9CA3AF gray-400
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.420, 0.447, 0.502); // #6B7280 gray-500

    // Card surfaces on the carte
    pub const CARD_LIGHT: Color = Color::from_rgb(1.0, 1.0, 1.0); // #FFFFFF
    pub const CARD_LIGHT_TEXT: Color = Color::from_rgb(0.0, 0.0, 0.0); // #000000

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BLACK;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::PRIMARY;
        Theme::custom("PetitNaka".to_string(), palette)
    }
}

// Container styles using closures
pub enum Container {
    Card,
    Selected,
    Modal,
    ModalOverlay,
    Pill,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Card => |_| container::Style {
                text_color: Some(NakaTheme::TEXT_PRIMARY),
                background: Some(Background::Color(NakaTheme::CARD_BG)),
                border: Border {
                    color: NakaTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Selected => |_| container::Style {
                text_color: Some(NakaTheme::TEXT_PRIMARY),
                background: Some(Background::Color(NakaTheme::CARD_BG)),
                border: Border {
                    color: NakaTheme::PRIMARY,
                    width: 2.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Modal => |_| container::Style {
                text_color: Some(NakaTheme::TEXT_PRIMARY),
                background: Some(Background::Color(NakaTheme::CARD_BG)),
                border: Border {
                    color: NakaTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::ModalOverlay => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(Color {
                    a: 0.8,
                    ..NakaTheme::BLACK
                })),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::Pill => |_| container::Style {
                text_color: Some(NakaTheme::TEXT_PRIMARY),
                background: Some(Background::Color(NakaTheme::AMBER)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 24.0.into(),
                },
                shadow: Shadow::default(),
            },
        }
    }
}

// Button styles using closures
pub enum Button {
    Primary,
    Ghost,
    Tab { active: bool },
}

impl Button {
    pub fn style(&self) -> impl Fn(&Theme, button::Status) -> button::Style {
        let variant = match self {
            Button::Primary => 0u8,
            Button::Ghost => 1,
            Button::Tab { active: true } => 2,
            Button::Tab { active: false } => 3,
        };
        move |_theme: &Theme, status: button::Status| {
            let hovered = matches!(status, button::Status::Hovered);
            match variant {
                0 => button::Style {
                    background: Some(Background::Color(if hovered {
                        NakaTheme::PRIMARY_HOVER
                    } else {
                        NakaTheme::PRIMARY
                    })),
                    text_color: NakaTheme::TEXT_PRIMARY,
                    border: Border {
                        radius: 6.0.into(),
                        ..Border::default()
                    },
                    ..button::Style::default()
                },
                1 => button::Style {
                    background: hovered.then_some(Background::Color(NakaTheme::CARD_HOVER)),
                    text_color: if hovered {
                        NakaTheme::TEXT_PRIMARY
                    } else {
                        NakaTheme::TEXT_SECONDARY
                    },
                    border: Border {
                        radius: 6.0.into(),
                        ..Border::default()
                    },
                    ..button::Style::default()
                },
                2 => button::Style {
                    background: Some(Background::Color(NakaTheme::PRIMARY)),
                    text_color: NakaTheme::TEXT_PRIMARY,
                    border: Border {
                        radius: 999.0.into(),
                        ..Border::default()
                    },
                    ..button::Style::default()
                },
                _ => button::Style {
                    background: Some(Background::Color(if hovered {
                        NakaTheme::CARD_HOVER
                    } else {
                        NakaTheme::CARD_BG
                    })),
                    text_color: NakaTheme::TEXT_SECONDARY,
                    border: Border {
                        radius: 999.0.into(),
                        ..Border::default()
                    },
                    ..button::Style::default()
                },
            }
        }
    }
}
