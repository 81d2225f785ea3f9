use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

pub const BACKGROUND: Color = Color {
    r: 0.0,
    g: 0.68,
    b: 0.93,
    a: 1.0,
};

pub const ACCENT: Color = Color {
    r: 0.6,
    g: 0.3,
    b: 0.9,
    a: 1.0,
};

const BACKDROP: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.7,
};

pub fn window(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

pub fn convert_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => shade(ACCENT, 1.1),
        button::Status::Pressed => shade(ACCENT, 0.85),
        button::Status::Active | button::Status::Disabled => ACCENT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 20.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Dimmed layer behind the error dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKDROP)),
        ..container::Style::default()
    }
}

fn shade(color: Color, factor: f32) -> Color {
    Color {
        r: (color.r * factor).min(1.0),
        g: (color.g * factor).min(1.0),
        b: (color.b * factor).min(1.0),
        a: color.a,
    }
}
