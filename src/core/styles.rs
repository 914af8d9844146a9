//! Output style roles
//!
//! Each logical role maps to one `colored::Color` (or none). The same roles
//! drive terminal text, prettytable cell specs and clap's help styles.

use clap::builder::styling::AnsiColor;
use colored::{Color, Colorize};

macro_rules! style {
    ( $( $variant:ident => $color:expr ),+ $(,)? ) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        pub enum StyleRole { $( $variant ),+ }

        impl StyleRole {
            pub fn color(self) -> Option<Color> {
                match self { $( StyleRole::$variant => $color ),+ }
            }
        }
    }
}

style! {
    Header  => Some(Color::Yellow),
    Id      => Some(Color::Cyan),
    Name    => Some(Color::BrightGreen),
    Task    => Some(Color::Green),
    Path    => None,
    Dim     => Some(Color::BrightBlack),
    Error   => Some(Color::BrightRed),
}

impl StyleRole {
    /// Colour `text` when `enabled`, otherwise return it unchanged
    pub fn paint(self, text: &str, enabled: bool) -> String {
        match self.color() {
            Some(color) if enabled => text.color(color).to_string(),
            _ => text.to_string(),
        }
    }

    /// Foreground spec for `prettytable::Cell::style_spec`
    pub fn to_prettytable_spec(self) -> Option<&'static str> {
        Some(match self.color()? {
            Color::Red => "Fr",
            Color::Green => "Fg",
            Color::Yellow => "Fy",
            Color::Blue => "Fb",
            Color::Cyan => "Fc",
            Color::BrightBlack => "FK",
            Color::BrightRed => "FR",
            Color::BrightGreen => "FG",
            _ => return None,
        })
    }
}

fn color_to_ansi(c: Color) -> Option<AnsiColor> {
    use AnsiColor as A;
    Some(match c {
        Color::Red => A::Red,
        Color::Green => A::Green,
        Color::Yellow => A::Yellow,
        Color::Blue => A::Blue,
        Color::Cyan => A::Cyan,
        Color::BrightBlack => A::BrightBlack,
        Color::BrightRed => A::BrightRed,
        Color::BrightGreen => A::BrightGreen,
        _ => return None,
    })
}

/// clap help styles built from the same roles
pub fn palette_to_clap(enabled: bool) -> clap::builder::Styles {
    use clap::builder::styling::{Color as ClapColor, Style};
    if !enabled {
        return clap::builder::Styles::plain();
    }

    let style = |role: StyleRole, bold: bool| {
        let mut s = Style::new();
        if let Some(col) = role.color().and_then(color_to_ansi) {
            s = s.fg_color(Some(ClapColor::Ansi(col)));
        }
        if bold {
            s = s.bold();
        }
        s
    };

    clap::builder::Styles::styled()
        .header(style(StyleRole::Header, true))
        .usage(style(StyleRole::Header, true))
        .literal(style(StyleRole::Name, false))
        .placeholder(style(StyleRole::Task, false))
        .error(style(StyleRole::Error, true))
}
