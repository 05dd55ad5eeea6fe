use std::borrow::Cow;

use iced::{
    Alignment::Center,
    Element,
    Length::Fill,
    Theme, border,
    widget::{Row, button, column, container, row, scrollable, space, text},
};
use roster_lib::{ProfileCard, ProfileId, Session, age};

use crate::{config::Cfg, icons::icon};

const CARD_WIDTH: f32 = 320.0;
const AVATAR_SIZE: f32 = 80.0;

#[derive(Debug, Clone)]
pub enum Message {
    ViewProfilePressed(ProfileId),
}

/// Grid of read-only profile cards.
pub struct ProfileGallery {
    cfg: Cfg,
}

impl ProfileGallery {
    pub fn new(cfg: Cfg) -> Self {
        Self { cfg }
    }

    pub fn view(&self, session: &Session) -> Element<'_, Message> {
        let description_chars = self.cfg.read().description_chars;

        // Ages are derived from the current date on every render
        let cards = session
            .cards(age::today())
            .into_iter()
            .map(|card| profile_card(card, description_chars));

        scrollable(
            container(Row::with_children(cards).spacing(24).wrap())
                .width(Fill)
                .padding(32),
        )
        .height(Fill)
        .into()
    }
}

fn profile_card<'a>(card: ProfileCard, description_chars: usize) -> Element<'a, Message> {
    let age = match card.age {
        Some(age) => format!("{age} years"),
        None => "Unknown age".to_string(),
    };
    let description = clamp_description(&card.description, description_chars).into_owned();

    let banner = container(avatar(card.initials()))
        .width(Fill)
        .padding(24)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().primary.base.color.into()),
            border: border::rounded(12),
            ..container::Style::default()
        });

    let body = column![
        column![
            text(card.name).size(20),
            text(card.career).style(text::primary),
        ]
        .spacing(2),
        text(description).size(14),
        column![
            detail("user", card.gender),
            detail("calendar", age),
            detail("heart", card.marital_status),
        ]
        .spacing(8),
        button(
            row![
                text("View Profile").size(14),
                space::horizontal(),
                icon("chevron_right")
            ]
            .align_y(Center)
        )
        .width(Fill)
        .style(button::secondary)
        .on_press(Message::ViewProfilePressed(card.id)),
    ]
    .spacing(16)
    .padding(24);

    container(column![banner, body])
        .width(CARD_WIDTH)
        .style(container::rounded_box)
        .into()
}

fn avatar<'a>(initials: String) -> Element<'a, Message> {
    container(text(initials).size(28))
        .center(AVATAR_SIZE)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.palette().background.into()),
            text_color: Some(theme.palette().text),
            border: border::rounded(AVATAR_SIZE / 2.0)
                .width(4.0)
                .color(theme.palette().background),
            ..container::Style::default()
        })
        .into()
}

fn detail<'a>(icon_name: &str, value: String) -> Element<'a, Message> {
    row![icon(icon_name), text(value).size(14)]
        .spacing(8)
        .align_y(Center)
        .into()
}

/// Shorten `description` to at most `max_chars` characters, ending in an
/// ellipsis when anything was cut. Purely cosmetic.
pub fn clamp_description(description: &str, max_chars: usize) -> Cow<'_, str> {
    match description.char_indices().nth(max_chars) {
        None => Cow::Borrowed(description),
        Some((cut, _)) => {
            let kept = description.get(..cut).unwrap_or(description).trim_end();
            Cow::Owned(format!("{kept}…"))
        }
    }
}

#[cfg(test)]
mod test {
    use std::borrow::Cow;

    use super::clamp_description;

    #[test]
    fn test_short_description_untouched() {
        assert!(matches!(
            clamp_description("Loves Rust.", 20),
            Cow::Borrowed("Loves Rust.")
        ));
        assert_eq!(clamp_description("exactly", 7), "exactly");
    }

    #[test]
    fn test_long_description_clamped() {
        assert_eq!(
            clamp_description("Software architect with a passion", 18),
            "Software architect…"
        );
        assert_eq!(clamp_description("abc def", 4), "abc…");
    }

    #[test]
    fn test_clamp_respects_char_boundaries() {
        assert_eq!(clamp_description("héllo wörld", 7), "héllo w…");
        assert_eq!(clamp_description("日本語テキスト", 3), "日本語…");
    }
}
