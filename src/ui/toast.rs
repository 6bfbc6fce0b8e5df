// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a kind-colored accent, an optional close
//! button and an optional countdown bar. The overlay groups them by screen
//! anchor and keeps insertion order inside each group.

use crate::notifications::{Manager, Notification, NotificationMessage, Position};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Font, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification, now: Instant) -> Element<'_, NotificationMessage> {
        let kind = notification.kind();
        let accent_color = kind.color();

        let icon_widget = Text::new(kind.glyph())
            .size(sizing::ICON_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let mut lines = Column::new().spacing(spacing::XXS);
        if let Some(title) = notification.title() {
            lines = lines.push(
                Text::new(title)
                    .size(typography::BODY)
                    .font(Font {
                        weight: iced::font::Weight::Bold,
                        ..Font::DEFAULT
                    })
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().text),
                    }),
            );
        }
        if let Some(message) = notification.message() {
            lines = lines.push(Text::new(message).size(typography::CAPTION).style(
                |theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                },
            ));
        }

        // Layout: [icon] [title/message] [dismiss?]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(lines)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if notification.allow_manual_close() {
            content = content.push(
                button(Text::new("×").size(sizing::ICON_SM))
                    .on_press(NotificationMessage::Dismiss(notification.id()))
                    .padding(spacing::XXS)
                    .style(dismiss_button_style),
            );
        }

        let mut body = Column::new().spacing(spacing::XS).push(content);
        if let Some(fraction) = notification.remaining_fraction(now) {
            body = body.push(countdown_bar(fraction, accent_color));
        }

        Container::new(body)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders every active notification, one column per screen anchor.
    pub fn view_overlay(manager: &Manager, now: Instant) -> Element<'_, NotificationMessage> {
        let layers: Vec<Element<'_, NotificationMessage>> = group_by_position(manager)
            .into_iter()
            .map(|(position, notifications)| {
                let toasts = notifications
                    .into_iter()
                    .map(|notification| Self::view(notification, now));
                let (align_x, align_y) = anchor(position);

                Container::new(
                    Column::with_children(toasts)
                        .spacing(spacing::XS)
                        .align_x(align_x),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(align_x)
                .align_y(align_y)
                .padding(spacing::MD)
                .into()
            })
            .collect();

        if layers.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            Stack::with_children(layers)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
    }
}

/// Active notifications grouped by anchor, in insertion order within each
/// group. Anchors without notifications are skipped.
pub fn group_by_position(manager: &Manager) -> Vec<(Position, Vec<&Notification>)> {
    Position::ALL
        .iter()
        .filter_map(|&position| {
            let group: Vec<&Notification> = manager
                .active()
                .filter(|n| n.position() == position)
                .collect();
            (!group.is_empty()).then_some((position, group))
        })
        .collect()
}

/// Screen alignment of an anchor.
#[must_use]
pub fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let vertical = if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
    };
    (horizontal, vertical)
}

/// Width in pixels of the filled part of the countdown bar.
fn countdown_fill_width(fraction: f32) -> f32 {
    let track = sizing::TOAST_WIDTH - 2.0 * spacing::SM;
    track * fraction.clamp(0.0, 1.0)
}

fn countdown_bar<'a>(fraction: f32, accent_color: Color) -> Element<'a, NotificationMessage> {
    let fill = Container::new(Column::new())
        .width(Length::Fixed(countdown_fill_width(fraction)))
        .height(Length::Fixed(sizing::COUNTDOWN_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(accent_color)),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Container::new(fill)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::COUNTDOWN_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..accent_color
            })),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_fill = |alpha: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => hover_fill(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover_fill(opacity::OVERLAY_MEDIUM),
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
