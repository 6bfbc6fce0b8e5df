// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a single scrollable column (pricing, contact form, newsletter)
//! with the toast overlay stacked on top.

use super::Message;
use crate::forms::{ContactForm, Field, FieldState, NewsletterForm};
use crate::notifications::Manager;
use crate::site::{PricingPlan, PLANS};
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use crate::ui::theming::{AppTheme, ColorScheme};
use crate::ui::toast::Toast;
use iced::widget::{
    button, container, scrollable, text, text_input, Column, Container, Row, Stack, Text,
};
use iced::{alignment, Color, Element, Font, Length, Theme};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub theme: &'a AppTheme,
    pub notifications: &'a Manager,
    pub contact: &'a ContactForm,
    pub newsletter: &'a NewsletterForm,
    pub now: Instant,
}

/// Renders the page and the notification overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = &ctx.theme.colors;

    let page = Column::new()
        .spacing(spacing::XXL)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(view_header(colors, ctx.notifications))
        .push(view_pricing(colors))
        .push(view_contact(colors, ctx.contact))
        .push(view_newsletter(colors, ctx.newsletter));

    let page = Container::new(scrollable(
        Container::new(page).width(Length::Fill).center_x(Length::Fill),
    ))
    .width(Length::Fill)
    .height(Length::Fill);

    let overlay = Toast::view_overlay(ctx.notifications, ctx.now).map(Message::Notification);

    Stack::new()
        .push(page)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn heading<'a>(label: &'a str, size: f32) -> Text<'a> {
    Text::new(label).size(size).font(Font {
        weight: iced::font::Weight::Bold,
        ..Font::DEFAULT
    })
}

fn view_header<'a>(colors: &ColorScheme, notifications: &Manager) -> Element<'a, Message> {
    let subtitle_color = colors.text_secondary;

    let mut dismiss_all = button(Text::new("Dismiss all").size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(button::secondary);
    if !notifications.is_empty() {
        dismiss_all = dismiss_all.on_press(Message::ClearNotifications);
    }

    Row::new()
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .push(
            Column::new()
                .width(Length::Fill)
                .spacing(spacing::XXS)
                .push(heading("CodeCelix", typography::TITLE_LG))
                .push(
                    Text::new("AI automation for growing teams")
                        .size(typography::BODY)
                        .color(subtitle_color),
                ),
        )
        .push(dismiss_all)
        .into()
}

fn view_pricing<'a>(colors: &ColorScheme) -> Element<'a, Message> {
    let cards = PLANS.iter().map(|plan| view_plan_card(colors, plan));

    Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(heading("Pricing", typography::TITLE_MD))
        .push(
            Row::with_children(cards)
                .spacing(spacing::LG)
                .align_y(alignment::Vertical::Top),
        )
        .into()
}

fn view_plan_card<'a>(colors: &ColorScheme, plan: &'static PricingPlan) -> Element<'a, Message> {
    let muted = colors.text_secondary;
    let ring = if plan.popular {
        colors.brand_primary
    } else {
        colors.surface_tertiary
    };
    let surface = colors.surface_secondary;

    let mut card = Column::new().spacing(spacing::SM);
    if plan.popular {
        card = card.push(
            Text::new("Most Popular")
                .size(typography::CAPTION)
                .color(colors.brand_primary),
        );
    }

    card = card
        .push(heading(plan.name, typography::TITLE_SM))
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .align_y(alignment::Vertical::Bottom)
                .push(heading(plan.price, typography::TITLE_MD))
                .push(Text::new(plan.period).size(typography::BODY).color(muted)),
        )
        .push(Text::new(plan.description).size(typography::BODY).color(muted));

    let features = plan.features.iter().map(|feature| {
        Text::new(format!("✓ {feature}"))
            .size(typography::BODY)
            .into()
    });
    card = card.push(Column::with_children(features).spacing(spacing::XXS));

    let cta = button(
        Container::new(Text::new(plan.call_to_action()))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .on_press(Message::SelectPlan(plan.id))
    .style(if plan.popular {
        button::primary
    } else {
        button::secondary
    });
    card = card.push(cta);

    Container::new(card)
        .width(Length::Fixed(sizing::PLAN_CARD_WIDTH))
        .padding(spacing::LG)
        .style(move |_theme: &Theme| card_style(surface, ring, plan.popular))
        .into()
}

fn card_style(surface: Color, ring: Color, emphasized: bool) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(surface)),
        border: iced::Border {
            color: ring,
            width: if emphasized {
                border::WIDTH_MD
            } else {
                border::WIDTH_SM
            },
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Border color for an input in the given validation state.
fn field_border(colors: &ColorScheme, state: FieldState) -> Option<Color> {
    match state {
        FieldState::Default => None,
        FieldState::Error => Some(colors.error),
        FieldState::Success => Some(colors.success),
    }
}

fn validated_input<'a>(
    colors: &ColorScheme,
    field: Field,
    value: &str,
    state: FieldState,
    error: Option<&'a str>,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let border_color = field_border(colors, state);
    let input = text_input(field.placeholder(), value)
        .on_input(on_input)
        .on_submit(on_submit)
        .padding(spacing::XS)
        .size(typography::BODY)
        .style(move |theme: &Theme, status| {
            let mut style = text_input::default(theme, status);
            if let Some(color) = border_color {
                style.border.color = color;
            }
            style
        });

    let mut column = Column::new().spacing(spacing::XXS).push(input);
    if let Some(message) = error {
        column = column.push(
            Text::new(message)
                .size(typography::CAPTION)
                .color(colors.error),
        );
    }
    column.into()
}

fn view_contact<'a>(colors: &ColorScheme, form: &'a ContactForm) -> Element<'a, Message> {
    let mut fields = Column::new().spacing(spacing::SM);
    for field in [Field::Name, Field::Email, Field::Company, Field::Message] {
        fields = fields.push(validated_input(
            colors,
            field,
            form.value(field),
            form.field_state(field),
            form.error(field),
            move |value| Message::ContactInput(field, value),
            Message::SubmitContact,
        ));
    }

    let label = if form.is_submitting() {
        "Sending..."
    } else {
        "Request Demo"
    };
    let mut submit = button(Text::new(label))
        .padding([spacing::XS, spacing::LG])
        .style(button::primary);
    if !form.is_submitting() {
        submit = submit.on_press(Message::SubmitContact);
    }

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(heading("Get in Touch", typography::TITLE_MD))
            .push(fields)
            .push(submit),
    )
    .width(Length::Fixed(sizing::FORM_WIDTH))
    .into()
}

fn view_newsletter<'a>(colors: &ColorScheme, form: &'a NewsletterForm) -> Element<'a, Message> {
    let state = if form.error().is_some() {
        FieldState::Error
    } else {
        FieldState::Default
    };

    let input = validated_input(
        colors,
        Field::Email,
        form.email(),
        state,
        form.error(),
        Message::NewsletterInput,
        Message::SubmitNewsletter,
    );

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(heading("Stay Updated", typography::TITLE_SM))
            .push(
                text("Get the latest AI automation insights delivered to your inbox.")
                    .size(typography::BODY)
                    .color(colors.text_secondary),
            )
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(alignment::Vertical::Top)
                    .push(Container::new(input).width(Length::Fill))
                    .push(
                        button(Text::new("Subscribe"))
                            .padding(spacing::XS)
                            .on_press(Message::SubmitNewsletter)
                            .style(button::primary),
                    ),
            ),
    )
    .width(Length::Fixed(sizing::FORM_WIDTH))
    .into()
}
