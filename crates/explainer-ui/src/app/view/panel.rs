use iced::widget::{
    Column, Space, button, column, container, horizontal_space, pick_list, row, scrollable, text,
    text_editor,
};
use iced::{Alignment, Background, Border, Element, Font, Length, Padding, Theme, keyboard};

use explainer_core::Language;

use crate::app::{App, Message};
use crate::highlighter::{EditorHighlighter, HighlightFormat, HighlightSettings};
use crate::style::SPINNER_FRAMES;

impl App {
    /// The main panel: header, picker, editor, button, explanation.
    pub fn view_panel(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let style = self.style;

        let mut items: Vec<Element<'_, Message>> = vec![
            self.view_header(),
            self.view_language_picker(),
            self.view_editor(),
            self.view_explain_button(),
        ];

        if self.shell.shows_explanation() {
            items.push(self.view_explanation());
        }

        let body = Column::with_children(items)
            .spacing(16)
            .padding(style.padding);

        container(scrollable(body))
            .max_width(style.max_width)
            .style(move |_| container::Style {
                background: Some(Background::Color(palette.panel.faded(0.96))),
                border: Border {
                    color: palette.border.to_iced(),
                    width: 1.0,
                    radius: style.radius.into(),
                },
                shadow: iced::Shadow {
                    color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.4),
                    offset: iced::Vector::new(0.0, 8.0),
                    blur_radius: 24.0,
                },
                ..Default::default()
            })
            .into()
    }

    pub fn view_header(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let toggle_label = if self.shell.dark_mode {
            "☀ Light Mode"
        } else {
            "☾ Dark Mode"
        };

        row![
            text("AI-Powered Code Explainer")
                .size(self.style.title_size)
                .color(palette.text_primary.to_iced()),
            horizontal_space(),
            button(text(toggle_label).size(13))
                .padding(Padding::from([6, 12]))
                .style(move |_: &Theme, status: button::Status| {
                    let bg = match status {
                        button::Status::Hovered => palette.border,
                        _ => palette.surface,
                    };
                    button::Style {
                        background: Some(Background::Color(bg.to_iced())),
                        text_color: palette.text_primary.to_iced(),
                        border: Border {
                            radius: 6.0.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }
                })
                .on_press(Message::ToggleTheme),
        ]
        .align_y(Alignment::Center)
        .into()
    }

    pub fn view_language_picker(&self) -> Element<'_, Message> {
        let palette = self.palette();

        row![
            text("Language").size(14).color(palette.text_secondary.to_iced()),
            pick_list(
                Language::ALL,
                Some(self.shell.language),
                Message::LanguageSelected,
            )
            .text_size(14)
            .padding(Padding::from([6, 10])),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    }

    pub fn view_editor(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let highlight_settings = HighlightSettings {
            language: self.shell.language,
        };

        let editor = text_editor(&self.content)
            .placeholder("Paste or type code here...")
            .height(Length::Fixed(self.style.editor_height))
            .padding(12)
            .font(Font::MONOSPACE)
            .size(self.font_size)
            .style(move |_theme: &Theme, _status| text_editor::Style {
                background: Background::Color(palette.editor.to_iced()),
                border: Border {
                    color: palette.border.to_iced(),
                    width: 1.0,
                    radius: 6.0.into(),
                },
                icon: palette.text_muted.to_iced(),
                placeholder: palette.text_muted.to_iced(),
                value: palette.text_primary.to_iced(),
                selection: palette.selection.to_iced(),
            })
            .key_binding(|key_press| {
                let submit = matches!(
                    key_press.key,
                    keyboard::Key::Named(keyboard::key::Named::Enter)
                ) && key_press.modifiers.command();

                if submit {
                    Some(text_editor::Binding::Custom(Message::Explain))
                } else {
                    text_editor::Binding::from_key_press(key_press)
                }
            })
            .highlight_with::<EditorHighlighter>(highlight_settings, HighlightFormat::to_format);

        // Without `on_action` the editor ignores input, so keys reach the alert
        if self.alert_open() {
            editor.into()
        } else {
            editor.on_action(Message::EditorAction).into()
        }
    }

    pub fn view_explain_button(&self) -> Element<'_, Message> {
        let palette = self.palette();

        let label = if self.shell.in_flight {
            text(SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]).size(18)
        } else {
            text("Explain").size(16)
        };

        button(
            container(label.color(iced::Color::WHITE))
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .width(Length::Fill)
        .padding(Padding::from([10, 16]))
        .style(move |_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered | button::Status::Pressed => palette.accent_hover.to_iced(),
                button::Status::Disabled => palette.accent.faded(0.6),
                button::Status::Active => palette.accent.to_iced(),
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: iced::Color::WHITE,
                border: Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .on_press_maybe(
            (self.shell.can_submit() && !self.alert_open()).then_some(Message::Explain),
        )
        .into()
    }

    pub fn view_explanation(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let alpha = self.reveal;
        // Slides up as it fades in
        let offset = ((1.0 - alpha) * 20.0).max(0.0) as u16;

        let card = column![
            text("Explanation:")
                .size(20)
                .color(palette.text_primary.faded(alpha)),
            text(&self.shell.explanation)
                .size(15)
                .color(palette.text_secondary.faded(alpha)),
        ]
        .spacing(8);

        column![
            Space::with_height(offset),
            container(card)
                .width(Length::Fill)
                .padding(16)
                .style(move |_| container::Style {
                    background: Some(Background::Color(palette.surface.faded(alpha))),
                    border: Border {
                        radius: 8.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
        ]
        .into()
    }
}
