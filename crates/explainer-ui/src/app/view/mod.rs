pub mod background;
pub mod panel;

use iced::widget::{Space, button, column, container, opaque, stack, text};
use iced::{Background, Border, Element, Length, Padding, Theme};

use crate::app::{App, Message};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let palette = self.palette();

        let main_view: Element<'_, Message> = container(self.view_panel())
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(24)
            .into();

        let mut layers: Vec<Element<'_, Message>> = vec![
            container(Space::new(Length::Fill, Length::Fill))
                .style(move |_| container::Style {
                    background: Some(Background::Color(palette.background.to_iced())),
                    ..Default::default()
                })
                .into(),
        ];

        if self.background_enabled {
            layers.push(self.view_background());
        }
        layers.push(main_view);

        if self.shell.alert.is_some() {
            layers.push(
                opaque(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .style(move |_| container::Style {
                            background: Some(Background::Color(palette.overlay.to_iced())),
                            ..Default::default()
                        }),
                ),
            );
            layers.push(self.view_alert_modal());
        }

        stack(layers).into()
    }

    /// Blocking alert; the only way out is the OK button or Enter/Escape.
    pub fn view_alert_modal(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let message = self
            .shell
            .alert
            .as_ref()
            .map(|a| a.message.as_str())
            .unwrap_or_default();

        let modal_content = column![
            text(message).size(15).color(palette.text_primary.to_iced()),
            Space::with_height(20),
            button(text("OK").size(13).color(iced::Color::WHITE))
                .padding(Padding::from([8, 28]))
                .style(move |_: &Theme, status: button::Status| {
                    let bg = match status {
                        button::Status::Hovered | button::Status::Pressed => palette.accent_hover,
                        _ => palette.accent,
                    };
                    button::Style {
                        background: Some(Background::Color(bg.to_iced())),
                        text_color: iced::Color::WHITE,
                        border: Border {
                            radius: 4.0.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }
                })
                .on_press(Message::DismissAlert),
        ]
        .padding(24)
        .width(Length::Fixed(380.0))
        .align_x(iced::Alignment::Center);

        container(
            container(modal_content).style(move |_| container::Style {
                background: Some(Background::Color(palette.panel.to_iced())),
                border: Border {
                    color: palette.border.to_iced(),
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..Default::default()
            }),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}
