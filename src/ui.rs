use crate::app::{App, ErrorDialog, Message};
use crate::base::Base;
use crate::style;
use iced::{
    alignment::Horizontal,
    widget::{
        button, center, column, container, mouse_area, opaque, pick_list, stack, text, text_input,
    },
    Element, Length,
};

pub fn view(app: &App) -> Element<'_, Message> {
    let title = text("Number Converter")
        .size(32)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let input = text_input("Enter number", &app.input)
        .on_input(Message::InputChanged)
        .size(24)
        .padding(10);

    let selector = pick_list(Base::ALL, Some(app.base), Message::BaseSelected)
        .text_size(20)
        .padding(10)
        .width(Length::Fill);

    let convert = button(
        text("Convert")
            .size(24)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::Convert)
    .padding(10)
    .width(Length::Fill)
    .style(style::convert_button);

    let output = text(app.output.as_str())
        .size(24)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let content = container(
        column![title, input, selector, convert, output]
            .spacing(10)
            .padding(20),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(style::window);

    match &app.dialog {
        Some(dialog) => modal(content, error_dialog(dialog), Message::CloseDialog),
        None => content.into(),
    }
}

fn error_dialog(dialog: &ErrorDialog) -> Element<'_, Message> {
    container(
        column![
            text(dialog.title.as_str()).size(22),
            text(dialog.message.as_str()).size(18),
            button(text("Close").width(Length::Fill).align_x(Horizontal::Center))
                .on_press(Message::CloseDialog)
                .width(Length::Fill),
        ]
        .spacing(15),
    )
    .width(Length::Fixed(340.0))
    .padding(20)
    .style(container::rounded_box)
    .into()
}

// Overlay that swallows input to `base`; a click outside `content` sends `on_blur`.
fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(mouse_area(center(opaque(content)).style(style::backdrop)).on_press(on_blur))
    ]
    .into()
}
