use iced::{
    Element, Theme, border,
    widget::{button, column, container, container::Style, row, text},
};
use iced_widget::container::bordered_box;

/// Pages of the application, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Formulario,
    Resultado,
    PreguntasFrecuentes,
}

impl Page {
    fn label(self) -> &'static str {
        match self {
            Page::Formulario => "Formulario",
            Page::Resultado => "Resultado",
            Page::PreguntasFrecuentes => "Preguntas Frecuentes",
        }
    }

    fn style(self, current: Self) -> impl Fn(&Theme) -> Style {
        move |theme: &Theme| {
            // the current page gets a heavier frame
            if self == current {
                bordered_box(theme).border(border::width(3))
            } else {
                bordered_box(theme).border(border::width(1))
            }
        }
    }
}

/// Sidebar + content layout. The result page is only reachable by submitting
/// the form, so its sidebar entry is an indicator rather than a button.
pub fn layout<'a, Message: Clone + 'a>(
    main_content: impl Into<Element<'a, Message>>,
    current: Page,
    on_navigate: impl Fn(Page) -> Message,
) -> Element<'a, Message> {
    container(row![
        container(column![
            container(
                button(text(Page::Formulario.label()))
                    .on_press(on_navigate(Page::Formulario))
            )
            .style(Page::Formulario.style(current))
            .padding(10),
            container(text(Page::Resultado.label()))
                .style(Page::Resultado.style(current))
                .padding(10),
            container(
                button(text(Page::PreguntasFrecuentes.label()))
                    .on_press(on_navigate(Page::PreguntasFrecuentes))
            )
            .style(Page::PreguntasFrecuentes.style(current))
            .padding(10),
        ])
        .height(iced::Length::Fill)
        .width(iced::Length::FillPortion(1)),
        container(main_content.into())
            .width(iced::Length::FillPortion(4))
            .padding(20),
    ])
    .center_x(iced::Length::Fill)
    .center_y(iced::Length::Fill)
    .into()
}
