use iced::{
    Element, Length, Task,
    widget::{button, column, container, scrollable, text},
};
use iced_widget::container::bordered_box;

use crate::faq::{FaqAccordion, default_faq};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

/// FAQ accordion: clicking a question opens its answer and closes any other
/// open one; clicking the open question closes it.
#[derive(Debug, Clone)]
pub struct FaqPageScreen {
    accordion: FaqAccordion,
}

impl FaqPageScreen {
    pub fn new() -> Self {
        Self {
            accordion: FaqAccordion::new(default_faq()),
        }
    }
}

impl Default for FaqPageScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub enum FaqPageMessage {
    ToggleQuestion(usize),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {}

impl Screen for FaqPageScreen {
    type Message = FaqPageMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut list = column![text("Preguntas Frecuentes").size(32)]
            .spacing(10)
            .padding(20);

        for (index, item) in self.accordion.items().iter().enumerate() {
            list = list.push(
                button(text(item.question.as_str()))
                    .width(Length::Fill)
                    .on_press(ScreenMessage::ScreenMessage(FaqPageMessage::ToggleQuestion(
                        index,
                    ))),
            );
            if self.accordion.is_expanded(index) {
                list = list.push(
                    container(text(item.answer.as_str()))
                        .style(bordered_box)
                        .padding(10)
                        .width(Length::Fill),
                );
            }
        }

        scrollable(list).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            FaqPageMessage::ToggleQuestion(index) => {
                self.accordion.toggle(index);
                Task::none()
            }
        }
    }
}
