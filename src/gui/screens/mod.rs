pub mod faq_page;
pub mod form_page;
pub mod results_page;

use iced::{Element, Task};

use crate::gui::{AppState, Message};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    FormPage(form_page::FormPageScreen),
    ResultsPage(results_page::ResultsPageScreen),
    FaqPage(faq_page::FaqPageScreen),
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::FormPage(screen) => screen.view().map(Message::FormPage),
            ScreenData::ResultsPage(screen) => screen.view().map(Message::ResultsPage),
            ScreenData::FaqPage(screen) => screen.view().map(Message::FaqPage),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::ChangeScreen(screen)) => {
                *x = screen;
                Task::none()
            }
            (ScreenData::FormPage(page), Message::FormPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::FormPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    form_page::ParentMessage::Submitted(input) => {
                        // The catalog is in memory, so the recommendation is
                        // computed right here and the result screen shown.
                        let outcome = state
                            .engine
                            .recommend(&input, state.catalog.clone())
                            .map_err(|e| e.to_string());
                        Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                            ScreenData::ResultsPage(results_page::ResultsPageScreen::new(outcome)),
                        )))
                    }
                },
            },
            (ScreenData::ResultsPage(page), Message::ResultsPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::ResultsPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    results_page::ParentMessage::NewQuery => {
                        Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                            ScreenData::FormPage(form_page::FormPageScreen::default()),
                        )))
                    }
                },
            },
            (ScreenData::FaqPage(page), Message::FaqPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::FaqPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {},
            },
            _ => Task::none(),
        }
    }
}
