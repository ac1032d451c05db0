use iced::{Element, Task, Theme};

use crate::gui::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage, faq_page::FaqPageScreen, form_page::FormPageScreen},
    widgets::{Page, layout},
};

pub struct RutaniaApp {
    screen: ScreenData,
    state: AppState,
}

impl RutaniaApp {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                screen: ScreenData::FormPage(FormPageScreen::default()),
                state: AppState::default(),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        "Rutania - Recomendación de Rutinas Deportivas".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(|message| match message {
                ScreenMessage::ScreenMessage(message) => message,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = self.screen.view().map(|message| match message {
            ScreenMessage::ScreenMessage(message) => message,
            ScreenMessage::ParentMessage(never) => match never {},
        });
        layout(content, self.page(), navigate)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn page(&self) -> Page {
        match &self.screen {
            ScreenData::FormPage(_) => Page::Formulario,
            ScreenData::ResultsPage(_) => Page::Resultado,
            ScreenData::FaqPage(_) => Page::PreguntasFrecuentes,
        }
    }
}

fn navigate(page: Page) -> Message {
    match page {
        Page::Formulario | Page::Resultado => {
            Message::ChangeScreen(ScreenData::FormPage(FormPageScreen::default()))
        }
        Page::PreguntasFrecuentes => {
            Message::ChangeScreen(ScreenData::FaqPage(FaqPageScreen::new()))
        }
    }
}

pub fn run() -> iced::Result {
    iced::application(RutaniaApp::new, RutaniaApp::update, RutaniaApp::view)
        .title(RutaniaApp::title)
        .theme(RutaniaApp::theme)
        .run()
}
