use crate::gui::screens::{
    ScreenData, ScreenMessage, faq_page::FaqPageScreen, form_page::FormPageScreen,
    results_page::ResultsPageScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    FormPage(ScreenMessage<FormPageScreen>),
    ResultsPage(ScreenMessage<ResultsPageScreen>),
    FaqPage(ScreenMessage<FaqPageScreen>),
    ChangeScreen(ScreenData),
}
