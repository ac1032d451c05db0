//! FAQ accordion state.
//!
//! The accordion owns an explicit question/answer list and enforces that at
//! most one item is open at a time: toggling a collapsed item opens only it
//! and closes every other item, toggling the open item closes everything.

/// A question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Accordion over a fixed list of items. All items start collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqAccordion {
    items: Vec<FaqItem>,
    expanded: Option<usize>,
}

impl FaqAccordion {
    pub fn new(items: Vec<FaqItem>) -> Self {
        Self {
            items,
            expanded: None,
        }
    }

    /// Flip item `index`. Opening an item closes all others; toggling the
    /// open item leaves everything collapsed. Out-of-range is a no-op.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        if self.expanded == Some(index) {
            self.expanded = None;
        } else {
            self.expanded = Some(index);
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded = None;
    }

    /// Index of the single open item, if any.
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn items(&self) -> &[FaqItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Built-in FAQ entries shown by the CLI and the GUI.
pub fn default_faq() -> Vec<FaqItem> {
    vec![
        FaqItem::new(
            "¿Cómo se genera mi recomendación?",
            "El sistema calcula tu IMC a partir de tu peso y altura, determina tu \
             nivel, objetivo e intensidad recomendados mediante reglas, y puntúa \
             cada rutina del catálogo según su compatibilidad con tu perfil.",
        ),
        FaqItem::new(
            "¿Qué datos necesito introducir?",
            "Edad (15 a 100 años), peso (30 a 300 kg), altura (1.0 a 2.5 metros), \
             días disponibles por semana (1 a 7) y tu objetivo de entrenamiento.",
        ),
        FaqItem::new(
            "¿Puedo elegir una rutina distinta a la recomendada?",
            "Sí. Junto a la rutina principal se muestran hasta tres alternativas \
             ordenadas por compatibilidad con tu perfil.",
        ),
        FaqItem::new(
            "¿Las rutinas son seguras para mi condición?",
            "Cada rutina pasa un filtro de seguridad según tu edad, IMC y nivel. \
             Las precauciones detectadas se muestran junto al resultado. Ante \
             cualquier condición médica, consulta primero con un profesional.",
        ),
        FaqItem::new(
            "¿Cómo se estiman las calorías?",
            "A partir de la duración de la rutina, su intensidad y tu peso \
             corporal, usando factores de gasto energético por minuto.",
        ),
    ]
}
