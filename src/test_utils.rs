#[cfg(test)]
pub mod test_helpers {
    use std::sync::OnceLock;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    use crate::app::App;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use crate::glossary::{Glossary, TermEntry, TermKey};

    /// Two products, two terms, no patterns or tips
    pub const MINIMAL_CATALOG: &str = r#"{
        "title": "Test Guide",
        "intro": "Learn about Webhooks and Idempotency.",
        "glossary": [
            {
                "key": "Webhooks",
                "title": "Webhooks",
                "definition": "HTTP callbacks that notify your application when events happen.",
                "context": "Used to learn about asynchronous payment outcomes.",
                "importance": "Polling is slow and misses events."
            },
            {
                "key": "Idempotency",
                "title": "Idempotency",
                "definition": "Repeating a request has the same effect as sending it once.",
                "context": "Send an idempotency key with every create request.",
                "importance": "Network retries must never charge a customer twice."
            }
        ],
        "products": [
            {
                "key": "payments",
                "title": "Payments",
                "description": "Accept payments online.",
                "overview": {
                    "content": "Payments supports cards and wallets. Retries rely on Idempotency.",
                    "key_features": ["Global cards", "Webhooks for every event"]
                },
                "apis": [
                    {
                        "key": "intents",
                        "title": "Payment Intents API",
                        "description": "Tracks a payment from creation to completion.",
                        "endpoint": "POST /v1/payment_intents",
                        "example": "create({ amount: 2000 })",
                        "best_practices": ["Use Idempotency keys"]
                    }
                ],
                "integration": {
                    "steps": [
                        {"title": "Set up Webhooks", "details": "Listen for payment events."}
                    ]
                }
            },
            {
                "key": "billing",
                "title": "Billing",
                "description": "Recurring revenue.",
                "overview": {"content": "Subscriptions and invoices."}
            }
        ]
    }"#;

    pub fn term_entry(key: &str) -> TermEntry {
        TermEntry {
            key: TermKey::new(key),
            title: format!("{} title", key),
            definition: format!("{} definition", key),
            context: format!("{} context", key),
            importance: format!("{} importance", key),
        }
    }

    pub fn glossary_of(keys: &[&str]) -> Glossary {
        Glossary::new(keys.iter().map(|key| term_entry(key)).collect()).unwrap()
    }

    /// Built-in catalog, parsed once per test binary
    pub fn test_catalog() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::builtin().unwrap())
    }

    pub fn minimal_catalog() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::from_json(MINIMAL_CATALOG).unwrap())
    }

    pub fn test_app() -> App<'static> {
        App::new(test_catalog(), &Config::default())
    }

    pub fn minimal_app() -> App<'static> {
        App::new(minimal_catalog(), &Config::default())
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn left_click(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    /// Render `app` into a `width` x `height` test terminal
    pub fn render_app(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
    }

    /// Text of every row of the last rendered frame
    pub fn screen_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        screen_rows(&render_app(app, width, height)).join("\n")
    }

    /// Screen cell of the first fragment of `term` in the content pane, if
    /// visible after the last render
    pub fn term_cell(app: &App, term: &str) -> Option<(u16, u16)> {
        let content = app.layout_regions.content?;
        let offset = app.scroll.offset as usize;
        app.document()
            .hits
            .iter()
            .filter(|hit| hit.key.as_str() == term)
            .find(|hit| hit.row >= offset && hit.row < offset + content.height as usize)
            .map(|hit| {
                (
                    content.x + hit.col,
                    content.y + (hit.row - offset) as u16,
                )
            })
    }
}
