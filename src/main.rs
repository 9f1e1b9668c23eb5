//! Application entry point.
//!
//! The canonical three-step bootstrap: create the application instance from
//! the root component, register the reusable `flip-text` component into the
//! instance's global registry, and mount to the host's `#app` anchor.
//!
//! The two components defined here are integrator-side collaborators; the
//! runtime itself never looks inside them.

use anyhow::Result;

use glint_tui::{create_app, AppError, Component, ComponentDefinition, RenderContext, TerminalHost};

// =============================================================================
// Components
// =============================================================================

/// Root component: a framed banner around the flip-text component.
///
/// References `flip-text` purely by name; the definition is resolved through
/// the registry at render time.
struct Root;

impl Component for Root {
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, AppError> {
        let flipped = cx.render("flip-text")?;
        let width = flipped.chars().count() + 4;
        let rule = "─".repeat(width);
        Ok(format!("┌{rule}┐\n│  {flipped}  │\n└{rule}┘"))
    }
}

/// Text rendered upside down.
struct FlipText {
    text: String,
}

impl FlipText {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Component for FlipText {
    fn render(&self, _cx: &RenderContext<'_>) -> Result<String, AppError> {
        Ok(self.text.chars().rev().map(flip_char).collect())
    }
}

/// Map a character to its upside-down counterpart, where one exists.
fn flip_char(c: char) -> char {
    match c {
        'a' => 'ɐ',
        'b' => 'q',
        'c' => 'ɔ',
        'd' => 'p',
        'e' => 'ǝ',
        'f' => 'ɟ',
        'g' => 'ƃ',
        'h' => 'ɥ',
        'i' => 'ᴉ',
        'j' => 'ɾ',
        'k' => 'ʞ',
        'm' => 'ɯ',
        'n' => 'u',
        'p' => 'd',
        'q' => 'b',
        'r' => 'ɹ',
        't' => 'ʇ',
        'u' => 'n',
        'v' => 'ʌ',
        'w' => 'ʍ',
        'y' => 'ʎ',
        '?' => '¿',
        '!' => '¡',
        '.' => '˙',
        '\'' => ',',
        other => other,
    }
}

// =============================================================================
// Bootstrap
// =============================================================================

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut app = create_app(ComponentDefinition::new(Root))?;

    app.register("flip-text", ComponentDefinition::new(FlipText::new("hello glint")))?;

    let mut host = TerminalHost::new("#app");
    app.mount(&mut host, "#app")?;

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glint_tui::MockHost;

    #[test]
    fn test_flip_text_flips() {
        let def = ComponentDefinition::new(FlipText::new("hi!"));
        let mut app = create_app(def.clone()).unwrap();
        app.register("flip-text", def).unwrap();

        let mut host = MockHost::with_anchors(["#app"]);
        app.mount(&mut host, "#app").unwrap();

        assert_eq!(host.content("#app"), Some("¡ᴉɥ"));
    }

    #[test]
    fn test_root_frames_the_flipped_text() {
        let mut app = create_app(ComponentDefinition::new(Root)).unwrap();
        app.register("flip-text", ComponentDefinition::new(FlipText::new("up")))
            .unwrap();

        let mut host = MockHost::with_anchors(["#app"]);
        app.mount(&mut host, "#app").unwrap();

        let content = host.content("#app").unwrap();
        assert!(content.contains("dn"));
        assert!(content.starts_with('┌'));
        assert!(content.ends_with('┘'));
    }
}
