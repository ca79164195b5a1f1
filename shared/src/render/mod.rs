//! Static export: every block rendered to plain markup plus an optional self-contained
//! ES5 script. The numbers a script needs are computed by the planning code in Rust and
//! printed into it, so the exported page behaves like the interactive one.

pub mod countdown_export;
pub mod hero_export;
pub mod slot_export;
pub mod wheel_export;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::blocks::BlockConfig;

pub use countdown_export::render_countdown;
pub use hero_export::render_hero;
pub use slot_export::render_slot;
pub use wheel_export::render_wheel;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StaticRender {
    pub markup: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

impl StaticRender {
    pub fn markup_only(markup: String) -> Self {
        Self { markup, script: None }
    }

    /// Markup followed by the script wrapped in its own scope, ready to drop into a page.
    pub fn to_html(&self) -> String {
        match &self.script {
            Some(script) => format!("{}\n<script>\n(function () {{\n{}\n}})();\n</script>", self.markup, script),
            None => self.markup.clone(),
        }
    }
}

pub fn render_static(config: &BlockConfig, block_id: &str) -> StaticRender {
    let dom_id = dom_id(block_id);
    match config {
        BlockConfig::SlotMachine(slot) => render_slot(slot, &dom_id),
        BlockConfig::WheelOfFortune(wheel) => render_wheel(wheel, &dom_id),
        BlockConfig::Countdown(countdown) => render_countdown(countdown, &dom_id),
        BlockConfig::Hero(hero) => render_hero(hero, &dom_id),
    }
}

/// Element id for a block: `lb-` followed by the block id with anything outside
/// `[A-Za-z0-9_-]` replaced.
pub fn dom_id(block_id: &str) -> String {
    let cleaned: String = block_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect();
    format!("lb-{}", cleaned)
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON text safe to place inside a `<script>` element of an HTML or PHP page.
/// `<`, `>` and `&` are written as unicode escapes, which JSON and ES5 both read back
/// as the same characters.
pub fn script_json(value: &Value) -> String {
    value
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

pub fn script_string(text: &str) -> String {
    script_json(&Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{BlockKind, CountdownConfig, HeroConfig, SlotMachineConfig, WheelConfig};
    use strum::IntoEnumIterator;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b>"Tom" & 'Jerry'</b>"#), "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_script_strings_cannot_close_the_script_tag() {
        let encoded = script_string("</script><script>alert(1)</script>");
        assert!(!encoded.contains("</script>"));
        assert!(encoded.starts_with('"'));
    }

    #[test]
    fn test_script_strings_hide_markup_and_php_tags() {
        let encoded = script_string("<!--<script> <?php echo 1; ?> & more");
        assert!(!encoded.contains('<'));
        assert!(!encoded.contains('>'));
        let decoded: String = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, "<!--<script> <?php echo 1; ?> & more");
    }

    #[test]
    fn test_dom_id_is_sanitised() {
        assert_eq!(dom_id("block 1\"x"), "lb-block-1-x");
    }

    #[test]
    fn test_every_block_kind_renders() {
        for kind in BlockKind::iter() {
            let config = match kind {
                BlockKind::SlotMachine => BlockConfig::SlotMachine(SlotMachineConfig::default()),
                BlockKind::WheelOfFortune => BlockConfig::WheelOfFortune(WheelConfig::default()),
                BlockKind::Countdown => BlockConfig::Countdown(CountdownConfig::default()),
                BlockKind::Hero => BlockConfig::Hero(HeroConfig::default()),
            };
            let render = render_static(&config, "b1");
            assert!(render.markup.contains("id=\"lb-b1\""), "{} markup", kind);
        }
    }

    #[test]
    fn test_script_is_wrapped_in_its_own_scope() {
        let render = StaticRender { markup: "<div></div>".to_string(), script: Some("var a = 1;".to_string()) };
        let html = render.to_html();
        assert!(html.starts_with("<div></div>\n<script>\n(function () {\nvar a = 1;"));
        assert!(html.ends_with("})();\n</script>"));
        assert_eq!(StaticRender::markup_only("<p></p>".to_string()).to_html(), "<p></p>");
    }
}
