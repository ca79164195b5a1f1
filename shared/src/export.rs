use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use crate::page::Page;
use crate::render::{escape_html, render_static};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Html,
    Php,
    Json,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Html => "text/html; charset=utf-8",
            ExportFormat::Php => "application/x-httpd-php",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Php => "php",
            ExportFormat::Json => "json",
        }
    }
}

const PHP_PREAMBLE: &str = "<?php header('Content-Type: text/html; charset=utf-8'); ?>\n";

pub fn export_page(page: &Page, format: ExportFormat) -> Result<String, serde_json::Error> {
    match format {
        ExportFormat::Html => Ok(page_document(page)),
        ExportFormat::Php => Ok(format!("{}{}", PHP_PREAMBLE, page_document(page))),
        ExportFormat::Json => serde_json::to_string_pretty(page),
    }
}

/// Standalone HTML document: every block's static render in page order.
pub fn page_document(page: &Page) -> String {
    let blocks: Vec<String> = page
        .blocks
        .iter()
        .map(|block| render_static(&block.config, &block.id).to_html())
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>\n{css}\n</style>\n</head>\n<body>\n<main class=\"lb-page\">\n\
         {blocks}\n</main>\n</body>\n</html>\n",
        title = escape_html(&page.title),
        css = PAGE_CSS,
        blocks = blocks.join("\n"),
    )
}

const PAGE_CSS: &str = "body { margin: 0; font-family: system-ui, sans-serif; background: #0f172a; color: #f8fafc; }
.lb-page { max-width: 960px; margin: 0 auto; padding: 24px 16px; }
.lb-block { margin: 0 0 48px; text-align: center; }
.lb-hero { padding: 64px 16px; border-radius: 16px; }
.lb-cta, .lb-claim { display: inline-block; margin-top: 16px; padding: 12px 28px; border-radius: 999px; background: #f97316; color: #fff; text-decoration: none; font-weight: 600; }
.lb-reels { display: flex; justify-content: center; gap: 12px; margin: 16px 0; }
.lb-reel { width: 88px; height: 88px; line-height: 88px; font-size: 48px; border-radius: 12px; background: #1e293b; }
.lb-spinning { filter: blur(1px); }
.lb-controls { display: flex; justify-content: center; gap: 8px; flex-wrap: wrap; }
.lb-spin { padding: 10px 32px; font-size: 18px; border: 0; border-radius: 8px; background: #22c55e; color: #fff; cursor: pointer; }
.lb-spin:disabled { opacity: 0.5; cursor: default; }
.lb-wheel-frame { position: relative; width: 320px; height: 320px; margin: 16px auto; }
.lb-pointer { position: absolute; top: -8px; left: 50%; margin-left: -12px; width: 0; height: 0; border-left: 12px solid transparent; border-right: 12px solid transparent; border-top: 24px solid #f8fafc; z-index: 1; }
.lb-wheel-disc { position: relative; width: 100%; height: 100%; border-radius: 50%; overflow: hidden; }
.lb-segment-label { position: absolute; top: 50%; left: 50%; width: 120px; margin-left: -60px; margin-top: -0.6em; font-size: 13px; font-weight: 600; transform-origin: 50% 50%; }
.lb-clock { font-size: 40px; font-variant-numeric: tabular-nums; }
.lb-notice { opacity: 0.7; }";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{BlockConfig, HeroConfig, SlotMachineConfig};
    use crate::page::PageBlock;
    use std::str::FromStr;

    fn sample_page() -> Page {
        let mut page = Page::new("p1", "Summer <Sale>");
        page.blocks.push(PageBlock::new("hero", BlockConfig::Hero(HeroConfig::default())));
        page.blocks.push(PageBlock::new("slot", BlockConfig::SlotMachine(SlotMachineConfig::default())));
        page
    }

    #[test]
    fn test_html_export_is_a_full_document() {
        let html = export_page(&sample_page(), ExportFormat::Html).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Summer &lt;Sale&gt;</title>"));
        let hero = html.find("id=\"lb-hero\"").unwrap();
        let slot = html.find("id=\"lb-slot\"").unwrap();
        assert!(hero < slot);
        assert_eq!(html.matches("<script>").count(), 1);
    }

    #[test]
    fn test_php_export_wraps_html() {
        let php = export_page(&sample_page(), ExportFormat::Php).unwrap();
        assert!(php.starts_with("<?php header('Content-Type: text/html; charset=utf-8'); ?>\n<!DOCTYPE html>"));
    }

    #[test]
    fn test_php_export_keeps_labels_out_of_php_mode() {
        let mut slot = SlotMachineConfig::default();
        slot.symbols[0].label = "<?php system($_GET['c']); ?>".to_string();
        slot.win_message = "<?= 'x' ?>".to_string();
        let mut page = Page::new("p2", "Promo");
        page.blocks.push(PageBlock::new("slot", BlockConfig::SlotMachine(slot)));
        assert!(page.check().is_ok());

        let php = export_page(&page, ExportFormat::Php).unwrap();
        assert_eq!(php.matches("<?php").count(), 1);
        assert_eq!(php.matches("<?").count(), 1);
    }

    #[test]
    fn test_json_export_round_trips() {
        let page = sample_page();
        let json = export_page(&page, ExportFormat::Json).unwrap();
        let back: Page = serde_json::from_str(&json).unwrap();
        assert_eq!(back, page);
    }

    #[test]
    fn test_format_names() {
        assert_eq!(ExportFormat::from_str("php").unwrap(), ExportFormat::Php);
        assert_eq!(ExportFormat::Json.to_string(), "json");
        assert!(ExportFormat::from_str("pdf").is_err());
    }
}
