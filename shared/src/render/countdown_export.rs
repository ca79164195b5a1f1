use crate::blocks::countdown::{remaining_parts, COUNTDOWN_JS};
use crate::blocks::CountdownConfig;
use super::{escape_html, script_string, StaticRender};

pub fn render_countdown(config: &CountdownConfig, dom_id: &str) -> StaticRender {
    let start = remaining_parts(config, 0);
    let days = if config.show_days {
        format!("<span data-unit=\"days\">{}</span>d ", start.days)
    } else {
        String::new()
    };

    let markup = format!(
        "<section class=\"lb-block lb-countdown\" id=\"{id}\">\n  <h2 class=\"lb-title\">{headline}</h2>\n  \
         <p class=\"lb-clock\" data-role=\"clock\">{days}<span data-unit=\"hours\">{hours:02}</span>:\
         <span data-unit=\"minutes\">{minutes:02}</span>:<span data-unit=\"seconds\">{seconds:02}</span></p>\n  \
         <p class=\"lb-expired\" data-role=\"expired\" hidden>{expired}</p>\n</section>",
        id = dom_id,
        headline = escape_html(&config.headline),
        days = days,
        hours = start.hours,
        minutes = start.minutes,
        seconds = start.seconds,
        expired = escape_html(&config.expired_message),
    );

    let params = format!(
        "var ROOT = document.getElementById({id});\n\
         var DURATION_SECS = {duration};\n\
         var SHOW_DAYS = {show_days};",
        id = script_string(dom_id),
        duration = config.duration_secs,
        show_days = config.show_days,
    );

    StaticRender {
        markup,
        script: Some([params.as_str(), COUNTDOWN_JS, COUNTDOWN_RUNTIME_JS].join("\n")),
    }
}

const COUNTDOWN_RUNTIME_JS: &str = r#"var startedAt = Date.now();
function pad(n) { return n < 10 ? '0' + n : '' + n; }
function setUnit(unit, text) {
  var el = ROOT.querySelector('[data-unit="' + unit + '"]');
  if (el) { el.textContent = text; }
}
var ticker = setInterval(function () {
  var parts = remainingParts(DURATION_SECS, Date.now() - startedAt, SHOW_DAYS);
  setUnit('days', '' + parts.days);
  setUnit('hours', pad(parts.hours));
  setUnit('minutes', pad(parts.minutes));
  setUnit('seconds', pad(parts.seconds));
  if (parts.expired) {
    clearInterval(ticker);
    ROOT.querySelector('[data-role="clock"]').hidden = true;
    ROOT.querySelector('[data-role="expired"]').hidden = false;
  }
}, 1000);"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_markup_shows_full_duration() {
        let config = CountdownConfig { duration_secs: 3 * 3600 + 5 * 60 + 9, show_days: false, ..CountdownConfig::default() };
        let markup = render_countdown(&config, "lb-c").markup;
        assert!(markup.contains("<span data-unit=\"hours\">03</span>"));
        assert!(markup.contains("<span data-unit=\"minutes\">05</span>"));
        assert!(markup.contains("<span data-unit=\"seconds\">09</span>"));
        assert!(!markup.contains("data-unit=\"days\""));
    }

    #[test]
    fn test_script_carries_duration_and_arithmetic() {
        let script = render_countdown(&CountdownConfig::default(), "lb-c").script.unwrap();
        assert!(script.contains("var DURATION_SECS = 900;"));
        assert!(script.contains("var SHOW_DAYS = true;"));
        assert!(script.contains("function remainingParts"));
    }
}
