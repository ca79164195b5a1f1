use std::borrow::Cow;
use crate::blocks::WheelConfig;
use crate::candidate::{OutcomeCandidate, PayoutValue};
use crate::reveal::{segment_angle, wheel_rotation_js, EASE_OUT_CSS};
use crate::session::REVEAL_HOLD_MS;
use crate::validation::is_css_color;
use super::{escape_html, script_string, StaticRender};

const PLACEHOLDER_COLOR: &str = "#94a3b8";

/// `conic-gradient` stops for the wheel face. Segment `i` spans `[i, i + 1) * angle`
/// clockwise from the pointer at 0°, which is the layout the rotation formula assumes.
pub fn conic_gradient(config: &WheelConfig) -> String {
    let (segments, _) = export_segments(config);
    let angle = segment_angle(segments.len());
    let stops: Vec<String> = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let color = segment_fill(config, segment, i);
            format!("{} {}deg {}deg", color, i as f64 * angle, (i + 1) as f64 * angle)
        })
        .collect();
    format!("conic-gradient(from 0deg, {})", stops.join(", "))
}

/// Rotation of the label for segment `index`, pointing at the segment's center.
pub fn label_angle(segment_count: usize, index: usize) -> f64 {
    let angle = segment_angle(segment_count);
    index as f64 * angle + angle / 2.0
}

pub fn render_wheel(config: &WheelConfig, dom_id: &str) -> StaticRender {
    let (segments, winning_index) = export_segments(config);

    let mut labels = String::new();
    for (i, segment) in segments.iter().enumerate() {
        labels.push_str(&format!(
            "      <span class=\"lb-segment-label\" style=\"transform: rotate({}deg) translateY(-38%);\">{}</span>\n",
            label_angle(segments.len(), i),
            escape_html(&segment.label)
        ));
    }

    let claim = match &config.claim_url {
        Some(url) => format!(
            "  <a class=\"lb-claim\" data-role=\"claim\" href=\"{}\" hidden>{}</a>\n",
            escape_html(url),
            escape_html(&config.claim_label)
        ),
        None => String::new(),
    };

    let markup = format!(
        "<section class=\"lb-block lb-wheel\" id=\"{id}\">\n  <h2 class=\"lb-title\">{title}</h2>\n  \
         <div class=\"lb-wheel-frame\">\n    <div class=\"lb-pointer\"></div>\n    \
         <div class=\"lb-wheel-disc\" data-role=\"disc\" style=\"background: {gradient}; transform: rotate(0deg);\">\n\
         {labels}    </div>\n  </div>\n  \
         <button type=\"button\" class=\"lb-spin\" data-role=\"spin\">Spin</button>\n  \
         <p class=\"lb-message\" data-role=\"message\" aria-live=\"polite\"></p>\n{claim}</section>",
        id = dom_id,
        title = escape_html(&config.title),
        gradient = conic_gradient(config),
        labels = labels,
        claim = claim,
    );

    let prize = segments
        .get(winning_index)
        .map(|s| s.payout.display())
        .unwrap_or_default();
    let params = format!(
        "var ROOT = document.getElementById({id});\n\
         var SPIN_MS = {duration};\n\
         var SPINS_ALLOWED = {allowed};\n\
         var REVEAL_HOLD_MS = {hold};\n\
         var EASING = {easing};\n\
         var PRIZE = {prize};",
        id = script_string(dom_id),
        duration = config.spin_duration_ms,
        allowed = config.spins_allowed,
        hold = REVEAL_HOLD_MS,
        easing = script_string(EASE_OUT_CSS),
        prize = script_string(&prize),
    );
    let rotation = wheel_rotation_js(segments.len(), winning_index, config.full_spins);

    StaticRender {
        markup,
        script: Some([params.as_str(), rotation.as_str(), WHEEL_RUNTIME_JS].join("\n")),
    }
}

/// Segments as exported. An empty wheel is drawn as one placeholder segment.
pub fn export_segments(config: &WheelConfig) -> (Cow<'_, [OutcomeCandidate]>, usize) {
    if config.segments.is_empty() {
        let placeholder = OutcomeCandidate::new("placeholder", "No prizes yet", PayoutValue::Prize(String::new()), 1.0)
            .with_color(PLACEHOLDER_COLOR);
        return (Cow::Owned(vec![placeholder]), 0);
    }
    let winning_index = config.winning_index.min(config.segments.len() - 1);
    (Cow::Borrowed(config.segments.as_slice()), winning_index)
}

fn segment_fill<'a>(config: &'a WheelConfig, segment: &'a OutcomeCandidate, index: usize) -> &'a str {
    match segment.color.as_deref() {
        Some(color) if is_css_color(color) => color,
        Some(_) => PLACEHOLDER_COLOR,
        None => config.segment_color(index),
    }
}

const WHEEL_RUNTIME_JS: &str = r#"var rotation = 0;
var spinning = false;
var used = 0;
var discEl = ROOT.querySelector('[data-role="disc"]');
var spinEl = ROOT.querySelector('[data-role="spin"]');
var messageEl = ROOT.querySelector('[data-role="message"]');
var claimEl = ROOT.querySelector('[data-role="claim"]');
function spinsLeft() { return SPINS_ALLOWED === 0 || used < SPINS_ALLOWED; }
function spin() {
  if (spinning || !spinsLeft()) { return; }
  spinning = true;
  used += 1;
  spinEl.disabled = true;
  messageEl.textContent = '';
  rotation = finalRotation(rotation);
  discEl.style.transition = 'transform ' + SPIN_MS + 'ms ' + EASING;
  discEl.style.transform = 'rotate(' + rotation + 'deg)';
  setTimeout(function () {
    messageEl.textContent = PRIZE;
    if (claimEl) { claimEl.hidden = false; }
    setTimeout(function () {
      spinning = false;
      spinEl.disabled = !spinsLeft();
    }, REVEAL_HOLD_MS);
  }, SPIN_MS);
}
spinEl.addEventListener('click', spin);"#;
