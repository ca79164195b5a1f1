use serde_json::{json, Value};
use crate::blocks::SlotMachineConfig;
use crate::payout::{EVALUATE_JS, PAIR_PAYOUT_FACTOR};
use crate::probability::WEIGHTED_PICK_JS;
use crate::reveal::reel_timing_js;
use crate::session::{AUTO_SPIN_DELAY_MS, REVEAL_HOLD_MS};
use super::{escape_html, script_json, script_string, StaticRender};

pub fn render_slot(config: &SlotMachineConfig, dom_id: &str) -> StaticRender {
    if config.symbols.is_empty() {
        return StaticRender::markup_only(format!(
            "<section class=\"lb-block lb-slot lb-empty\" id=\"{}\">\n  <h2 class=\"lb-title\">{}</h2>\n  <p class=\"lb-notice\">No symbols configured</p>\n</section>",
            dom_id,
            escape_html(&config.title),
        ));
    }

    StaticRender {
        markup: slot_markup(config, dom_id),
        script: Some(slot_script(config, dom_id)),
    }
}

fn slot_markup(config: &SlotMachineConfig, dom_id: &str) -> String {
    let mut reels = String::new();
    for reel in 0..config.reel_count {
        let face = &config.symbols[reel % config.symbols.len()];
        reels.push_str(&format!(
            "    <div class=\"lb-reel\" data-reel=\"{}\">{}</div>\n",
            reel,
            escape_html(&face.label)
        ));
    }

    let mut bets = String::new();
    for bet in &config.bet_options {
        let selected = if *bet == config.default_bet { " selected" } else { "" };
        bets.push_str(&format!("<option value=\"{0}\"{1}>{0}</option>", bet, selected));
    }

    let mut auto = String::new();
    for count in &config.auto_spin_counts {
        auto.push_str(&format!(
            "    <button type=\"button\" class=\"lb-auto\" data-auto=\"{0}\">Auto {0}</button>\n",
            count
        ));
    }
    if !config.auto_spin_counts.is_empty() {
        auto.push_str("    <button type=\"button\" class=\"lb-auto-stop\" data-role=\"stop\">Stop</button>\n");
    }

    let claim = match &config.claim_url {
        Some(url) => format!(
            "  <a class=\"lb-claim\" data-role=\"claim\" href=\"{}\" hidden>{}</a>\n",
            escape_html(url),
            escape_html(&config.claim_label)
        ),
        None => String::new(),
    };

    format!(
        "<section class=\"lb-block lb-slot\" id=\"{id}\">\n  <h2 class=\"lb-title\">{title}</h2>\n  \
         <div class=\"lb-balance\">Credits: <span data-role=\"balance\">{balance}</span></div>\n  \
         <div class=\"lb-reels\">\n{reels}  </div>\n  <div class=\"lb-controls\">\n    \
         <select data-role=\"bet\">{bets}</select>\n    \
         <button type=\"button\" class=\"lb-spin\" data-role=\"spin\">Spin</button>\n{auto}  </div>\n  \
         <p class=\"lb-message\" data-role=\"message\" aria-live=\"polite\"></p>\n{claim}</section>",
        id = dom_id,
        title = escape_html(&config.title),
        balance = config.starting_balance,
        reels = reels,
        bets = bets,
        auto = auto,
        claim = claim,
    )
}

fn slot_script(config: &SlotMachineConfig, dom_id: &str) -> String {
    let symbols = Value::Array(
        config
            .symbols
            .iter()
            .map(|s| json!({ "id": s.id, "label": s.label, "payout": s.payout.credits(), "weight": s.weight }))
            .collect(),
    );

    let params = format!(
        "var ROOT = document.getElementById({id});\n\
         var SYMBOLS = {symbols};\n\
         var REEL_COUNT = {reels};\n\
         var WIN_CHANCE = {chance};\n\
         var PAIR_PAYOUT_FACTOR = {pair};\n\
         var REVEAL_HOLD_MS = {hold};\n\
         var AUTO_SPIN_DELAY_MS = {auto};\n\
         var WIN_MESSAGE = {message};\n\
         var balance = {balance};",
        id = script_string(dom_id),
        symbols = script_json(&symbols),
        reels = config.reel_count,
        chance = config.win_chance,
        pair = PAIR_PAYOUT_FACTOR,
        hold = REVEAL_HOLD_MS,
        auto = AUTO_SPIN_DELAY_MS,
        message = script_string(&config.win_message),
        balance = config.starting_balance,
    );

    let timing = reel_timing_js(config.spin_duration_ms, config.stagger_ms);
    [
        params.as_str(),
        timing.as_str(),
        WEIGHTED_PICK_JS,
        EVALUATE_JS,
        SLOT_RUNTIME_JS,
    ]
    .join("\n")
}

/// Drives the markup. Mirrors the interactive session: busy or under-funded spins do
/// nothing, auto-spin stops once credits run out.
const SLOT_RUNTIME_JS: &str = r#"var spinning = false;
var autoLeft = 0;
var autoTimer = null;
var reelEls = ROOT.querySelectorAll('[data-reel]');
var balanceEl = ROOT.querySelector('[data-role="balance"]');
var betEl = ROOT.querySelector('[data-role="bet"]');
var spinEl = ROOT.querySelector('[data-role="spin"]');
var messageEl = ROOT.querySelector('[data-role="message"]');
var claimEl = ROOT.querySelector('[data-role="claim"]');
function currentBet() { return parseInt(betEl.value, 10) || 0; }
function setBusy(busy) { spinning = busy; spinEl.disabled = busy; betEl.disabled = busy; }
function startReel(i, landing) {
  var el = reelEls[i];
  var face = i % SYMBOLS.length;
  el.className = 'lb-reel lb-spinning';
  var cycle = setInterval(function () {
    face = (face + 1) % SYMBOLS.length;
    el.textContent = SYMBOLS[face].label;
  }, faceCycleMs(i));
  setTimeout(function () {
    clearInterval(cycle);
    el.textContent = SYMBOLS[landing].label;
    el.className = 'lb-reel';
  }, reelStopAt(i));
}
function spin() {
  var bet = currentBet();
  if (spinning || bet <= 0 || balance < bet) { return false; }
  setBusy(true);
  balance -= bet;
  balanceEl.textContent = balance;
  messageEl.textContent = '';
  var reels = drawReels(SYMBOLS, REEL_COUNT, WIN_CHANCE);
  for (var i = 0; i < REEL_COUNT; i++) { startReel(i, reels[i]); }
  setTimeout(function () { settle(reels, bet); }, settleAt(REEL_COUNT));
  return true;
}
function settle(reels, bet) {
  var payout = evaluateReels(SYMBOLS, reels, bet);
  balance += payout.amount;
  balanceEl.textContent = balance;
  if (payout.kind === 'jackpot') {
    messageEl.textContent = WIN_MESSAGE + ' +' + payout.amount;
    if (claimEl) { claimEl.hidden = false; }
  } else if (payout.kind === 'pair') {
    messageEl.textContent = 'Pair! +' + payout.amount;
  } else {
    messageEl.textContent = 'No win';
  }
  setTimeout(function () {
    setBusy(false);
    queueAuto();
  }, REVEAL_HOLD_MS);
}
function queueAuto() {
  if (autoLeft <= 0) { return; }
  if (balance < currentBet()) { autoLeft = 0; return; }
  autoTimer = setTimeout(function () {
    autoTimer = null;
    autoLeft -= 1;
    if (!spin()) { autoLeft = 0; }
  }, AUTO_SPIN_DELAY_MS);
}
function stopAuto() {
  autoLeft = 0;
  if (autoTimer !== null) { clearTimeout(autoTimer); autoTimer = null; }
}
spinEl.addEventListener('click', function () { spin(); });
var autoEls = ROOT.querySelectorAll('[data-auto]');
for (var a = 0; a < autoEls.length; a++) {
  autoEls[a].addEventListener('click', function (e) {
    if (spinning) { return; }
    autoLeft = parseInt(e.currentTarget.getAttribute('data-auto'), 10) - 1;
    if (!spin()) { autoLeft = 0; }
  });
}
var stopEl = ROOT.querySelector('[data-role="stop"]');
if (stopEl) { stopEl.addEventListener('click', stopAuto); }"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{plan_reels, RESULT_TAIL_MS};

    #[test]
    fn test_script_embeds_planned_timings() {
        let config = SlotMachineConfig { spin_duration_ms: 1800, stagger_ms: 250, ..SlotMachineConfig::default() };
        let script = render_slot(&config, "lb-s").script.unwrap();
        let schedule = plan_reels(config.reel_count, config.spin_duration_ms, config.stagger_ms);

        assert!(script.contains(&format!("var REEL_SPIN_MS = {};", schedule.reels[0].stop_at_ms)));
        assert!(script.contains(&format!("var REEL_STAGGER_MS = {};", config.stagger_ms)));
        assert!(script.contains(&format!("var RESULT_TAIL_MS = {};", RESULT_TAIL_MS)));
        assert!(script.contains("var WIN_CHANCE = 20;"));
        assert!(script.contains("var PAIR_PAYOUT_FACTOR = 0.5;"));
        assert!(script.contains("function evaluateReels"));
        assert!(script.contains("function pickWeighted"));
    }

    #[test]
    fn test_symbols_are_embedded_with_weights() {
        let script = render_slot(&SlotMachineConfig::default(), "lb-s").script.unwrap();
        assert!(script.contains(r#""id":"cherry""#));
        assert!(script.contains(r#""weight":30.0"#));
        assert!(script.contains(r#""payout":100.0"#));
    }

    #[test]
    fn test_markup_escapes_labels() {
        let mut config = SlotMachineConfig { title: "<img src=x onerror=alert(1)>".to_string(), ..SlotMachineConfig::default() };
        config.symbols[0].label = "<b>".to_string();
        let render = render_slot(&config, "lb-s");
        assert!(render.markup.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(render.markup.contains("&lt;b&gt;"));
        assert!(!render.markup.contains("<img"));
    }

    #[test]
    fn test_markup_has_one_element_per_reel_and_selected_bet() {
        let config = SlotMachineConfig { reel_count: 5, ..SlotMachineConfig::default() };
        let markup = render_slot(&config, "lb-s").markup;
        assert_eq!(markup.matches("data-reel=").count(), 5);
        assert!(markup.contains("<option value=\"10\" selected>10</option>"));
        assert!(markup.contains("data-auto=\"25\""));
    }

    #[test]
    fn test_zero_symbols_render_notice_without_script() {
        let config = SlotMachineConfig { symbols: Vec::new(), ..SlotMachineConfig::default() };
        let render = render_slot(&config, "lb-s");
        assert!(render.script.is_none());
        assert!(render.markup.contains("No symbols configured"));
    }
}
