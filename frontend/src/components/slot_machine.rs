use gloo_timers::callback::Interval;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use shared::blocks::SlotMachineConfig;
use shared::payout::{Payout, WinKind};
use shared::reveal::face_cycle_interval_ms;
use shared::session::{Phase, SlotEvent, SlotSession, TimerId, Transition};
use crate::components::win_overlay::WinOverlay;
use crate::scheduler::TimeoutScheduler;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SlotMachineProps {
    pub config: SlotMachineConfig,
}

pub enum Msg {
    /// Delivered by the scheduler
    Timer(TimerId, SlotEvent),
    /// Raised by the controls
    Control(SlotEvent),
    CycleFace(usize),
    DismissOverlay,
}

pub struct SlotMachineBlock {
    session: SlotSession<SmallRng>,
    scheduler: TimeoutScheduler<SlotEvent>,
    /// Face index each spinning reel currently shows
    faces: Vec<usize>,
    cyclers: Vec<Option<Interval>>,
    show_overlay: bool,
}

fn round_message(payout: &Payout, win_message: &str) -> String {
    match payout.kind {
        WinKind::Jackpot | WinKind::Prize => format!("{} +{}", win_message, payout.amount),
        WinKind::Pair => format!("Pair! +{}", payout.amount),
        WinKind::NoWin => "No win".to_string(),
    }
}

impl SlotMachineBlock {
    fn start_cycling(&mut self, ctx: &Context<Self>) {
        let reel_count = self.session.config().reel_count;
        self.faces = (0..reel_count).collect();
        self.cyclers = (0..reel_count)
            .map(|reel| {
                let link = ctx.link().clone();
                Some(Interval::new(face_cycle_interval_ms(reel), move || {
                    link.send_message(Msg::CycleFace(reel))
                }))
            })
            .collect();
    }

    fn apply(&mut self, ctx: &Context<Self>, transition: Transition) -> bool {
        match transition {
            Transition::Ignored => false,
            Transition::SpinStarted => {
                self.show_overlay = false;
                self.start_cycling(ctx);
                true
            }
            Transition::ReelStopped(reel) => {
                if let Some(cycler) = self.cyclers.get_mut(reel) {
                    *cycler = None;
                }
                true
            }
            Transition::ResultRevealed => {
                self.cyclers.clear();
                self.show_overlay = self.session.last_payout().map_or(false, |p| p.kind == WinKind::Jackpot);
                true
            }
            Transition::BackToIdle | Transition::Updated => true,
        }
    }

    fn reset(&mut self, config: SlotMachineConfig) {
        self.session.dispose(&mut self.scheduler);
        self.scheduler.cancel_all();
        self.cyclers.clear();
        self.show_overlay = false;
        self.session = SlotSession::new(config, SmallRng::from_entropy());
    }

    fn reel_label(&self, reel: usize) -> String {
        let symbols = &self.session.config().symbols;
        let face = if self.session.reel_is_spinning(reel) {
            self.faces.get(reel).and_then(|&face| symbols.get(face % symbols.len().max(1)))
        } else {
            self.session.reel_face(reel)
        };
        face.map(|symbol| symbol.label.clone()).unwrap_or_default()
    }

    fn view_controls(&self, ctx: &Context<Self>) -> Html {
        let config = self.session.config();
        let idle = self.session.phase() == Phase::Idle;
        let current_bet = self.session.bet();

        let on_bet = ctx.link().batch_callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            select.value().parse::<u64>().ok().map(|bet| Msg::Control(SlotEvent::SetBet(bet)))
        });
        let on_spin = ctx.link().callback(|_: MouseEvent| Msg::Control(SlotEvent::SpinRequested));

        let auto = if self.session.auto_spins_remaining() > 0 {
            let on_stop = ctx.link().callback(|_: MouseEvent| Msg::Control(SlotEvent::StopAutoSpin));
            html! {
                <button class={styles::BUTTON_SECONDARY} onclick={on_stop}>
                    { format!("Stop ({} left)", self.session.auto_spins_remaining()) }
                </button>
            }
        } else {
            config
                .auto_spin_counts
                .iter()
                .map(|&rounds| {
                    let onclick = ctx.link().callback(move |_: MouseEvent| Msg::Control(SlotEvent::StartAutoSpin(rounds)));
                    html! {
                        <button key={rounds} class={styles::BUTTON_SECONDARY} disabled={!self.session.can_spin()} {onclick}>
                            { format!("Auto {}", rounds) }
                        </button>
                    }
                })
                .collect::<Html>()
        };

        html! {
            <div class={styles::CONTROLS}>
                <label class={styles::TEXT_SMALL}>{ "Bet" }</label>
                <select class={styles::SELECT} disabled={!idle} onchange={on_bet}>
                    { for config.bet_options.iter().map(|&bet| html! {
                        <option value={bet.to_string()} selected={bet == current_bet}>{ bet.to_string() }</option>
                    }) }
                </select>
                <button class={styles::BUTTON_PRIMARY} disabled={!self.session.can_spin()} onclick={on_spin}>
                    { if self.session.is_spinning() { "Spinning..." } else { "Spin" } }
                </button>
                { auto }
            </div>
        }
    }
}

impl Component for SlotMachineBlock {
    type Message = Msg;
    type Properties = SlotMachineProps;

    fn create(ctx: &Context<Self>) -> Self {
        let deliver = ctx.link().callback(|(id, event): (TimerId, SlotEvent)| Msg::Timer(id, event));
        Self {
            session: SlotSession::new(ctx.props().config.clone(), SmallRng::from_entropy()),
            scheduler: TimeoutScheduler::new(deliver),
            faces: Vec::new(),
            cyclers: Vec::new(),
            show_overlay: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Timer(id, event) => {
                if !self.scheduler.fired(id) {
                    return false;
                }
                let transition = self.session.advance(event, &mut self.scheduler);
                self.apply(ctx, transition)
            }
            Msg::Control(event) => {
                let transition = self.session.advance(event, &mut self.scheduler);
                self.apply(ctx, transition)
            }
            Msg::CycleFace(reel) => match self.faces.get_mut(reel) {
                Some(face) if self.session.reel_is_spinning(reel) => {
                    *face = face.wrapping_add(1);
                    true
                }
                _ => false,
            },
            Msg::DismissOverlay => {
                self.show_overlay = false;
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().config != old_props.config {
            self.reset(ctx.props().config.clone());
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = self.session.config();

        if config.symbols.is_empty() {
            return html! {
                <section class={styles::BLOCK}>
                    <h2 class={styles::TEXT_H2}>{ &config.title }</h2>
                    <p class={styles::TEXT_SMALL}>{ "No symbols configured" }</p>
                </section>
            };
        }

        let reels = (0..config.reel_count)
            .map(|reel| {
                let class = if self.session.reel_is_spinning(reel) { styles::REEL_SPINNING } else { styles::REEL };
                html! { <div key={reel} {class}>{ self.reel_label(reel) }</div> }
            })
            .collect::<Html>();

        let message = match (self.session.phase(), self.session.last_payout()) {
            (Phase::Revealing, Some(payout)) => round_message(payout, &config.win_message),
            _ => String::new(),
        };

        let overlay = match self.session.last_payout() {
            Some(payout) if self.show_overlay => html! {
                <WinOverlay
                    title={config.win_message.clone()}
                    detail={format!("+{} credits", payout.amount)}
                    claim_url={config.claim_url.clone()}
                    claim_label={config.claim_label.clone()}
                    on_close={ctx.link().callback(|_| Msg::DismissOverlay)}
                />
            },
            _ => html! {},
        };

        html! {
            <section class={styles::BLOCK}>
                <h2 class={styles::TEXT_H2}>{ &config.title }</h2>
                <p class={styles::TEXT_BODY}>{ format!("Credits: {}", self.session.balance()) }</p>
                <div class={styles::REELS}>{ reels }</div>
                { self.view_controls(ctx) }
                <p class={styles::TEXT_SUCCESS} aria-live="polite">{ message }</p>
                { overlay }
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.session.dispose(&mut self.scheduler);
        self.cyclers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_message_matches_export_wording() {
        let jackpot = Payout { kind: WinKind::Jackpot, amount: 1000, paying_reel: Some(0) };
        assert_eq!(round_message(&jackpot, "Jackpot!"), "Jackpot! +1000");
        let pair = Payout { kind: WinKind::Pair, amount: 100, paying_reel: Some(0) };
        assert_eq!(round_message(&pair, "Jackpot!"), "Pair! +100");
        assert_eq!(round_message(&Payout::none(), "Jackpot!"), "No win");
    }
}
