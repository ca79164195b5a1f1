use yew::prelude::*;
use shared::blocks::WheelConfig;
use shared::render::wheel_export::{conic_gradient, export_segments, label_angle};
use shared::reveal::EASE_OUT_CSS;
use shared::session::{Phase, TimerId, Transition, WheelEvent, WheelSession};
use crate::components::win_overlay::WinOverlay;
use crate::scheduler::TimeoutScheduler;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelProps {
    pub config: WheelConfig,
}

pub enum Msg {
    Timer(TimerId, WheelEvent),
    Spin,
    DismissOverlay,
}

/// Wheel of fortune. The disc is rotated with a CSS transition to the planned rotation
/// so the designated segment stops under the pointer at the top.
pub struct WheelOfFortuneBlock {
    session: WheelSession,
    scheduler: TimeoutScheduler<WheelEvent>,
    show_overlay: bool,
}

impl WheelOfFortuneBlock {
    fn apply(&mut self, transition: Transition) -> bool {
        match transition {
            Transition::Ignored => false,
            Transition::SpinStarted => {
                self.show_overlay = false;
                true
            }
            Transition::ResultRevealed => {
                self.show_overlay = self.session.result().is_some();
                true
            }
            _ => true,
        }
    }

    fn disc_style(&self) -> String {
        let duration = self.session.plan().map_or(0, |plan| plan.duration_ms);
        format!(
            "background: {}; transform: rotate({}deg); transition: transform {}ms {};",
            conic_gradient(self.session.config()),
            self.session.display_rotation(),
            duration,
            EASE_OUT_CSS,
        )
    }

    fn spin_label(&self) -> String {
        match (self.session.phase(), self.session.spins_left()) {
            (Phase::Spinning, _) => "Spinning...".to_string(),
            (_, Some(0)) => "No spins left".to_string(),
            (_, Some(left)) if left > 1 => format!("Spin ({} left)", left),
            _ => "Spin".to_string(),
        }
    }
}

impl Component for WheelOfFortuneBlock {
    type Message = Msg;
    type Properties = WheelProps;

    fn create(ctx: &Context<Self>) -> Self {
        let deliver = ctx.link().callback(|(id, event): (TimerId, WheelEvent)| Msg::Timer(id, event));
        Self {
            session: WheelSession::new(ctx.props().config.clone()),
            scheduler: TimeoutScheduler::new(deliver),
            show_overlay: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Timer(id, event) => {
                if !self.scheduler.fired(id) {
                    return false;
                }
                let transition = self.session.advance(event, &mut self.scheduler);
                self.apply(transition)
            }
            Msg::Spin => {
                let transition = self.session.advance(WheelEvent::SpinRequested, &mut self.scheduler);
                self.apply(transition)
            }
            Msg::DismissOverlay => {
                self.show_overlay = false;
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().config != old_props.config {
            self.session.dispose(&mut self.scheduler);
            self.scheduler.cancel_all();
            self.session = WheelSession::new(ctx.props().config.clone());
            self.show_overlay = false;
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = self.session.config();
        let (segments, _) = export_segments(config);
        let labels = segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                let style = format!("transform: rotate({}deg);", label_angle(segments.len(), i));
                html! { <span key={i} class={styles::WHEEL_LABEL} {style}>{ &segment.label }</span> }
            })
            .collect::<Html>();

        let message = match (self.session.phase(), self.session.result()) {
            (Phase::Revealing | Phase::Idle, Some(prize)) => prize.payout.display(),
            _ => String::new(),
        };

        let overlay = match self.session.result() {
            Some(prize) if self.show_overlay => html! {
                <WinOverlay
                    title={"You won!".to_string()}
                    detail={prize.payout.display()}
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
                <div class={styles::WHEEL_FRAME}>
                    <div class={styles::WHEEL_POINTER}></div>
                    <div class={styles::WHEEL_DISC} style={self.disc_style()}>
                        { labels }
                    </div>
                </div>
                <button
                    class={styles::BUTTON_PRIMARY}
                    disabled={!self.session.can_spin() || config.segments.is_empty()}
                    onclick={ctx.link().callback(|_| Msg::Spin)}
                >
                    { self.spin_label() }
                </button>
                <p class={styles::TEXT_SUCCESS} aria-live="polite">{ message }</p>
                { overlay }
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.session.dispose(&mut self.scheduler);
    }
}
