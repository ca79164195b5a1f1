use gloo_timers::callback::Interval;
use yew::prelude::*;
use shared::blocks::countdown::{remaining_parts, CountdownParts};
use shared::blocks::CountdownConfig;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub config: CountdownConfig,
}

fn units(parts: &CountdownParts, show_days: bool) -> Vec<(&'static str, u64)> {
    let mut units = Vec::with_capacity(4);
    if show_days {
        units.push(("Days", parts.days));
    }
    units.push(("Hours", parts.hours));
    units.push(("Minutes", parts.minutes));
    units.push(("Seconds", parts.seconds));
    units
}

/// Evergreen countdown, restarted whenever the block is mounted.
#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
    let elapsed_ms = use_state(|| 0u64);

    {
        let elapsed_ms = elapsed_ms.clone();
        use_effect_with(props.config.duration_secs, move |_| {
            elapsed_ms.set(0);
            let started = js_sys::Date::now();
            let interval = Interval::new(1000, move || {
                elapsed_ms.set((js_sys::Date::now() - started).max(0.0) as u64);
            });

            move || drop(interval)
        });
    }

    let config = &props.config;
    let parts = remaining_parts(config, *elapsed_ms);

    if parts.expired {
        return html! {
            <section class={styles::BLOCK}>
                <h2 class={styles::TEXT_H2}>{ &config.expired_message }</h2>
            </section>
        };
    }

    html! {
        <section class={styles::BLOCK}>
            <h2 class={styles::TEXT_H2}>{ &config.headline }</h2>
            <div class={styles::COUNTDOWN_ROW}>
                { for units(&parts, config.show_days).into_iter().map(|(label, value)| html! {
                    <div key={label} class={styles::COUNTDOWN_UNIT}>
                        <span class={styles::COUNTDOWN_VALUE}>{ format!("{:02}", value) }</span>
                        <span class={styles::TEXT_SMALL}>{ label }</span>
                    </div>
                }) }
            </div>
        </section>
    }
}
