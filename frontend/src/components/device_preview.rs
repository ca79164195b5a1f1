use yew::prelude::*;
use shared::device::DevicePreset;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct DevicePreviewProps {
    #[prop_or_default]
    pub children: Html,
}

/// Frames its children at the width of the selected device preset.
#[function_component(DevicePreview)]
pub fn device_preview(props: &DevicePreviewProps) -> Html {
    let device = use_state(DevicePreset::default);

    let buttons = DevicePreset::ALL
        .iter()
        .map(|&preset| {
            let onclick = {
                let device = device.clone();
                Callback::from(move |_: MouseEvent| device.set(preset))
            };
            let class = if *device == preset { styles::BUTTON_TOGGLE_ACTIVE } else { styles::BUTTON_SECONDARY };
            html! {
                <button key={preset.to_string()} {class} {onclick}>
                    { format!("{} ({}px)", preset.label(), preset.width_px()) }
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div>
            <div class={styles::PREVIEW_TOOLBAR}>{ buttons }</div>
            <div class={styles::PREVIEW_FRAME} style={format!("width: {}px;", device.width_px())}>
                { props.children.clone() }
            </div>
        </div>
    }
}
