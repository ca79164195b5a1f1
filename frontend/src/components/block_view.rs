use yew::prelude::*;
use shared::blocks::BlockConfig;
use shared::PageBlock;
use crate::components::countdown::Countdown;
use crate::components::hero::Hero;
use crate::components::slot_machine::SlotMachineBlock;
use crate::components::wheel::WheelOfFortuneBlock;

#[derive(Properties, PartialEq)]
pub struct BlockViewProps {
    pub block: PageBlock,
}

/// Interactive renderer for any block.
#[function_component(BlockView)]
pub fn block_view(props: &BlockViewProps) -> Html {
    let inner = match &props.block.config {
        BlockConfig::SlotMachine(config) => html! { <SlotMachineBlock config={config.clone()} /> },
        BlockConfig::WheelOfFortune(config) => html! { <WheelOfFortuneBlock config={config.clone()} /> },
        BlockConfig::Countdown(config) => html! { <Countdown config={config.clone()} /> },
        BlockConfig::Hero(config) => html! { <Hero config={config.clone()} /> },
    };

    html! {
        <div id={shared::render::dom_id(&props.block.id)} data-block-type={props.block.config.kind().to_string()}>
            { inner }
        </div>
    }
}
