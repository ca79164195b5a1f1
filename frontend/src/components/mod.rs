pub mod block_view;
pub mod countdown;
pub mod device_preview;
pub mod hero;
pub mod slot_machine;
pub mod wheel;
pub mod win_overlay;

pub use block_view::BlockView;
pub use device_preview::DevicePreview;
pub use win_overlay::WinOverlay;
