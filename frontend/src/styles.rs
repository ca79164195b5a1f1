pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full";
pub const NAV: &str = "sticky top-0 z-40 w-full h-14 px-4 sm:px-6 lg:px-8 bg-white/60 dark:bg-gray-700/60 backdrop-blur-md border-b border-gray-200/50 dark:border-gray-700/50";
pub const NAV_CONTENT: &str = "h-full flex items-center justify-between";
pub const NAV_BRAND: &str = "text-xl font-bold text-gray-900 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200";
pub const MAIN: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-3 py-1.5 rounded-lg text-sm font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800 disabled:opacity-50";
pub const BUTTON_TOGGLE_ACTIVE: &str = "px-3 py-1.5 rounded-lg text-sm font-medium bg-blue-600 text-white";
pub const SELECT: &str = "rounded-lg border-0 bg-white dark:bg-gray-900 py-1.5 px-3 text-gray-900 dark:text-white ring-1 ring-inset ring-gray-300 dark:ring-gray-700";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_SUCCESS: &str = "text-sm text-green-500 dark:text-green-400";
pub const LINK: &str = "text-blue-600 dark:text-blue-400 hover:text-blue-700 dark:hover:text-blue-300 transition-colors duration-200";
pub const LOADING: &str = "animate-pulse text-gray-500 dark:text-gray-400";

// Preview frame
pub const PREVIEW_TOOLBAR: &str = "flex items-center gap-2 mb-4";
pub const PREVIEW_FRAME: &str = "mx-auto max-w-full overflow-hidden rounded-xl border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 transition-all duration-300";
pub const BLOCK: &str = "p-6 border-b border-gray-100 dark:border-gray-700 last:border-b-0 text-center";

// Slot machine
pub const REELS: &str = "flex justify-center gap-3 my-4";
pub const REEL: &str = "w-20 h-20 sm:w-24 sm:h-24 flex items-center justify-center rounded-xl bg-gray-100 dark:bg-gray-900 text-4xl font-bold shadow-inner";
pub const REEL_SPINNING: &str = "w-20 h-20 sm:w-24 sm:h-24 flex items-center justify-center rounded-xl bg-gray-100 dark:bg-gray-900 text-4xl font-bold shadow-inner blur-[1px]";
pub const CONTROLS: &str = "flex flex-wrap items-center justify-center gap-2";

// Wheel
pub const WHEEL_FRAME: &str = "relative mx-auto my-4 w-64 h-64 sm:w-72 sm:h-72";
pub const WHEEL_POINTER: &str = "absolute left-1/2 -top-2 -translate-x-1/2 z-10 w-0 h-0 border-l-[12px] border-r-[12px] border-t-[20px] border-l-transparent border-r-transparent border-t-gray-900 dark:border-t-white";
pub const WHEEL_DISC: &str = "relative w-full h-full rounded-full shadow-xl";
pub const WHEEL_LABEL: &str = "absolute inset-0 flex items-start justify-center pt-6 text-xs font-semibold text-white drop-shadow";

// Countdown
pub const COUNTDOWN_ROW: &str = "flex justify-center gap-4 my-4";
pub const COUNTDOWN_UNIT: &str = "flex flex-col items-center min-w-[4rem] rounded-lg bg-gray-100 dark:bg-gray-900 px-3 py-2";
pub const COUNTDOWN_VALUE: &str = "text-3xl font-bold tabular-nums text-gray-900 dark:text-white";

// Hero
pub const HERO_SECTION: &str = "py-16 px-6 text-center rounded-lg";
pub const HERO_TITLE: &str = "text-5xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-purple-400 mb-4";
pub const HERO_CTA_BUTTON: &str = "inline-block mt-6 px-8 py-4 text-lg font-semibold text-white bg-gradient-to-r from-blue-500 to-purple-500 rounded-xl hover:from-blue-600 hover:to-purple-600 transform hover:scale-105 transition-all duration-300 shadow-lg";

// Win overlay
pub const OVERLAY: &str = "fixed inset-0 z-50 flex items-center justify-center bg-black/60 backdrop-blur-sm";
pub const OVERLAY_CARD: &str = "bg-white dark:bg-gray-800 rounded-2xl shadow-2xl p-8 max-w-sm w-full mx-4 text-center";
