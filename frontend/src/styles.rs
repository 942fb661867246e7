pub const CONTAINER: &str = "container mx-auto px-4 py-8";
pub const PANEL: &str = "bg-white dark:bg-gray-800 p-6 sm:p-8 rounded-2xl shadow-xl dark:shadow-[0_8px_30px_-12px_rgba(255,255,255,0.1)] max-w-2xl mx-auto border border-gray-100 dark:border-gray-700 backdrop-blur-sm";
pub const PANEL_WIDE: &str = "bg-white dark:bg-gray-800 p-6 rounded-2xl shadow-xl dark:shadow-[0_8px_30px_-12px_rgba(255,255,255,0.1)] max-w-5xl mx-auto border border-gray-100 dark:border-gray-700";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const CARD_SUCCESS: &str = "bg-green-50 dark:bg-green-900/50 border border-green-200 dark:border-green-800 rounded-lg p-4 text-green-700 dark:text-green-200";
pub const ALERT_WARNING: &str = "p-4 mb-4 text-sm text-yellow-800 rounded-lg bg-yellow-50 dark:bg-gray-900 dark:text-yellow-400";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-3 py-1.5 rounded-lg text-sm font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-700";
pub const INPUT: &str = "block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-orange-500";
pub const INPUT_NUMBER: &str = "w-24 rounded-md border-0 bg-white dark:bg-gray-900 py-1 px-2 text-right text-gray-900 dark:text-white ring-1 ring-inset ring-gray-300 dark:ring-gray-700 focus:ring-2 focus:ring-blue-600";
pub const TEXT_TITLE: &str = "text-3xl font-bold mb-6 text-center text-gray-900 dark:text-white";
pub const TEXT_TITLE_GRADIENT: &str = "bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const LOADING_SPINNER: &str = "animate-spin h-5 w-5 text-blue-600 dark:text-blue-400";
pub const TABLE: &str = "min-w-full divide-y divide-gray-200 dark:divide-gray-700 text-sm";
pub const TABLE_HEAD: &str = "px-3 py-2 text-left text-xs font-semibold uppercase tracking-wide text-gray-500 dark:text-gray-400";
pub const TABLE_CELL: &str = "px-3 py-2 text-gray-900 dark:text-gray-100 whitespace-nowrap";
pub const PROGRESS_TRACK: &str = "w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2.5";
pub const PROGRESS_BAR: &str = "bg-gradient-to-r from-blue-500 to-purple-600 h-2.5 rounded-full transition-all duration-200";
pub const REVEAL_OVERLAY: &str = "fixed inset-0 z-40 flex items-center justify-center bg-black/50 backdrop-blur-sm animate-fadeIn";
pub const REVEAL_CARD: &str = "relative bg-white dark:bg-gray-800 rounded-2xl shadow-2xl p-8 max-w-sm w-full mx-4 text-center border border-gray-100 dark:border-gray-700";
pub const BADGE_DEMO: &str = "inline-block px-3 py-1 rounded-full text-xs font-semibold uppercase tracking-wide bg-gray-200 text-gray-700 dark:bg-gray-700 dark:text-gray-200";
pub const BADGE_REAL: &str = "inline-block px-3 py-1 rounded-full text-xs font-semibold uppercase tracking-wide bg-green-100 text-green-800 dark:bg-green-900/60 dark:text-green-200";
pub const CONFETTI_LAYER: &str = "pointer-events-none fixed inset-0 z-50";

pub const ROULETTE_CSS: &str = r#"
@keyframes pulse-subtle {
    0% { transform: scale(1); box-shadow: 0 0 0 0 rgba(255, 215, 0, 0.4); }
    70% { transform: scale(1.02); box-shadow: 0 0 0 10px rgba(255, 215, 0, 0); }
    100% { transform: scale(1); box-shadow: 0 0 0 0 rgba(255, 215, 0, 0); }
}

@keyframes fadeIn {
    0% { opacity: 0; }
    100% { opacity: 1; }
}

@keyframes pop-in {
    0% { transform: scale(0.8); opacity: 0; }
    60% { transform: scale(1.05); opacity: 1; }
    100% { transform: scale(1); }
}

.animate-pulse-subtle {
    animation: pulse-subtle 2s infinite;
}

.animate-fadeIn {
    animation: fadeIn 0.3s ease-in-out;
}

.animate-pop-in {
    animation: pop-in 0.4s ease-out;
}
"#;
