use ratatui::style::Color;

/// Default board width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 24;

/// Default board height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 18;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 110;

/// How long the front end waits for input before redrawing.
pub const INPUT_POLL_INTERVAL_MS: u64 = 16;

/// Snake length after every reset.
pub const START_LENGTH: usize = 3;

/// Log file written next to the working directory unless overridden.
pub const DEFAULT_LOG_FILE: &str = "baguette-snake.log";

/// Directory name under the platform config dir.
pub const APP_DIR_NAME: &str = "baguette-snake";

/// Settings file name inside [`APP_DIR_NAME`].
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub text: Color,
    pub overlay_title: Color,
}

/// Warm bakery palette: crust-brown snake, butter-yellow food.
pub const THEME_SOURDOUGH: Theme = Theme {
    snake_head: Color::Rgb(0x6F, 0x5B, 0x3E),
    snake_body: Color::Rgb(0xA6, 0x8B, 0x6B),
    food: Color::Rgb(0xF3, 0xD2, 0x7A),
    play_bg: Color::Rgb(0xFA, 0xF7, 0xF2),
    border_fg: Color::Rgb(0xE7, 0xE0, 0xD8),
    text: Color::Rgb(0x6F, 0x5B, 0x3E),
    overlay_title: Color::Rgb(0xA6, 0x8B, 0x6B),
};

/// Glyph for one snake cell; two columns keep cells roughly square.
pub const GLYPH_SNAKE: &str = "██";

/// Glyph for the food cell.
pub const GLYPH_FOOD: &str = "▐▌";

/// Terminal columns used per grid cell.
pub const CELL_WIDTH: u16 = 2;
