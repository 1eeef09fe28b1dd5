use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};

use crate::chart::HoverTracker;
use crate::io::state::{UiState, read_ui_state, write_ui_state};
use crate::io::store_io::load_tracker;
use crate::model::{HABIT_COUNT, HabitIndex, Tracker};
use crate::ops::actions::{self, Action, DayCursor, Outcome};

use super::input;
use super::render;
use super::render::grid_view::DAY_COL_WIDTH;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new name for the habit under the cursor
    Rename,
    /// Waiting for y/n on a full reset
    Confirm,
}

/// Where the day cells of the grid were drawn in the last frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridHitbox {
    /// One row per habit; columns start at the first visible day
    pub cells: Rect,
    pub first_day: usize,
    pub visible_days: usize,
}

impl GridHitbox {
    /// Habit and 0-based day under a terminal cell, if any
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(HabitIndex, usize)> {
        if !self.cells.contains(Position::new(column, row)) {
            return None;
        }
        let habit = HabitIndex::new((row - self.cells.y) as usize)?;
        let offset = ((column - self.cells.x) / DAY_COL_WIDTH) as usize;
        (offset < self.visible_days).then_some((habit, self.first_day + offset))
    }
}

/// Screen regions recorded during render, used to route mouse events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hitboxes {
    pub grid: GridHitbox,
    /// Inside of the chart block (the canvas)
    pub chart: Rect,
    pub day_ops: Rect,
}

/// Main application state
pub struct App {
    pub tracker: Tracker,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Grid cursor: highlighted habit row
    pub cursor_habit: HabitIndex,
    /// Grid cursor: highlighted day column (0-based)
    pub cursor_day: usize,
    /// First visible day column
    pub scroll_offset: usize,
    /// Day picked for fill/clear (1-based, session only)
    pub day_cursor: DayCursor,
    pub hover: HoverTracker,
    /// Rename mode: text being typed and the byte offset of the cursor
    pub edit_buffer: String,
    pub edit_cursor: usize,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    /// Help overlay visible
    pub show_help: bool,
    pub hitboxes: Hitboxes,
}

impl App {
    pub fn new(tracker: Tracker) -> Self {
        let theme = Theme::from_config(&tracker.config.ui);
        App {
            tracker,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor_habit: HabitIndex::FIRST,
            cursor_day: 0,
            scroll_offset: 0,
            day_cursor: DayCursor::default(),
            hover: HoverTracker::default(),
            edit_buffer: String::new(),
            edit_cursor: 0,
            status_message: None,
            status_is_error: false,
            show_help: false,
            hitboxes: Hitboxes::default(),
        }
    }

    pub fn days(&self) -> usize {
        self.tracker.days()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = true;
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }

    /// Apply an action to the tracker and report the outcome in the status row
    pub fn dispatch(&mut self, action: Action) {
        let outcome = actions::apply(&mut self.tracker, &mut self.day_cursor, action.clone());
        match outcome {
            Outcome::Updated => match self.success_message(&action) {
                Some(msg) => self.set_status(msg),
                None => self.clear_status(),
            },
            Outcome::Ignored | Outcome::CursorMoved => {}
            Outcome::Exported(path) => {
                self.set_status(format!("Stats exported to {}", path.display()));
            }
            Outcome::SaveFailed(e) => {
                self.set_error(format!("Save failed: {} (see .recovery.log)", e));
            }
            Outcome::ExportFailed(e) => {
                self.set_error(format!("Export failed: {}", e));
            }
        }
        if matches!(action, Action::SetCycle(_)) {
            self.clamp_cursor();
        }
    }

    fn success_message(&self, action: &Action) -> Option<String> {
        match action {
            Action::SetCycle(cycle) => Some(format!("{} Day Tracker", cycle.days())),
            Action::FillDay => Some(format!("Filled day {}", self.day_cursor.day())),
            Action::ClearDay => Some(format!("Cleared day {}", self.day_cursor.day())),
            Action::ClearHabit(habit) => {
                Some(format!("Cleared {}", self.tracker.habits.name(*habit)))
            }
            Action::Rename { habit, .. } => Some(format!(
                "Renamed habit {} to {}",
                habit,
                self.tracker.habits.name(*habit)
            )),
            Action::Reset => Some("All progress reset".to_string()),
            _ => None,
        }
    }

    /// Keep the grid cursor inside the active cycle
    pub fn clamp_cursor(&mut self) {
        let last = self.days() - 1;
        self.cursor_day = self.cursor_day.min(last);
        self.scroll_offset = self.scroll_offset.min(self.cursor_day);
    }

    pub fn move_habit(&mut self, delta: isize) {
        let idx = self
            .cursor_habit
            .get()
            .saturating_add_signed(delta)
            .min(HABIT_COUNT - 1);
        if let Some(habit) = HabitIndex::new(idx) {
            self.cursor_habit = habit;
        }
    }

    pub fn move_day(&mut self, delta: isize) {
        self.cursor_day = self
            .cursor_day
            .saturating_add_signed(delta)
            .min(self.days() - 1);
    }

    /// Scroll so the cursor column is inside a window of `visible` columns
    pub fn ensure_day_visible(&mut self, visible: usize) {
        let visible = visible.max(1);
        if self.cursor_day < self.scroll_offset {
            self.scroll_offset = self.cursor_day;
        } else if self.cursor_day >= self.scroll_offset + visible {
            self.scroll_offset = self.cursor_day + 1 - visible;
        }
        let max_offset = self.days().saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    pub fn begin_rename(&mut self) {
        self.edit_buffer = self.tracker.habits.name(self.cursor_habit).to_string();
        self.edit_cursor = self.edit_buffer.len();
        self.mode = Mode::Rename;
        self.clear_status();
    }

    pub fn commit_rename(&mut self) {
        let name = std::mem::take(&mut self.edit_buffer);
        self.edit_cursor = 0;
        self.mode = Mode::Navigate;
        if name.trim().is_empty() {
            self.set_status("Name unchanged");
            return;
        }
        self.dispatch(Action::Rename {
            habit: self.cursor_habit,
            name,
        });
    }

    pub fn cancel_rename(&mut self) {
        self.edit_buffer.clear();
        self.edit_cursor = 0;
        self.mode = Mode::Navigate;
    }

    pub fn request_reset(&mut self) {
        self.show_help = false;
        self.mode = Mode::Confirm;
    }
}

/// Restore the grid cursor saved by a previous session
pub fn restore_ui_state(app: &mut App) {
    let Some(state) = read_ui_state(&app.tracker.data_dir) else {
        return;
    };
    if let Some(habit) = HabitIndex::new(state.habit) {
        app.cursor_habit = habit;
    }
    app.cursor_day = state.day;
    app.scroll_offset = state.scroll_offset;
    app.clamp_cursor();
}

/// Save the grid cursor to .state.json
pub fn save_ui_state(app: &App) {
    let state = UiState {
        habit: app.cursor_habit.get(),
        day: app.cursor_day,
        scroll_offset: app.scroll_offset,
    };
    let _ = write_ui_state(&app.tracker.data_dir, &state);
}

/// Run the TUI against the tracker files in `data_dir`
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (tracker, warnings) = load_tracker(data_dir);
    let mut app = App::new(tracker);
    if let Some(warning) = warnings.first() {
        app.set_error(warning.clone());
    }

    restore_ui_state(&mut app);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    // Without this, legacy terminals send Ctrl+Shift+R as plain Ctrl+R
    let enhanced = matches!(supports_keyboard_enhancement(), Ok(true));
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        if enhanced {
            let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut redraw = true;
    loop {
        if redraw {
            terminal.draw(|frame| render::render(frame, app))?;
        }

        redraw = false;
        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                    redraw = true;
                }
                Event::Mouse(mouse) => redraw = input::handle_mouse(app, mouse),
                Event::Resize(..) => redraw = true,
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
