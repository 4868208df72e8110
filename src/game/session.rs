//! Game Session
//!
//! The state machine behind a running game: the menu, letter entry, row
//! submission, round endings, and the two save slots. The session is
//! pure engine state; it consumes [`InputEvent`]s, mutates itself, and
//! emits [`GameEvent`]s for the frontend to render.
//!
//! The board is a single 30-tile grid shared between play and menu. In
//! play, rows 0..=5 hold the six attempts. On the menu, row 1 spells the
//! logo, row 2 spells the localized title, and the five cells of the last
//! row are the menu actions.

use tracing::{debug, info, warn};

use crate::core::Xorshift32;
use crate::game::events::GameEvent;
use crate::game::input::InputEvent;
use crate::game::score::score_guess;
use crate::game::tile::{self, letter, row_bounds, Tile, TileState};
use crate::save::{DailyRecord, RegularRecord, SaveSlot, SaveStore, SAVE_VERSION};
use crate::words::{daily::daily_index_today, Language, Wordlist};
use crate::{GRID_TILES, MAX_ATTEMPTS, WORD_LEN};

/// Menu tile indexes, left to right on the last row.
const MENU_NEW_GAME: i32 = 25;
const MENU_LOAD_GAME: i32 = 26;
const MENU_GAME_MODE: i32 = 27;
const MENU_LANGUAGE: i32 = 28;
const MENU_QUIT: i32 = 29;

/// Board position of the logo row.
const LOGO_START: usize = 5;
/// Board position of the localized title row.
const TITLE_START: usize = 10;
/// Board position of the language flag marker.
const FLAG_TILE: usize = 23;

const LOGO: &[u8; WORD_LEN] = b"NGAGE";

/// Which kind of round is being played.
///
/// The menu's new-game slot always starts a regular round; the mode
/// slot launches whichever of daily or endless is currently selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameMode {
    /// One random answer, six attempts, win or lose.
    Regular,
    /// One shared puzzle per calendar day, six attempts.
    #[default]
    Daily,
    /// Random words forever; the board scrolls instead of ending.
    Endless,
}

/// What the delete key does on an empty row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Nothing; deletion stops at the row's first cell.
    #[default]
    ClampToRow,
    /// Leave the round and return to the menu.
    ExitToMenu,
}

/// Coarse session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// On the menu board.
    Menu,
    /// A round is accepting guesses.
    Playing,
    /// The round finished; the board shows the result.
    Ended,
}

/// Initial session settings.
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    /// Starting language.
    pub language: Language,
    /// Mode the menu's mode slot launches until toggled.
    pub mode: GameMode,
    /// Delete-key behavior on an empty row.
    pub delete_policy: DeletePolicy,
    /// Seed for the regular/endless word sequence.
    pub seed: u32,
    /// Fixed daily index instead of the wall clock. For tests and
    /// replays; leave `None` in normal play.
    pub daily_index: Option<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            mode: GameMode::Daily,
            delete_policy: DeletePolicy::ClampToRow,
            seed: 0,
            daily_index: None,
        }
    }
}

/// The game state machine.
pub struct Session {
    tiles: [Tile; GRID_TILES],
    /// Board cursor: a cell of the current row in play, a menu action on
    /// the menu. -1 before the first board is painted.
    cursor: i32,
    previous_letter: u8,
    attempt: u8,
    answer: [u8; WORD_LEN],
    answer_index: u32,
    rng: Xorshift32,
    wordlist: Wordlist,
    language_set_once: bool,
    mode: GameMode,
    phase: Phase,
    delete_policy: DeletePolicy,
    daily_index_override: Option<u32>,
    /// Daily index of the round being played; only meaningful in daily
    /// mode.
    daily_index: u32,
    daily_has_ended: bool,
    daily_final_attempt: u8,
    events: Vec<GameEvent>,
}

impl Session {
    /// Create a session sitting on the menu.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self {
            tiles: tile::empty_grid(),
            cursor: -1,
            previous_letter: 0,
            attempt: 0,
            answer: [0; WORD_LEN],
            answer_index: 0,
            rng: Xorshift32::new(config.seed),
            wordlist: Wordlist::for_language(config.language),
            language_set_once: false,
            mode: config.mode,
            phase: Phase::Menu,
            delete_policy: config.delete_policy,
            daily_index_override: config.daily_index,
            daily_index: 0,
            daily_has_ended: false,
            daily_final_attempt: 0,
            events: Vec::new(),
        };
        session.paint_menu();
        session
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The full board.
    #[must_use]
    pub fn tiles(&self) -> &[Tile; GRID_TILES] {
        &self.tiles
    }

    /// Current board cursor.
    #[must_use]
    pub fn cursor(&self) -> i32 {
        self.cursor
    }

    /// Current attempt, 0-based.
    #[must_use]
    pub fn attempt(&self) -> u8 {
        self.attempt
    }

    /// Coarse session state.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Mode of the active round, or the mode-slot selection on the menu.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Active language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.wordlist.language()
    }

    /// 1-based attempt a finished daily round ended on, if it ended.
    #[must_use]
    pub fn daily_result(&self) -> Option<u8> {
        self.daily_has_ended.then_some(self.daily_final_attempt)
    }

    /// Drain the events produced since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    // -------------------------------------------------------------------------
    // Input dispatch
    // -------------------------------------------------------------------------

    /// Feed one input event through the state machine.
    pub fn handle_input(&mut self, event: InputEvent, store: &mut dyn SaveStore) {
        if event == InputEvent::Quit {
            self.quit(store);
            return;
        }
        match self.phase {
            Phase::Menu => self.handle_menu_input(event, store),
            Phase::Playing => self.handle_play_input(event, store),
            Phase::Ended => {
                if matches!(event, InputEvent::Confirm | InputEvent::Back) {
                    // The finished board persists before the menu wipes it
                    self.save_round(store);
                    self.enter_menu();
                }
            }
        }
    }

    fn quit(&mut self, store: &mut dyn SaveStore) {
        if self.phase == Phase::Playing {
            self.save_round(store);
        }
        self.push_event(GameEvent::QuitRequested);
    }

    /// Mode-appropriate snapshot of the active round.
    fn save_round(&self, store: &mut dyn SaveStore) {
        match self.mode {
            GameMode::Daily => self.write_daily(store),
            GameMode::Regular | GameMode::Endless => self.write_regular(store),
        }
    }

    fn handle_menu_input(&mut self, event: InputEvent, store: &mut dyn SaveStore) {
        match event {
            InputEvent::MenuNext => {
                self.cursor = if self.cursor >= MENU_QUIT {
                    MENU_NEW_GAME
                } else {
                    self.cursor + 1
                };
            }
            InputEvent::MenuPrev => {
                self.cursor = if self.cursor <= MENU_NEW_GAME {
                    MENU_QUIT
                } else {
                    self.cursor - 1
                };
            }
            InputEvent::NextLetter | InputEvent::PrevLetter => {
                if self.cursor == MENU_GAME_MODE {
                    self.toggle_mode();
                }
            }
            InputEvent::ToggleMode => self.toggle_mode(),
            InputEvent::Confirm => self.activate_menu_action(store),
            _ => {}
        }
    }

    fn activate_menu_action(&mut self, store: &mut dyn SaveStore) {
        match self.cursor {
            MENU_NEW_GAME => self.start_regular(),
            MENU_LOAD_GAME => self.load_regular(store),
            MENU_GAME_MODE => match self.mode {
                GameMode::Endless => self.start_endless(),
                GameMode::Regular | GameMode::Daily => self.start_daily(store),
            },
            MENU_LANGUAGE => self.set_language(self.wordlist.language().next()),
            MENU_QUIT => self.push_event(GameEvent::QuitRequested),
            _ => {}
        }
    }

    /// Flip the mode slot between daily and endless. Regular is not a
    /// selection; it is entered through the new-game and load slots.
    fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            GameMode::Daily => GameMode::Endless,
            GameMode::Endless | GameMode::Regular => GameMode::Daily,
        };
        // The mode cell doubles as the indicator
        self.tiles[MENU_GAME_MODE as usize].state = match self.mode {
            GameMode::Endless => TileState::Correct,
            GameMode::Regular | GameMode::Daily => TileState::Unresolved,
        };
        debug!(mode = ?self.mode, "game mode toggled");
    }

    /// Switch the active language. Repaints the menu board; a round in
    /// progress keeps its grid and finishes with the old list.
    pub fn set_language(&mut self, language: Language) {
        self.wordlist = Wordlist::for_language(language);
        self.language_set_once = true;
        if self.phase == Phase::Menu {
            self.paint_menu();
        }
        self.push_event(GameEvent::LanguageChanged { language });
        info!(?language, "language changed");
    }

    // -------------------------------------------------------------------------
    // Menu board
    // -------------------------------------------------------------------------

    /// Paint the menu board: logo, localized title, action icons, and the
    /// flag marker once a language was picked.
    fn paint_menu(&mut self) {
        self.tiles = tile::empty_grid();

        for (i, &b) in LOGO.iter().enumerate() {
            self.tiles[LOGO_START + i].letter = b;
        }
        for (i, &b) in self.wordlist.title().iter().enumerate() {
            self.tiles[TITLE_START + i].letter = b;
            self.tiles[TITLE_START + i].state = if i < 3 {
                TileState::Correct
            } else {
                TileState::Present
            };
        }

        if self.language_set_once {
            self.tiles[FLAG_TILE].letter = letter::ICON_FLAG;
        }

        let icons = [
            letter::ICON_NEW_GAME,
            letter::ICON_LOAD_GAME,
            letter::ICON_GAME_MODE,
            letter::ICON_LANGUAGE,
            letter::ICON_QUIT,
        ];
        for (i, &icon) in icons.iter().enumerate() {
            self.tiles[MENU_NEW_GAME as usize + i].letter = icon;
        }
        self.tiles[MENU_GAME_MODE as usize].state = match self.mode {
            GameMode::Endless => TileState::Correct,
            GameMode::Regular | GameMode::Daily => TileState::Unresolved,
        };

        self.cursor = MENU_GAME_MODE;
        self.phase = Phase::Menu;
    }

    fn enter_menu(&mut self) {
        self.paint_menu();
        self.push_event(GameEvent::ReturnedToMenu);
    }

    // -------------------------------------------------------------------------
    // Round lifecycle
    // -------------------------------------------------------------------------

    fn today(&self) -> u32 {
        match self.daily_index_override {
            Some(index) => index,
            None => daily_index_today(self.wordlist.answer_count()),
        }
    }

    fn start_daily(&mut self, store: &mut dyn SaveStore) {
        // The daily pool is the English answer table; other languages play
        // regular and endless rounds only.
        if self.wordlist.language() != Language::English {
            self.wordlist = Wordlist::for_language(Language::English);
        }
        let today = self.today();
        if self.try_resume_daily(store, today) {
            return;
        }

        // Fresh day: stale completion state from an older record must not
        // leak into the new round.
        self.mode = GameMode::Daily;
        self.daily_has_ended = false;
        self.daily_final_attempt = 0;
        self.daily_index = today;
        self.answer_index = today;
        self.answer = self.wordlist.answer_at(today);
        self.begin_round();
        self.push_event(GameEvent::NewDailyStarted { index: today });
        info!(index = today, "daily round started");
    }

    fn start_regular(&mut self) {
        self.mode = GameMode::Regular;
        self.answer_index = self.rng.next_index(self.wordlist.answer_count());
        self.answer = self.wordlist.answer_at(self.answer_index);
        self.begin_round();
        info!(index = self.answer_index, "regular round started");
    }

    fn start_endless(&mut self) {
        self.mode = GameMode::Endless;
        self.answer_index = self.rng.next_index(self.wordlist.answer_count());
        self.answer = self.wordlist.answer_at(self.answer_index);
        self.begin_round();
        info!(index = self.answer_index, "endless round started");
    }

    fn begin_round(&mut self) {
        self.tiles = tile::empty_grid();
        self.attempt = 0;
        self.cursor = 0;
        self.previous_letter = 0;
        self.phase = Phase::Playing;
    }

    fn try_resume_daily(&mut self, store: &mut dyn SaveStore, today: u32) -> bool {
        let Some(bytes) = store.read(SaveSlot::Daily) else {
            return false;
        };
        let record = match DailyRecord::decode(&bytes) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "discarding unreadable daily record");
                return false;
            }
        };
        if record.answer_index != today {
            debug!(
                saved = record.answer_index,
                today, "daily record is for another day"
            );
            return false;
        }

        self.tiles = record.tiles;
        self.cursor = record.cursor;
        self.previous_letter = record.previous_letter;
        self.attempt = record.attempt;
        self.daily_index = record.answer_index;
        self.answer_index = record.answer_index;
        self.answer = self.wordlist.answer_at(record.answer_index);
        self.daily_has_ended = record.has_ended;
        self.daily_final_attempt = record.final_attempt;
        self.mode = GameMode::Daily;
        self.phase = if record.has_ended {
            Phase::Ended
        } else {
            Phase::Playing
        };
        info!(index = today, resumed_ended = record.has_ended, "daily round resumed");
        true
    }

    fn load_regular(&mut self, store: &mut dyn SaveStore) {
        let Some(bytes) = store.read(SaveSlot::Regular) else {
            debug!("no saved round to load");
            return;
        };
        let record = match RegularRecord::decode(&bytes) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "discarding unreadable saved round");
                return;
            }
        };

        self.wordlist = Wordlist::for_language(record.language);
        self.tiles = record.tiles;
        self.cursor = record.cursor;
        self.previous_letter = record.previous_letter;
        self.answer_index = record.answer_index;
        self.answer = self.wordlist.answer_at(record.answer_index);
        self.rng = Xorshift32::new(record.seed);
        // The record does not carry a mode; a loaded round is regular
        self.mode = GameMode::Regular;
        // attempt = MAX_ATTEMPTS marks a finished round in the record
        if record.attempt >= MAX_ATTEMPTS {
            self.attempt = MAX_ATTEMPTS - 1;
            self.phase = Phase::Ended;
        } else {
            self.attempt = record.attempt;
            self.phase = Phase::Playing;
        }

        // The snapshot is one-shot; a consumed save cannot be re-loaded.
        if let Err(e) = store.delete(SaveSlot::Regular) {
            warn!(error = %e, "could not clear consumed save slot");
        }
        info!(attempt = self.attempt, "saved round loaded");
    }

    // -------------------------------------------------------------------------
    // Letter entry
    // -------------------------------------------------------------------------

    fn handle_play_input(&mut self, event: InputEvent, store: &mut dyn SaveStore) {
        match event {
            InputEvent::LetterGroup(digit) => self.cycle_group(digit),
            InputEvent::SpecialChar => {
                let current = self.current_cell().letter;
                self.current_cell_mut().letter = self.wordlist.next_special_char(current);
            }
            InputEvent::NextLetter => {
                let current = self.current_cell().letter;
                self.current_cell_mut().letter = self.wordlist.next_letter(current);
            }
            InputEvent::PrevLetter => {
                let current = self.current_cell().letter;
                self.current_cell_mut().letter = self.wordlist.prev_letter(current);
            }
            InputEvent::TextInput(c) => self.type_char(c),
            InputEvent::Confirm => self.confirm(store),
            InputEvent::Delete => self.delete(store),
            InputEvent::Back => {
                self.save_round(store);
                self.enter_menu();
            }
            InputEvent::MenuNext | InputEvent::MenuPrev | InputEvent::ToggleMode => {}
            // Handled before phase dispatch
            InputEvent::Quit => {}
        }
    }

    fn current_cell(&self) -> &Tile {
        &self.tiles[self.cursor as usize]
    }

    fn current_cell_mut(&mut self) -> &mut Tile {
        &mut self.tiles[self.cursor as usize]
    }

    /// Multi-tap entry: a digit key cycles through its letter group at
    /// the current cell.
    fn cycle_group(&mut self, digit: u8) {
        let Some((lo, hi)) = self.wordlist.group_range(digit) else {
            return;
        };
        let current = self.current_cell().letter;
        self.current_cell_mut().letter = if current < lo || current >= hi {
            lo
        } else {
            current + 1
        };
    }

    /// Keyboard entry: place the character and advance within the row.
    fn type_char(&mut self, c: char) {
        let Some(byte) = self.byte_for_char(c) else {
            return;
        };
        self.current_cell_mut().letter = byte;
        self.previous_letter = byte;
        let (_, last) = row_bounds(self.attempt);
        if self.cursor < last {
            self.cursor += 1;
        }
    }

    /// Map a keyboard character into the active alphabet's encoding.
    fn byte_for_char(&self, c: char) -> Option<u8> {
        // ß uppercases to "SS" in Unicode, which is not a single cell
        let upper = if c == 'ß' {
            'ß'
        } else {
            c.to_uppercase().next()?
        };
        let byte = match upper {
            '-' => letter::HYPHEN,
            'A'..='Z' if !self.wordlist.is_cyrillic() => upper as u8,
            // Latin-1 supplement maps byte-for-byte (Ä Ö Ü ß)
            '\u{C0}'..='\u{FF}' if !self.wordlist.is_cyrillic() => upper as u32 as u8,
            // CP1251 uppercase Cyrillic block
            '\u{0410}'..='\u{042F}' if self.wordlist.is_cyrillic() => {
                (upper as u32 - 0x0410 + 0xC0) as u8
            }
            _ => return None,
        };

        let in_alphabet =
            byte >= self.wordlist.first_letter() && byte <= self.wordlist.last_letter();
        let is_special = byte == letter::HYPHEN || self.wordlist.special_chars().contains(&byte);
        (in_alphabet || is_special).then_some(byte)
    }

    /// Commit the current cell; at the row's end with a full row, submit
    /// the guess.
    fn confirm(&mut self, store: &mut dyn SaveStore) {
        if self.current_cell().letter == letter::EMPTY {
            return;
        }
        self.previous_letter = self.current_cell().letter;

        let (first, last) = row_bounds(self.attempt);
        if self.cursor < last {
            self.cursor += 1;
            return;
        }

        // Full row required; an empty cell means nothing to submit yet
        let row_full = (first..=last).all(|i| self.tiles[i as usize].letter != letter::EMPTY);
        if row_full {
            self.submit_row(store);
        }
    }

    fn delete(&mut self, store: &mut dyn SaveStore) {
        let (first, _) = row_bounds(self.attempt);
        if self.current_cell().letter != letter::EMPTY {
            self.current_cell_mut().letter = letter::EMPTY;
        } else if self.cursor > first {
            self.cursor -= 1;
            self.current_cell_mut().letter = letter::EMPTY;
        } else {
            match self.delete_policy {
                DeletePolicy::ClampToRow => {}
                DeletePolicy::ExitToMenu => {
                    self.save_round(store);
                    self.enter_menu();
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Scoring and round endings
    // -------------------------------------------------------------------------

    fn submit_row(&mut self, store: &mut dyn SaveStore) {
        let (first, _) = row_bounds(self.attempt);
        let mut guess = [0u8; WORD_LEN];
        for (i, cell) in guess.iter_mut().enumerate() {
            *cell = self.tiles[first as usize + i].letter;
        }

        if !self.wordlist.contains_guess(&guess) {
            self.push_event(GameEvent::GuessRejected {
                attempt: self.attempt,
            });
            debug!(attempt = self.attempt, "guess rejected");
            return;
        }

        let (states, is_win) = score_guess(&guess, &self.answer);
        for (i, state) in states.into_iter().enumerate() {
            self.tiles[first as usize + i].state = state;
        }
        self.push_event(GameEvent::RowScored {
            attempt: self.attempt,
            is_win,
        });

        if is_win {
            self.phase = Phase::Ended;
            self.push_event(GameEvent::RoundWon {
                attempt: self.attempt,
            });
            if self.mode == GameMode::Daily {
                self.daily_has_ended = true;
                self.daily_final_attempt = self.attempt + 1;
            } else {
                self.reveal_answer();
            }
            info!(attempt = self.attempt, "round won");
        } else if self.mode == GameMode::Endless && self.attempt == MAX_ATTEMPTS - 2 {
            // The board scrolls instead of running out: rows shift up and
            // the freed row takes the next guess. Endless never loses.
            self.tiles.copy_within(WORD_LEN..GRID_TILES, 0);
            for cell in &mut self.tiles[GRID_TILES - WORD_LEN..] {
                *cell = Tile::default();
            }
            let (first, _) = row_bounds(self.attempt);
            self.cursor = first;
        } else if self.attempt == MAX_ATTEMPTS - 1 {
            self.phase = Phase::Ended;
            self.push_event(GameEvent::RoundLost {
                answer: self.answer,
            });
            if self.mode == GameMode::Daily {
                self.daily_has_ended = true;
                self.daily_final_attempt = self.attempt + 1;
            } else {
                self.reveal_answer();
            }
            info!("round lost");
        } else {
            self.attempt += 1;
            self.cursor = i32::from(self.attempt) * WORD_LEN as i32;
        }

        // Daily progress persists after every scored row, so quitting
        // mid-round cannot grant a retry.
        if self.mode == GameMode::Daily {
            self.write_daily(store);
        }
    }

    /// Wipe the letters and spell the answer on the row the round ended
    /// on. The classification colours stay in place; the daily mode gets
    /// a stats banner from `daily_result()` instead.
    fn reveal_answer(&mut self) {
        for cell in &mut self.tiles {
            cell.letter = letter::EMPTY;
        }
        let (first, _) = row_bounds(self.attempt);
        for (i, &b) in self.answer.iter().enumerate() {
            self.tiles[first as usize + i].letter = b;
        }
    }

    // -------------------------------------------------------------------------
    // Persistence
    // -------------------------------------------------------------------------

    fn write_regular(&self, store: &mut dyn SaveStore) {
        // The record has no phase field; a finished round is stored with
        // the out-of-band attempt value the load path checks for.
        let attempt = if self.phase == Phase::Ended {
            MAX_ATTEMPTS
        } else {
            self.attempt
        };
        let record = RegularRecord {
            version: SAVE_VERSION,
            tiles: self.tiles,
            cursor: self.cursor,
            previous_letter: self.previous_letter,
            answer_index: self.answer_index,
            attempt,
            seed: self.rng.state(),
            language: self.wordlist.language(),
        };
        match record.encode() {
            Ok(bytes) => {
                if let Err(e) = store.write(SaveSlot::Regular, &bytes) {
                    warn!(error = %e, "could not write round snapshot");
                }
            }
            Err(e) => warn!(error = %e, "could not encode round snapshot"),
        }
    }

    fn write_daily(&self, store: &mut dyn SaveStore) {
        let record = DailyRecord {
            tiles: self.tiles,
            cursor: self.cursor,
            previous_letter: self.previous_letter,
            answer_index: self.daily_index,
            attempt: self.attempt,
            has_ended: self.daily_has_ended,
            final_attempt: self.daily_final_attempt,
        };
        match record.encode() {
            Ok(bytes) => {
                if let Err(e) = store.write(SaveSlot::Daily, &bytes) {
                    warn!(error = %e, "could not write daily record");
                }
            }
            Err(e) => warn!(error = %e, "could not encode daily record"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
