use anyhow::{Context, Result};
use macroquad::prelude::*;
use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridkit::{
    Cell, Coord, Grid, LifeSession, LifeStepper, MazeBuilder, MazeSession, Settings, WordList, WordRound,
    domain::{CubeSet, MergeStrategy, Pattern, all_rules, default_rule, patterns, presets},
    input,
    rendering::{self, GridView},
    ui::{self, Action, Dropdown, Mode},
};

const LIFE_ROWS: usize = 40;
const LIFE_COLS: usize = 60;
/// Seconds between replayed wall removals
const MAZE_STEP_SECS: f32 = 0.02;
const BUTTONS_TOP: f32 = 180.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "gridkit - Life, Mazes and Boggle".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Pattern placed in the middle of an empty Life board
fn centered(pattern: &Pattern) -> Grid<Cell> {
    let mut board = Grid::new(LIFE_ROWS, LIFE_COLS);
    let origin = Coord::new(
        LIFE_ROWS.saturating_sub(pattern.rows) / 2,
        LIFE_COLS.saturating_sub(pattern.cols) / 2,
    );
    pattern.place_on(&mut board, origin);
    board
}

fn initial_board(settings: &Settings) -> Result<Grid<Cell>> {
    match &settings.life.pattern_path {
        Some(path) => patterns::load_board(path)
            .with_context(|| format!("Failed to load Life board from {}", path.display())),
        None => Ok(centered(&presets::r_pentomino())),
    }
}

fn stepper(settings: &Settings, rule_index: usize) -> LifeStepper {
    let rule = all_rules()
        .into_iter()
        .nth(rule_index)
        .map(|(_, rule)| rule)
        .unwrap_or_else(default_rule);
    LifeStepper::new(rule, settings.life.max_age)
}

fn status_color(good: bool) -> Color {
    if good {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridkit=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        tracing::error!("{:#}", err);
    }
}

async fn run() -> Result<()> {
    let settings = Settings::from_env()?;
    tracing::info!(?settings, "Starting gridkit");

    let dictionary = WordList::load(&settings.boggle.dictionary_path).with_context(|| {
        format!(
            "Failed to load dictionary from {}",
            settings.boggle.dictionary_path.display()
        )
    })?;
    let cubes = CubeSet::for_board(settings.boggle.big_board);
    let min_len = settings.boggle.min_word_len;
    let mut rng = StdRng::from_os_rng();

    let mut life_view = GridView::new(settings.life.max_age);
    let mut maze_view = GridView::new(1);
    let mut word_view = GridView::new(1);

    let mut life = LifeSession::new(initial_board(&settings)?, stepper(&settings, 0), settings.life_interval_secs());

    let strategies = MergeStrategy::all();
    let mut builder = MazeBuilder::default();
    let mut maze = MazeSession::new(builder, settings.maze.dimension, &mut rng, MAZE_STEP_SECS)?;
    maze.start(&mut maze_view);

    let mut round = WordRound::new(cubes.roll(&mut rng), &dictionary, min_len, &mut word_view);
    let mut typed = String::new();
    let mut message = String::new();

    let pattern_list = presets::all_patterns();
    let mut mode_dropdown = Dropdown::new("Mode", Mode::all().map(|m| m.name()));
    let mut rule_dropdown = Dropdown::new("Rule", all_rules().into_iter().map(|(name, _)| name));
    let mut pattern_dropdown = Dropdown::new("Pattern", pattern_list.iter().map(|p| p.name));
    let mut strategy_dropdown = Dropdown::new("Merge Strategy", strategies.iter().map(|s| s.name()));

    loop {
        let mouse_pos = mouse_position();

        // Update UI positions for responsiveness
        let px = ui::panel_x();
        mode_dropdown.set_position(px, 20.0);
        rule_dropdown.set_position(px, 75.0);
        pattern_dropdown.set_position(px, 130.0);
        strategy_dropdown.set_position(px, 75.0);

        // A click that lands in an open menu must not also hit a button
        let menu_was_open = [&mode_dropdown, &rule_dropdown, &pattern_dropdown, &strategy_dropdown]
            .iter()
            .any(|dd| dd.is_open());

        mode_dropdown.update(mouse_pos);
        let mode = Mode::all()[mode_dropdown.selected()];
        if mode_dropdown.is_open() {
            rule_dropdown.close();
            pattern_dropdown.close();
            strategy_dropdown.close();
        }

        match mode {
            Mode::Life => {
                if rule_dropdown.update(mouse_pos) {
                    let (_, rule) = all_rules().swap_remove(rule_dropdown.selected());
                    life.set_rule(rule);
                }
                if rule_dropdown.is_open() {
                    pattern_dropdown.close();
                }
                if pattern_dropdown.update(mouse_pos) {
                    let board = centered(&pattern_list[pattern_dropdown.selected()]);
                    life = LifeSession::new(board, stepper(&settings, rule_dropdown.selected()), life.interval);
                }
            }
            Mode::Maze => {
                if strategy_dropdown.update(mouse_pos) {
                    builder = MazeBuilder::new(strategies[strategy_dropdown.selected()]);
                    maze = MazeSession::new(builder, settings.maze.dimension, &mut rng, maze.interval)?;
                    maze.start(&mut maze_view);
                }
            }
            Mode::Boggle => input::read_typed(&mut typed),
        }

        let buttons = ui::create_buttons(mode, BUTTONS_TOP);
        let mut actions = input::keyboard_actions(mode);
        if !menu_was_open {
            actions.extend(input::button_actions(&buttons, mouse_pos));
        }

        for action in actions {
            match (mode, action) {
                (Mode::Life, Action::ToggleRunning) => life = life.toggle_running(),
                (Mode::Life, Action::Step) => life = life.step(),
                (Mode::Life, Action::Reset) => life = life.reset(),
                (Mode::Life, Action::Randomize) => life = life.randomize(&mut rng),
                (Mode::Life, Action::Faster) => life = life.adjust_speed(0.8),
                (Mode::Life, Action::Slower) => life = life.adjust_speed(1.25),
                (Mode::Maze, Action::ToggleRunning) => maze.is_running = !maze.is_running,
                (Mode::Maze, Action::FinishMaze) => maze.finish(&mut maze_view),
                (Mode::Maze, Action::NewMaze) => {
                    maze = MazeSession::new(builder, settings.maze.dimension, &mut rng, maze.interval)?;
                    maze.start(&mut maze_view);
                }
                (Mode::Maze, Action::Faster) => maze.interval *= 0.5,
                (Mode::Maze, Action::Slower) => maze.interval = (maze.interval * 2.0).clamp(0.005, 1.0),
                (Mode::Boggle, Action::Submit) if !typed.is_empty() => {
                    let outcome = round.guess(&typed, &mut word_view);
                    message = format!("{}: {}", typed, outcome.message());
                    typed.clear();
                }
                (Mode::Boggle, Action::EndTurn) => {
                    let found = round.computer_turn(&mut word_view).len();
                    message = format!("Computer found {} words", found);
                }
                (Mode::Boggle, Action::NewBoard) => {
                    round = WordRound::new(cubes.roll(&mut rng), &dictionary, min_len, &mut word_view);
                    typed.clear();
                    message.clear();
                }
                _ => {}
            }
        }

        // Advance only the visible engine
        let dt = get_frame_time();
        match mode {
            Mode::Life => {
                life = life.tick(dt);
                life.publish(&mut life_view);
            }
            Mode::Maze => maze.tick(dt, &mut maze_view),
            Mode::Boggle => {}
        }

        clear_background(BLACK);
        let info = Color::from_rgba(180, 180, 180, 255);
        let mut lines: Vec<(String, Color)> = Vec::new();
        let dropdowns: Vec<&Dropdown> = match mode {
            Mode::Life => {
                life_view.draw_ages();
                let status = if life.stabilized {
                    "Stabilized"
                } else if life.is_running {
                    "Running"
                } else {
                    "Paused"
                };
                lines.push((format!("Generation: {}", life.generation), WHITE));
                lines.push((format!("Population: {}", life.population()), info));
                lines.push((format!("Rule: {}", life.stepper().rule().name()), info));
                lines.push((format!("Interval: {:.0} ms", life.interval * 1000.0), info));
                lines.push((status.to_string(), status_color(life.is_running)));
                lines.push(("Space play, N step".to_string(), GRAY));
                lines.push(("R reset, G random".to_string(), GRAY));
                vec![&mode_dropdown, &rule_dropdown, &pattern_dropdown]
            }
            Mode::Maze => {
                maze_view.draw_walls();
                let (rows, cols) = maze.maze().dimensions();
                lines.push((format!("Size: {}x{}", rows, cols), WHITE));
                lines.push((format!("Strategy: {}", builder.strategy().name()), info));
                lines.push((format!("Removals left: {}", maze.pending()), info));
                lines.push((format!("Passages: {}", maze.maze().removed().len()), info));
                lines.push((
                    if maze.is_finished() { "Done".to_string() } else { "Carving".to_string() },
                    status_color(maze.is_finished()),
                ));
                lines.push(("Space pause, N new".to_string(), GRAY));
                vec![&mode_dropdown, &strategy_dropdown]
            }
            Mode::Boggle => {
                word_view.draw_letters();
                lines.push((format!("> {}_", typed), WHITE));
                lines.push((message.clone(), status_color(true)));
                lines.push((format!("You: {} pts", round.player_score), WHITE));
                lines.push((format!("Computer: {} pts", round.computer_score), WHITE));
                lines.extend(round.player_words().iter().rev().take(8).map(|w| (w.clone(), info)));
                if round.is_over() {
                    lines.push(("Computer:".to_string(), WHITE));
                    lines.extend(round.computer_words().iter().take(12).map(|f| (f.word.clone(), GRAY)));
                }
                vec![&mode_dropdown]
            }
        };

        let lines_top = BUTTONS_TOP + buttons.len() as f32 * (ui::BUTTON_HEIGHT + 8.0) + 20.0;
        rendering::draw_controls(&buttons, &dropdowns, &lines, lines_top, mouse_pos);

        next_frame().await;
    }
}
