use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ledger::Ledger;
use crate::ui::app::{App, InputMode};
use crate::ui::commands;
use crate::ui::render::CHROME_ROWS;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(ledger: &mut Ledger) -> Result<()> {
    let mut app = App::new();
    app.refresh(ledger);
    tracing::info!(records = ledger.len(), "starting tui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, ledger);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = ?e, "tui exited with error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ledger: &mut Ledger,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(CHROME_ROWS) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, ledger),
                InputMode::Command => handle_command_input(key, app, ledger)?,
                InputMode::Form => handle_form_input(key, app, ledger),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    let page = app.visible_rows.max(1);
    let len = app.view.len();
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..page / 2 {
                scroll_down(&mut app.transaction_index, &mut app.transaction_scroll, len, page);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..page / 2 {
                scroll_up(&mut app.transaction_index, &mut app.transaction_scroll);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            scroll_down(&mut app.transaction_index, &mut app.transaction_scroll, len, page);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            scroll_up(&mut app.transaction_index, &mut app.transaction_scroll);
        }
        KeyCode::Char('g') => scroll_to_top(&mut app.transaction_index, &mut app.transaction_scroll),
        KeyCode::Char('G') => {
            scroll_to_bottom(&mut app.transaction_index, &mut app.transaction_scroll, len, page);
        }
        KeyCode::Char('a') => app.open_new_form(),
        KeyCode::Char('e') | KeyCode::Enter => match app.selected().cloned() {
            Some(txn) => app.open_edit_form(&txn),
            None => app.set_status("Nothing selected"),
        },
        KeyCode::Char('D') | KeyCode::Delete => app.delete_selected(ledger),
        KeyCode::Char('t') => app.cycle_type_filter(ledger),
        KeyCode::Char('c') => app.cycle_category_filter(ledger),
        KeyCode::Char('x') => app.clear_filters(ledger),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, ledger)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_form_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Enter => {
            app.submit_form(ledger);
            return;
        }
        KeyCode::Esc => {
            app.close_form();
            app.set_status("Cancelled");
            return;
        }
        _ => {}
    }

    let Some(form) = app.form.as_mut() else {
        app.input_mode = InputMode::Normal;
        return;
    };
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Left => form.cycle_choice(-1),
        KeyCode::Right => form.cycle_choice(1),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => form.input_char(c),
        _ => {}
    }
}
