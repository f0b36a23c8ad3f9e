use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::event::PopKeyboardEnhancementFlags;
use crossterm::event::PushKeyboardEnhancementFlags;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::supports_keyboard_enhancement;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::ConversationEvent;
use crate::domain::models::Effect;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::ResponderName;
use crate::domain::models::ResponderPrompt;
use crate::domain::models::TextArea;
use crate::domain::services::events::keyboard_enhancement_flags;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;

fn paste_into(textarea: &mut tui_textarea::TextArea, text: &str) {
    for char in text.chars() {
        let key = match char {
            '\n' => Key::Enter,
            '\r' => continue,
            _ => Key::Char(char),
        };

        textarea.input(Input {
            key,
            ctrl: false,
            alt: false,
        });
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut textarea = TextArea::default();
    let loading = Loading::new(app_state.responder_name.indicator_text());

    #[cfg(feature = "dev")]
    {
        paste_into(&mut textarea, "hello, can you help me with something?");
    }

    loop {
        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Min(1), Constraint::Max(4)])
                .split(frame.size());

            if layout[0].width != app_state.last_known_width
                || layout[0].height != app_state.last_known_height
            {
                app_state.set_rect(layout[0]);
            }

            frame.render_widget(
                Paragraph::new(app_state.lines.clone()).scroll((app_state.scroll.position, 0)),
                layout[0],
            );
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                layout[0].inner(&Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut app_state.scroll.scrollbar_state,
            );

            if app_state.conversation.is_busy() {
                loading.render(frame, layout[1]);
            } else {
                frame.render_widget(textarea.widget(), layout[1]);
            }
        })?;

        match events.next().await? {
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardEnter() => {
                let input_str = textarea.lines().join("\n");
                let effects = app_state.apply(ConversationEvent::Submit(input_str));
                if effects.is_empty() {
                    continue;
                }

                textarea = TextArea::default();
                for effect in effects {
                    match effect {
                        Effect::RequestReply(text) => {
                            tx.send(Action::ResponderRequest(ResponderPrompt::new(text)))?;
                        }
                    }
                }
            }
            Event::KeyboardCharInput(input) => {
                if !app_state.conversation.is_busy() {
                    textarea.input(input);
                }
            }
            Event::KeyboardPaste(text) => {
                if !app_state.conversation.is_busy() {
                    paste_into(&mut textarea, &text);
                }
            }
            Event::ResponderMessage(message) => {
                app_state.apply(ConversationEvent::ResponseReceived(message));
            }
            Event::ResponderFailed() => {
                app_state.apply(ConversationEvent::ResponseFailed);
            }
            Event::UIResize() => {
                // Picked up by the size check on the next draw.
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = crossterm::execute!(io::stdout(), PopKeyboardEnhancementFlags);
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let responder_name = ResponderName::parse(Config::get(ConfigKey::Responder))
        .unwrap_or(ResponderName::Keyword);
    let mut app_state = AppState::new(responder_name);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if keyboard_enhanced {
        crossterm::execute!(
            stdout,
            PushKeyboardEnhancementFlags(keyboard_enhancement_flags())
        )?;
    }
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut app_state, tx, rx).await?;

    if keyboard_enhanced {
        crossterm::execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
