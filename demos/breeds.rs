//! Terminal demo combining the counter and the breed table.
//!
//! Mirrors the original single-page demo: a counter you can bump, a limit
//! selector offering {5, 10, 15} (defaulting to 5), and a table of fetched
//! breeds. Changing the limit only hits the network the first time each
//! value is selected; after that the cached entry is shown.
//!
//! Keys: `i` increments, `a` adds 10, Left/Right change the limit, `q` quits.
//!
//! Run with: `cargo run --example breeds`

use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures::StreamExt;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};
use ratatui::Frame;

use dogdex::prelude::*;

const LIMIT_CHOICES: [u32; 3] = [5, 10, 15];

struct App {
    store: Store,
    selected: usize,
}

impl App {
    fn new(store: Store) -> Self {
        let app = Self { store, selected: 0 };
        app.store.dispatch(Intent::FetchBreeds {
            limit: Some(app.limit()),
        });
        app
    }

    fn limit(&self) -> u32 {
        LIMIT_CHOICES[self.selected]
    }

    fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.store.dispatch(Intent::FetchBreeds {
                limit: Some(self.limit()),
            });
        }
    }

    fn select_next(&mut self) {
        if self.selected + 1 < LIMIT_CHOICES.len() {
            self.selected += 1;
            self.store.dispatch(Intent::FetchBreeds {
                limit: Some(self.limit()),
            });
        }
    }

    fn render(&self, frame: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Counter
                Constraint::Length(3), // Limit selector
                Constraint::Min(1),    // Breed table
            ])
            .split(frame.area());

        let counter = Paragraph::new(format!(
            "count is: {} (i: +1, a: +10, q: quit)",
            self.store.counter().value
        ))
        .block(Block::default().borders(Borders::ALL).title("Counter"));
        frame.render_widget(counter, chunks[0]);

        let selector: Vec<String> = LIMIT_CHOICES
            .iter()
            .enumerate()
            .map(|(index, choice)| {
                if index == self.selected {
                    format!("[{choice}]")
                } else {
                    format!(" {choice} ")
                }
            })
            .collect();
        let selector = Paragraph::new(selector.join(" ")).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Dogs to fetch (Left/Right)"),
        );
        frame.render_widget(selector, chunks[1]);

        self.render_breeds(frame, chunks[2]);
    }

    fn render_breeds(&self, frame: &mut Frame<'_>, area: Rect) {
        match self.store.breeds(Some(self.limit())) {
            QueryState::Uninitialized | QueryState::Loading => {
                let loading = Paragraph::new("Loading breeds...")
                    .block(Block::default().borders(Borders::ALL).title("Breeds"));
                frame.render_widget(loading, area);
            }
            QueryState::Success(breeds) => {
                let title = format!("Breeds (fetched: {})", breeds.len());
                let rows: Vec<Row> = breeds
                    .iter()
                    .map(|breed| Row::new(vec![breed.name.clone(), breed.image.url.clone()]))
                    .collect();
                let table = Table::new(
                    rows,
                    [Constraint::Percentage(30), Constraint::Percentage(70)],
                )
                .header(Row::new(vec!["Name", "Picture"]).style(Style::default().fg(Color::Cyan)))
                .block(Block::default().borders(Borders::ALL).title(title));
                frame.render_widget(table, area);
            }
            QueryState::Error(err) => {
                let error = Paragraph::new(format!("Error loading breeds: {err}"))
                    .style(Style::default().fg(Color::Red))
                    .block(Block::default().borders(Borders::ALL).title("Breeds"));
                frame.render_widget(error, area);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::from_env();
    let mut app = App::new(Store::new(BreedsApi::new(&config)?));

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app).await;
    ratatui::restore();

    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> Result<()> {
    let mut events = EventStream::new();
    // Redraw on a timer as well, so query transitions show up without input.
    let mut tick = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal.draw(|frame| app.render(frame))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        match key.code {
                            KeyCode::Char('q') => break,
                            KeyCode::Char('i') => {
                                app.store.dispatch(Intent::Counter(CounterIntent::Incremented));
                            }
                            KeyCode::Char('a') => {
                                app.store.dispatch(Intent::Counter(CounterIntent::AmountAdded(10)));
                            }
                            KeyCode::Left => app.select_previous(),
                            KeyCode::Right => app.select_next(),
                            _ => {}
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(_)) | None => break,
                }
            }
            _ = tick.tick() => {}
        }
    }

    Ok(())
}
