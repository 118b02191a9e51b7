use std::io::stdout;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};

use crate::{
    model::champion::Champion,
    service::{
        catalog::CatalogService,
        data_manager::{DataManager, DataRetrievalError},
        lookup::ChampionLookup,
    },
    ui::{views::*, Controller, RenderContext},
};

use super::ReplError;

/// The champion document backs the lookup and catalog services. A failed
/// fetch must not take the REPL down: the other components keep working on
/// empty data and the menu shows the cause until a refresh succeeds.
fn champion_sources(fetched: Result<&Vec<Champion>, DataRetrievalError>) -> (&[Champion], Option<String>) {
    match fetched {
        Ok(champions) => (champions, None),
        Err(err) => (&[], Some(format!("Champion data unavailable: {}", err))),
    }
}

type DirectFactory = fn(&Controller) -> Box<dyn RenderableView>;
type PromptFactory = fn(&Controller, &str) -> Box<dyn RenderableView>;

enum EntryAction {
    Direct(DirectFactory),
    Prompt { label: &'static str, factory: PromptFactory },
}

enum AppState {
    Menu,
    Prompting { entry: usize, buffer: String },
    ViewingOutput(Box<dyn RenderableView>),
}

struct MenuEntry {
    description: &'static str,
    action: Option<EntryAction>,
}

struct App {
    menu_entries: Vec<MenuEntry>,
    selected: usize,
    should_quit: bool,
    should_refresh: bool,
    state: AppState,
    scroll_offset: u16,
}

impl App {
    fn new() -> Self {
        let menu_entries = App::get_menu_entries();
        let selected = menu_entries.iter().position(|e| e.action.is_some()).unwrap_or(0);
        Self {
            menu_entries,
            selected,
            should_quit: false,
            should_refresh: false,
            state: AppState::Menu,
            scroll_offset: 0,
        }
    }

    fn is_in_menu(&self) -> bool {
        matches!(self.state, AppState::Menu)
    }

    fn next(&mut self) {
        match &self.state {
            AppState::Menu => {
                if self.menu_entries.is_empty() {
                    return;
                }
                let len = self.menu_entries.len();
                let mut i = self.selected;
                loop {
                    i = (i + 1) % len;
                    if self.menu_entries[i].action.is_some() {
                        self.selected = i;
                        break;
                    }
                    if i == self.selected {
                        break; // no selectable entries
                    }
                }
            }
            AppState::ViewingOutput(_) => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
            }
            AppState::Prompting { .. } => {}
        }
    }

    fn previous(&mut self) {
        match &self.state {
            AppState::Menu => {
                if self.menu_entries.is_empty() {
                    return;
                }
                let len = self.menu_entries.len();
                let mut i = self.selected;
                loop {
                    i = if i == 0 { len - 1 } else { i - 1 };
                    if self.menu_entries[i].action.is_some() {
                        self.selected = i;
                        break;
                    }
                    if i == self.selected {
                        break; // no selectable entries
                    }
                }
            }
            AppState::ViewingOutput(_) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            AppState::Prompting { .. } => {}
        }
    }

    fn page_down(&mut self, amount: u16) {
        if matches!(self.state, AppState::ViewingOutput(_)) {
            self.scroll_offset = self.scroll_offset.saturating_add(amount);
        }
    }

    fn page_up(&mut self, amount: u16) {
        if matches!(self.state, AppState::ViewingOutput(_)) {
            self.scroll_offset = self.scroll_offset.saturating_sub(amount);
        }
    }

    fn render_menu(&self, frame: &mut Frame, area: Rect, data_error: Option<&str>) {
        // Warning strip (on failed data fetch), main list area, footer
        let warning_height = if data_error.is_some() { 2 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(warning_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        if let Some(message) = data_error {
            let warning = Paragraph::new(format!("[!] {} Press (r) to retry.", message))
                .style(Style::default().fg(Color::Red));
            frame.render_widget(warning, chunks[0]);
        }

        // Build list items; headers (action == None) are styled and non-selectable.
        let mut items: Vec<ListItem> = Vec::with_capacity(self.menu_entries.len());
        for (i, entry) in self.menu_entries.iter().enumerate() {
            if entry.action.is_none() {
                // Group header - cyan bold
                items.push(
                    ListItem::new(format!("━━ {} ━━", entry.description))
                        .style(Style::default().fg(Color::LightCyan).add_modifier(Modifier::BOLD)),
                );
            } else {
                // Regular menu item - subtle indicator for selected item
                let prefix = if i == self.selected { "  ► " } else { "    " };
                items.push(ListItem::new(format!("{}{}", prefix, entry.description)));
            }
        }

        let mut list_state = ListState::default();
        let sel = if self
            .menu_entries
            .get(self.selected)
            .map(|e| e.action.is_some())
            .unwrap_or(false)
        {
            Some(self.selected)
        } else {
            self.menu_entries.iter().position(|e| e.action.is_some())
        };
        list_state.select(sel);

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .padding(ratatui::widgets::Padding::uniform(1))
                    .title("Commands (↑/↓ to navigate, Enter to select)")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
            .highlight_symbol("");

        frame.render_stateful_widget(list, chunks[1], &mut list_state);

        let footer = Paragraph::new("Refresh data: (r)    Quit: (q)")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::NONE));
        frame.render_widget(footer, chunks[2]);
    }

    fn render_prompt(&self, frame: &mut Frame, area: Rect, entry: usize, buffer: &str) {
        let label = match &self.menu_entries[entry].action {
            Some(EntryAction::Prompt { label, .. }) => label,
            _ => "Input",
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let input = Paragraph::new(format!("{}▏", buffer)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!("{} (Enter to submit, Esc to cancel)", label))
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(input, chunks[0]);
    }

    fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
        manager: &mut DataManager,
    ) -> Result<(), ReplError> {
        loop {
            let (champions, data_error) = champion_sources(manager.get_champions());
            let lookup = ChampionLookup::new(champions);
            let catalog = CatalogService::new(champions);

            loop {
                let key_hint = match manager.has_api_key() {
                    true => " Riot API key: configured",
                    false => " Riot API key: missing (match lookups disabled)",
                };

                terminal.draw(|f| {
                    let chunks = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([Constraint::Length(3), Constraint::Min(0)])
                        .split(f.size());

                    let title = Paragraph::new(key_hint)
                        .style(Style::default().add_modifier(Modifier::BOLD))
                        .block(
                            Block::default()
                                .borders(Borders::ALL)
                                .border_style(Style::default().fg(Color::Cyan))
                                .title("RiftRewind - LoL Match & Champion Explorer")
                                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                        );
                    f.render_widget(title, chunks[0]);

                    match &self.state {
                        AppState::Menu => {
                            self.render_menu(f, chunks[1], data_error.as_deref());
                        }
                        AppState::Prompting { entry, buffer } => {
                            self.render_prompt(f, chunks[1], *entry, buffer);
                        }
                        AppState::ViewingOutput(view) => {
                            let block = Block::default()
                                .borders(Borders::ALL)
                                .padding(ratatui::widgets::Padding::horizontal(1))
                                .title(format!(
                                    "{} (↑/↓ or PgUp/PgDown to scroll, Esc/q to return)",
                                    view.title()
                                ))
                                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                                .border_style(Style::default().fg(Color::Cyan));

                            let rc = RenderContext {
                                frame: f,
                                area: chunks[1],
                                scroll_offset: self.scroll_offset,
                                block,
                            };
                            let _ = view.render(rc);
                        }
                    }
                })?;

                if event::poll(std::time::Duration::from_millis(100))? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }

                        // Prompt input captures every key first
                        if let AppState::Prompting { entry, buffer } = &mut self.state {
                            match key.code {
                                KeyCode::Enter => {
                                    let ctrl = Controller {
                                        manager,
                                        lookup: &lookup,
                                        catalog: &catalog,
                                    };
                                    if let Some(EntryAction::Prompt { factory, .. }) =
                                        &self.menu_entries[*entry].action
                                    {
                                        let view = factory(&ctrl, buffer.as_str());
                                        terminal.clear()?;
                                        self.state = AppState::ViewingOutput(view);
                                        self.scroll_offset = 0;
                                    }
                                }
                                KeyCode::Esc => {
                                    self.state = AppState::Menu;
                                }
                                KeyCode::Backspace => {
                                    buffer.pop();
                                }
                                KeyCode::Char(c) => {
                                    buffer.push(c);
                                }
                                _ => {}
                            }
                            continue;
                        }

                        match key.code {
                            KeyCode::Char('q') if self.is_in_menu() => {
                                self.should_quit = true;
                                break;
                            }
                            KeyCode::Char('r') if self.is_in_menu() => {
                                self.should_refresh = true;
                                break;
                            }
                            KeyCode::Up => self.previous(),
                            KeyCode::Down => self.next(),
                            KeyCode::PageUp => self.page_up(10),
                            KeyCode::PageDown => self.page_down(10),
                            KeyCode::Esc | KeyCode::Char('q') if !self.is_in_menu() => {
                                self.state = AppState::Menu;
                                self.scroll_offset = 0;
                            }
                            KeyCode::Enter if self.is_in_menu() => {
                                match &self.menu_entries[self.selected].action {
                                    Some(EntryAction::Direct(factory)) => {
                                        let ctrl = Controller {
                                            manager,
                                            lookup: &lookup,
                                            catalog: &catalog,
                                        };
                                        let view = factory(&ctrl);

                                        terminal.clear()?;
                                        self.state = AppState::ViewingOutput(view);
                                        self.scroll_offset = 0;
                                    }
                                    Some(EntryAction::Prompt { .. }) => {
                                        self.state = AppState::Prompting {
                                            entry: self.selected,
                                            buffer: String::new(),
                                        };
                                    }
                                    None => {}
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }

            if self.should_refresh {
                self.should_refresh = false;
                manager.refresh();
            }
        }
    }

    fn get_menu_entries() -> Vec<MenuEntry> {
        macro_rules! menu_entry {
            (group: $desc:expr) => {
                MenuEntry {
                    description: $desc,
                    action: None,
                }
            };
            (item: $desc:expr, $view:ty) => {
                MenuEntry {
                    description: $desc,
                    action: Some(EntryAction::Direct(|ctrl| Box::new(<$view>::new(ctrl)))),
                }
            };
            (prompt: $desc:expr, $label:expr, $view:ty) => {
                MenuEntry {
                    description: $desc,
                    action: Some(EntryAction::Prompt {
                        label: $label,
                        factory: |ctrl, input| Box::new(<$view>::new(ctrl, input)),
                    }),
                }
            };
        }

        vec![
            // Champions
            menu_entry!(group: "Champions"),
            menu_entry!(item: "Browse All Champions", BrowseChampionsView),
            menu_entry!(prompt: "Search Champions", "Search champions", SearchChampionsView),
            menu_entry!(prompt: "Filter by Role", "Role (Fighter/Tank/Mage/Assassin/Marksman/Support)", RoleFilterView),
            menu_entry!(prompt: "Champion Details", "Champion name", ChampionDetailView),
            menu_entry!(prompt: "AI Champion Analysis", "Champion name", ChampionAnalysisView),
            // Matches
            menu_entry!(group: "Matches"),
            menu_entry!(prompt: "Match Lookup", "Match ID (e.g. EUN1_3849902044)", MatchLookupView),
            menu_entry!(prompt: "AI Match Analysis", "Match ID (e.g. EUN1_3849902044)", MatchAnalysisView),
            // Video
            menu_entry!(group: "Video"),
            menu_entry!(prompt: "Analyze Video File", "Path to video file", VideoAnalysisView),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::gameapi::client::RequestError;
    use ratatui::backend::TestBackend;

    #[test]
    fn failed_champion_fetch_degrades_to_empty_services() {
        let fetched = Err(DataRetrievalError::ClientFailed(RequestError::InvalidStatus(503)));
        let (champions, data_error) = champion_sources(fetched);

        assert!(champions.is_empty());
        let message = data_error.unwrap();
        assert!(message.contains("Champion data unavailable"));
        assert!(message.contains("HTTP 503"));

        // The other components stay reachable on the empty roster
        assert_eq!(CatalogService::new(champions).total(), 0);
        assert!(ChampionLookup::new(champions).find("Zed").is_err());
    }

    #[test]
    fn successful_champion_fetch_carries_no_error() {
        let champions = Vec::new();
        let (slice, data_error) = champion_sources(Ok(&champions));
        assert_eq!(slice.len(), champions.len());
        assert!(data_error.is_none());
    }

    #[test]
    fn menu_renders_data_error_inline() {
        let backend = TestBackend::new(90, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = App::new();

        terminal
            .draw(|f| app.render_menu(f, f.size(), Some("Champion data unavailable: network down.")))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("Champion data unavailable: network down."));
        assert!(content.contains("Press (r) to retry."));
        assert!(content.contains("Browse All Champions"));
    }
}

pub fn run(mut manager: DataManager) -> Result<(), ReplError> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = app.run(&mut terminal, &mut manager);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }

    result
}
