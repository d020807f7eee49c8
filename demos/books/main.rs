//! Paged books list demo.
//!
//! An in-memory repository of 30 books is served 20 at a time with a
//! simulated two-second latency, and every third request fails. Scroll to
//! the bottom with `j`/`↓` to prefetch the next page, press `r` to retry
//! after a failure, `q` to quit.

use bubbletea_paging::prelude::*;
use bubbletea_rs::{batch, quit, tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, Program};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

const PAGE_SIZE: usize = 20;
const VISIBLE_ROWS: usize = 8;
const FETCH_DELAY: Duration = Duration::from_secs(2);

/// Result of one simulated fetch; `None` models a failed request.
#[derive(Debug, Clone)]
struct PageMsg(Option<Vec<DefaultItem>>);

struct BooksRepository {
    books: Vec<DefaultItem>,
    requests: usize,
}

impl BooksRepository {
    fn new() -> Self {
        let books = (0..30)
            .map(|i| DefaultItem::new(&format!("Book {i}"), &format!("Author {i}")))
            .collect();
        Self { books, requests: 0 }
    }

    /// Serves one window of books; every third request fails.
    fn load(&mut self, offset: usize, count: usize) -> Option<Vec<DefaultItem>> {
        self.requests += 1;
        if self.requests % 3 == 0 {
            return None;
        }
        let start = offset.min(self.books.len());
        let end = (offset + count).min(self.books.len());
        Some(self.books[start..end].to_vec())
    }
}

struct App {
    list: PagedList<DefaultItem>,
    delegate: DefaultDelegate,
    progress: ProgressFooter,
    error: ErrorFooter,
    repo: BooksRepository,
    requests: Receiver<(usize, usize)>,
    cursor: usize,
    top: usize,
}

impl App {
    /// Turns windows requested by the controller into delayed fetch
    /// commands, plus a footer tick to start the progress animation.
    fn drain_requests(&mut self) -> Option<Cmd> {
        let mut cmds = Vec::new();
        while let Ok((offset, count)) = self.requests.try_recv() {
            let result = self.repo.load(offset, count);
            cmds.push(tick(FETCH_DELAY, move |_| {
                Box::new(PageMsg(result.clone())) as Msg
            }));
            cmds.push(self.progress.tick());
        }
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(batch(cmds)),
        }
    }

    fn scroll_to(&mut self, cursor: usize, delta: i32) {
        self.cursor = cursor;
        if self.cursor >= self.top + VISIBLE_ROWS {
            self.top = self.cursor + 1 - VISIBLE_ROWS;
        } else if self.cursor < self.top {
            self.top = self.cursor;
        }

        let last_visible = (self.top + VISIBLE_ROWS - 1).min(self.list.item_count().saturating_sub(1));
        let scroll: Msg = Box::new(ScrollMsg {
            total_item_count: self.list.item_count(),
            last_visible_index: last_visible,
            vertical_delta: delta,
        });
        self.list.update(&scroll);
    }
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let config = PagingConfig::new()
            .with_page_size(PAGE_SIZE)
            .with_load_threshold(2);

        let (sender, requests) = channel();
        let mut list = PagedList::new(Vec::new(), config);
        list.set_on_load_window(move |offset, count| {
            let _ = sender.send((offset, count));
        });

        let mut delegate = DefaultDelegate::new().with_width(40);
        delegate.show_description = false;

        let mut app = Self {
            list,
            delegate,
            progress: ProgressFooter::new(),
            error: ErrorFooter::new(),
            repo: BooksRepository::new(),
            requests,
            cursor: 0,
            top: 0,
        };

        app.list.request_more();
        let cmd = app.drain_requests();
        (app, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            match key.key {
                KeyCode::Char('q') | KeyCode::Esc => return Some(quit()),
                KeyCode::Down | KeyCode::Char('j') => {
                    let max = self.list.item_count().saturating_sub(1);
                    let cursor = (self.cursor + 1).min(max);
                    self.scroll_to(cursor, 1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    let cursor = self.cursor.saturating_sub(1);
                    self.scroll_to(cursor, -1);
                }
                _ => {}
            }
            let _ = self.error.update(&msg, &mut self.list);
        }

        if msg.downcast_ref::<FooterTickMsg>().is_some() {
            if let Some(cmd) = self.progress.update(&msg, &mut self.list) {
                return Some(cmd);
            }
        }

        if let Some(PageMsg(result)) = msg.downcast_ref::<PageMsg>() {
            match result {
                Some(items) => self.list.append(items.clone()),
                None => self.list.report_error(),
            }
            self.cursor = self.cursor.min(self.list.item_count().saturating_sub(1));
        }

        // The whole view re-renders every frame; the journal is drained so
        // it doesn't grow without bound.
        let _ = self.list.take_changes();

        self.drain_requests()
    }

    fn view(&self) -> String {
        let title_style = Style::new().foreground(Color::from("#EE6FF8")).bold(true);
        let status_style = Style::new().foreground(Color::from("#777777"));

        let mut lines = vec![title_style.render("Books"), String::new()];

        let count = self.list.item_count();
        for i in self.top..(self.top + VISIBLE_ROWS).min(count) {
            let marker = if i == self.cursor { ">" } else { " " };
            let line = match self.list.slot_at(i) {
                SlotKind::Item => self.delegate.render(&self.list, i, &self.list.items()[i]),
                SlotKind::FooterProgress => {
                    FooterDelegate::<DefaultItem>::render(&self.progress, self.list.state())
                }
                SlotKind::FooterError => {
                    FooterDelegate::<DefaultItem>::render(&self.error, self.list.state())
                }
            };
            lines.push(format!("{marker}{line}"));
        }

        lines.push(String::new());
        lines.push(status_style.render(&format!(
            "{} books · page {} · {:?}",
            self.list.len(),
            self.list.current_page(),
            self.list.state()
        )));
        lines.push(status_style.render("j/k scroll · r retry · q quit"));
        lines.join("\n")
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder().build()?;
    program.run().await?;
    Ok(())
}
