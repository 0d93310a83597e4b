use std::io::{self, Write};
use std::process::ExitCode;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::api::QueryService;
use crate::output::{Printer, Spinner};
use crate::page::Page;

/// How a single submit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Skipped,
    Answered,
    Failed,
}

impl Submitted {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Submitted::Answered => ExitCode::SUCCESS,
            Submitted::Failed => ExitCode::from(1),
            Submitted::Skipped => ExitCode::from(2),
        }
    }
}

pub struct App<S, W: Write> {
    service: S,
    printer: Printer<W>,
    page: Page,
    json: bool,
    spinner: bool,
}

impl<S: QueryService, W: Write> App<S, W> {
    pub fn new(service: S, printer: Printer<W>, json: bool) -> Self {
        Self {
            service,
            printer,
            page: Page::new(),
            json,
            spinner: true,
        }
    }

    /// Render the loading state into the printer instead of a terminal spinner.
    pub fn without_spinner(mut self) -> Self {
        self.spinner = false;
        self
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn into_printer(self) -> Printer<W> {
        self.printer
    }

    pub async fn ask(&mut self, question: &str) -> io::Result<Submitted> {
        self.page.set_query(question);
        let Some(query) = self.page.begin_submit() else {
            tracing::debug!("blank query, nothing sent");
            return Ok(Submitted::Skipped);
        };

        let outcome = if self.spinner {
            let spinner = Spinner::start();
            let outcome = self.service.query_laws(&query).await;
            spinner.stop();
            outcome
        } else {
            self.printer.page(&self.page.view())?;
            self.service.query_laws(&query).await
        };
        self.page.finish_submit(outcome);

        let failed = !self.page.error().is_empty();
        match self.page.result() {
            Some(result) if self.json && !failed => self.printer.json(result)?,
            _ => self.printer.page(&self.page.view())?,
        }

        Ok(if failed {
            Submitted::Failed
        } else {
            Submitted::Answered
        })
    }

    /// One question per line until EOF or `exit`/`quit`.
    pub async fn interactive<R>(&mut self, input: R) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.printer.banner()?;
        let mut lines = input.lines();
        loop {
            self.printer.prompt(self.page.search_label())?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if matches!(line.trim(), "exit" | "quit") {
                break;
            }
            self.ask(&line).await?;
            self.printer.blank_line()?;
        }
        Ok(())
    }
}
