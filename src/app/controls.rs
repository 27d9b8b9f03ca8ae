use crate::app::session::SearchSession;
use crate::core::matcher::{PosFilter, SearchQuery};
use crate::core::PartOfSpeech;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// New contents of the query field.
    Query(String),
    Toggle(PartOfSpeech),
    ShowFilters,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let trimmed = line.trim();
        match trimmed {
            ":noun" => Command::Toggle(PartOfSpeech::Noun),
            ":verb" => Command::Toggle(PartOfSpeech::Verb),
            ":adj" | ":adjective" => Command::Toggle(PartOfSpeech::Adjective),
            ":filters" => Command::ShowFilters,
            ":help" => Command::Help,
            ":quit" => Command::Quit,
            _ => Command::Query(line.to_string()),
        }
    }
}

const HELP: &str = "Type a lemma substring to search. \
:noun, :verb and :adj (or :adjective) toggle part-of-speech filters. \
:filters shows them, :help repeats this text and :quit exits.";

/// Query field plus the noun/verb/adjective checkboxes.
#[derive(Debug, Clone, Default)]
pub struct Controls {
    query: String,
    filter: PosFilter,
}

impl Controls {
    pub fn new(query: impl Into<String>, filter: PosFilter) -> Self {
        Self {
            query: query.into(),
            filter,
        }
    }

    pub fn current_query(&self) -> SearchQuery {
        SearchQuery::new(&self.query, self.filter.clone())
    }

    /// Applies one command. Returns true when the results must be recomputed.
    pub fn apply(&mut self, command: &Command) -> bool {
        match command {
            Command::Query(text) => {
                self.query = text.clone();
                true
            }
            Command::Toggle(pos) => {
                let enabled = self.filter.toggle(pos.clone());
                tracing::debug!("Filter '{}' {}", pos, if enabled { "on" } else { "off" });
                true
            }
            Command::ShowFilters | Command::Help | Command::Quit => false,
        }
    }

    pub fn describe_filters(&self) -> String {
        [PartOfSpeech::Noun, PartOfSpeech::Verb, PartOfSpeech::Adjective]
            .iter()
            .map(|pos| {
                let mark = if self.filter.contains(pos) { "x" } else { " " };
                format!("[{}] {}", mark, pos)
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

pub fn write_results<W: Write>(out: &mut W, session: &SearchSession, query: &SearchQuery) -> io::Result<()> {
    let rendered = session.search(query);
    if !rendered.stats.is_empty() {
        writeln!(out, "{}", rendered.stats)?;
    }
    writeln!(out, "{}", rendered.body.trim_end())?;
    out.flush()
}

/// Reads commands line by line; every query or filter change recomputes the
/// whole output.
pub fn run_interactive<R: BufRead, W: Write>(
    session: &SearchSession,
    controls: &mut Controls,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", HELP)?;
    writeln!(out, "{}", controls.describe_filters())?;
    if !controls.current_query().is_empty() {
        write_results(out, session, &controls.current_query())?;
    }
    out.flush()?;

    for line in input.lines() {
        let command = Command::parse(&line?);
        match &command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::ShowFilters => writeln!(out, "{}", controls.describe_filters())?,
            _ => {}
        }
        if controls.apply(&command) {
            write_results(out, session, &controls.current_query())?;
        }
    }
    Ok(())
}
