use crate::core::highlight::{self, escape_html, HtmlMarkup, PlainMarkup};
use crate::core::labels::Language;
use crate::core::matcher::{Match, SearchOutcome};
use crate::core::sentence::display_sentence;
use crate::domain::model::Text;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    #[default]
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub language: Language,
    pub context_window: Option<usize>,
    pub highlight_class: String,
    /// Markers around highlights in text output.
    pub text_markers: PlainMarkup,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            context_window: None,
            highlight_class: "highlight".to_string(),
            text_markers: PlainMarkup::default(),
        }
    }
}

/// Matches of one text, in token order.
#[derive(Debug, Clone, PartialEq)]
pub struct TextGroup<'c> {
    pub text: &'c Text,
    pub matches: Vec<Match<'c>>,
}

impl TextGroup<'_> {
    pub fn token_indices(&self) -> Vec<usize> {
        self.matches.iter().map(|m| m.token_index).collect()
    }

    pub fn forms(&self) -> Vec<&str> {
        let mut forms: Vec<&str> = self.matches.iter().map(|m| m.token.form.as_str()).collect();
        forms.dedup();
        forms
    }
}

/// Groups consecutive matches of the same text, keeping first-match order.
pub fn group_by_text<'c>(matches: &[Match<'c>]) -> Vec<TextGroup<'c>> {
    let mut groups: Vec<TextGroup<'c>> = Vec::new();
    for m in matches {
        match groups.last_mut() {
            Some(group) if std::ptr::eq(group.text, m.text) => group.matches.push(*m),
            _ => groups.push(TextGroup {
                text: m.text,
                matches: vec![*m],
            }),
        }
    }
    groups
}

/// Output of one search: the count line and the result list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedResults {
    pub stats: String,
    pub body: String,
}

pub trait ResultRenderer: Send + Sync {
    fn render(&self, outcome: &SearchOutcome<'_>) -> RenderedResults;

    /// Status line shown while or after the corpus loads.
    fn status(&self, message: &str, is_error: bool) -> String;
}

pub fn renderer_for(format: OutputFormat, options: RenderOptions) -> Box<dyn ResultRenderer> {
    match format {
        OutputFormat::Html => Box::new(HtmlRenderer::new(options)),
        OutputFormat::Text => Box::new(TextRenderer::new(options)),
    }
}

fn stats_line(language: Language, outcome: &SearchOutcome<'_>) -> String {
    match outcome {
        SearchOutcome::Prompt => String::new(),
        _ => format!("{}: {}", language.messages().results_found, outcome.count()),
    }
}

pub struct HtmlRenderer {
    options: RenderOptions,
    markup: HtmlMarkup,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        let markup = HtmlMarkup::new(&options.highlight_class);
        Self { options, markup }
    }

    fn render_group(&self, out: &mut String, group: &TextGroup<'_>) {
        let msg = self.options.language.messages();
        let sentence = display_sentence(
            group.text,
            &group.token_indices(),
            self.options.context_window,
        );

        let _ = writeln!(out, "<div class=\"result-item\">");
        let _ = writeln!(
            out,
            "  <h3>{} (ID: {})</h3>",
            escape_html(&group.text.title),
            escape_html(&group.text.id.to_string())
        );
        let _ = writeln!(
            out,
            "  <div class=\"sentence\">{}</div>",
            highlight::highlight(&sentence, &group.forms(), &self.options.text_markers)
        );
        for m in &group.matches {
            let token = m.token;
            let _ = writeln!(out, "  <div class=\"details\">");
            let _ = writeln!(out, "    <span>{}: <b>{}</b></span>", msg.word, escape_html(&token.form));
            let _ = writeln!(out, "    <span>{}: {}</span>", msg.lemma, escape_html(&token.lemma));
            let _ = writeln!(
                out,
                "    <span>{}: {}</span>",
                msg.pos,
                escape_html(self.options.language.pos_label(&token.pos))
            );
            let _ = writeln!(out, "    <span>{}: {}</span>", msg.analysis, escape_html(&token.ana));
            let _ = writeln!(out, "  </div>");
        }
        let _ = writeln!(out, "</div>");
    }
}

impl ResultRenderer for HtmlRenderer {
    fn render(&self, outcome: &SearchOutcome<'_>) -> RenderedResults {
        let msg = self.options.language.messages();
        let body = match outcome {
            SearchOutcome::Prompt => format!("<div class=\"empty\">{}</div>", msg.prompt),
            SearchOutcome::NoResults => format!("<div class=\"empty\">{}</div>", msg.no_results),
            SearchOutcome::Found(matches) => {
                let mut out = String::new();
                for group in group_by_text(matches) {
                    self.render_group(&mut out, &group);
                }
                out
            }
        };

        RenderedResults {
            stats: stats_line(self.options.language, outcome),
            body,
        }
    }

    fn status(&self, message: &str, is_error: bool) -> String {
        if is_error {
            format!("<div class=\"error\">{}</div>", escape_html(message))
        } else {
            escape_html(message).into_owned()
        }
    }
}

pub struct TextRenderer {
    options: RenderOptions,
}

impl TextRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn render_group(&self, out: &mut String, group: &TextGroup<'_>) {
        let msg = self.options.language.messages();
        let sentence = display_sentence(
            group.text,
            &group.token_indices(),
            self.options.context_window,
        );

        let _ = writeln!(out, "{} (ID: {})", group.text.title, group.text.id);
        let _ = writeln!(
            out,
            "  {}",
            highlight::highlight(&sentence, &group.forms(), &self.options.text_markers)
        );
        for m in &group.matches {
            let token = m.token;
            let _ = writeln!(
                out,
                "    {}: {} | {}: {} | {}: {} | {}: {}",
                msg.word,
                token.form,
                msg.lemma,
                token.lemma,
                msg.pos,
                self.options.language.pos_label(&token.pos),
                msg.analysis,
                token.ana
            );
        }
    }
}

impl ResultRenderer for TextRenderer {
    fn render(&self, outcome: &SearchOutcome<'_>) -> RenderedResults {
        let msg = self.options.language.messages();
        let body = match outcome {
            SearchOutcome::Prompt => msg.prompt.to_string(),
            SearchOutcome::NoResults => msg.no_results.to_string(),
            SearchOutcome::Found(matches) => {
                let groups = group_by_text(matches);
                let mut out = String::new();
                for (i, group) in groups.iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    self.render_group(&mut out, group);
                }
                out
            }
        };

        RenderedResults {
            stats: stats_line(self.options.language, outcome),
            body,
        }
    }

    fn status(&self, message: &str, is_error: bool) -> String {
        if is_error {
            format!("! {}", message)
        } else {
            message.to_string()
        }
    }
}
