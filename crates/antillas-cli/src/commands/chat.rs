//! Interactive assistant chat.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::{Context as _, Result};
use antillas_core::Region;
use antillas_core::chat::{ChatSession, QUICK_REQUESTS};
use antillas_core::theme::Palette;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing::info;

use super::context::AppContext;
use super::render::{accent, print_exchange};

const COMMANDS: &[&str] = &["/region", "/switch", "/help", "/quit"];

/// Completes slash commands and quick requests.
#[derive(Clone)]
struct ChatHelper {
    candidates: Vec<String>,
}

impl ChatHelper {
    fn new() -> Self {
        let candidates = COMMANDS
            .iter()
            .chain(QUICK_REQUESTS)
            .map(|candidate| candidate.to_string())
            .collect();
        Self { candidates }
    }
}

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.is_empty() {
            return Ok((0, vec![]));
        }

        let candidates = self
            .candidates
            .iter()
            .filter(|candidate| candidate.to_lowercase().starts_with(&line.to_lowercase()))
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ChatHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ChatHelper {}

/// A parsed line of chat input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Help,
    Switch,
    Region(&'a str),
    Unknown(&'a str),
    Message(&'a str),
    Empty,
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }
    match trimmed.split_once(' ') {
        Some(("/region", rest)) => Input::Region(rest.trim()),
        _ => match trimmed {
            "/quit" | "/exit" => Input::Quit,
            "/help" => Input::Help,
            "/switch" | "/region" => Input::Switch,
            command if command.starts_with('/') => Input::Unknown(command),
            _ => Input::Message(line),
        },
    }
}

/// Accepts a 1-based index into `Region::all()` or a region identifier.
fn parse_region_choice(choice: &str) -> Option<Region> {
    let choice = choice.trim();
    if let Ok(index) = choice.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| Region::all().get(i).copied());
    }
    Region::parse(choice).ok()
}

/// Asks for a region until one is chosen and confirms it in the store.
fn prompt_for_region(
    ctx: &AppContext,
    editor: &mut Editor<ChatHelper, DefaultHistory>,
) -> Result<Option<Region>> {
    println!("{}", "Where are you located?".bold());
    for (i, region) in Region::all().iter().enumerate() {
        println!("  {}. {} {}", i + 1, region.flag(), region.display_name());
    }

    loop {
        match editor.readline("location> ") {
            Ok(line) => match parse_region_choice(&line) {
                Some(region) => {
                    ctx.store.select(region);
                    return Ok(Some(region));
                }
                None => println!("Please choose 1-{} or a region name.", Region::all().len()),
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(None),
            Err(e) => return Err(e).context("Failed to read input"),
        }
    }
}

fn print_welcome(session: &ChatSession, palette: &Palette) {
    for exchange in session.exchanges() {
        print_exchange(exchange, palette);
    }
    if session.shows_quick_requests() {
        println!("{}", "Popular requests:".bold());
        println!("  {}", accent(&QUICK_REQUESTS.join(" | "), palette));
        println!();
    }
}

fn print_help() {
    println!("  /region <name>  switch to another region");
    println!("  /switch         choose a region from the list");
    println!("  /help           show this help");
    println!("  /quit           leave the chat");
    println!();
}

pub async fn run(ctx: &AppContext, region: Option<&str>) -> Result<()> {
    let mut editor: Editor<ChatHelper, DefaultHistory> =
        Editor::new().context("Failed to initialize line editor")?;
    editor.set_helper(Some(ChatHelper::new()));

    let region = match region {
        Some(value) => Region::parse(value)?,
        None if ctx.store.current_selection().is_confirmed => {
            ctx.store.current_selection().selected_region
        }
        None => match prompt_for_region(ctx, &mut editor)? {
            Some(region) => region,
            None => return Ok(()),
        },
    };

    let scheme = ctx.config.default_color_scheme;
    let mut session = ChatSession::new(region);
    let mut palette = Palette::for_region(region, scheme);
    info!(region = %region, "Chat session started");

    println!(
        "{} {}",
        accent("Antillas AI Assistant", palette).bold(),
        "- AI can make mistakes. Verify important information.".dimmed()
    );
    print_welcome(&session, palette);

    loop {
        let line = match editor.readline("you> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        };

        match parse_input(&line) {
            Input::Empty => continue,
            Input::Quit => break,
            Input::Help => print_help(),
            Input::Unknown(command) => {
                println!("{}", format!("Unknown command: {command}").red());
                print_help();
            }
            Input::Region(value) => match ctx.store.select_region(value) {
                Ok(selection) => {
                    session.switch_region(selection.selected_region);
                    palette = Palette::for_region(selection.selected_region, scheme);
                    print_welcome(&session, palette);
                }
                Err(e) => println!("{}", e.to_string().red()),
            },
            Input::Switch => {
                ctx.store.show_selector();
                let Some(region) = prompt_for_region(ctx, &mut editor)? else {
                    break;
                };
                session.switch_region(region);
                palette = Palette::for_region(region, scheme);
                print_welcome(&session, palette);
            }
            Input::Message(text) => {
                let _ = editor.add_history_entry(text);
                println!("{}", "AI is typing...".dimmed());
                tokio::time::sleep(ctx.config.typing_delay()).await;
                if let Some(reply) = session.submit(text) {
                    print_exchange(reply, palette);
                }
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
