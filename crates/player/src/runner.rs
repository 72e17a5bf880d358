//! Command-line front end
//!
//! One-shot subcommands operate on the durable saves. `repl` keeps a single
//! process (and so a single session scope) alive, which is what makes
//! browsing mode useful from the terminal.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use levelguide_domain::{PlayerClass, PlayerRace, ProcessedStep};

use crate::config::PlayerConfig;
use crate::infrastructure::platform::create_platform;
use crate::state::{CharacterState, GuideState, GuideStatus, Platform};

/// Leveling guide tracker
#[derive(Parser, Debug)]
#[command(name = "levelguide")]
#[command(author, version, about = "Follow a leveling guide for your character", long_about = None)]
pub struct Cli {
    /// Guide document directory (overrides LEVELGUIDE_GUIDES_DIR)
    #[arg(long = "guides")]
    pub guides_dir: Option<PathBuf>,

    /// Durable storage file (overrides LEVELGUIDE_STORAGE_PATH)
    #[arg(long = "storage")]
    pub storage_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Apply command-line overrides on top of `config`
    pub fn config(&self, config: PlayerConfig) -> PlayerConfig {
        let config = match &self.guides_dir {
            Some(dir) => config.with_guides_dir(dir),
            None => config,
        };
        match &self.storage_path {
            Some(path) => config.with_storage_path(path),
            None => config,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the active character and current step (default)
    Status,
    /// List saved characters
    List,
    /// Create a character and make it active
    New {
        name: String,
        race: PlayerRace,
        class: PlayerClass,
    },
    /// Start an unsaved play-through, kept for this session only
    Browse { race: PlayerRace, class: PlayerClass },
    /// Save the current session under a name
    Save {
        name: String,
        /// Step index to save instead of the current one
        #[arg(long)]
        index: Option<usize>,
    },
    /// Make a saved character active
    Load { name: String },
    /// Delete a saved character
    Delete { name: String },
    /// Forget the active character
    Clear,
    /// List every step of the resolved guide
    Steps,
    /// Mark the current step as completed
    Complete,
    /// Jump to a step by index
    Jump { index: usize },
    /// Read commands from stdin until `quit`
    Repl,
}

/// A line typed at the interactive prompt
#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
struct ReplLine {
    #[command(subcommand)]
    command: Command,
}

pub struct RunnerDeps {
    pub platform: Platform,
}

impl RunnerDeps {
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            platform: create_platform(config),
        }
    }
}

/// Live character and guide state for one process
pub struct Session {
    character: Arc<CharacterState>,
    guide: GuideState,
}

impl Session {
    pub fn new(platform: &Platform) -> Self {
        let character = platform.character_state();
        let guide = platform.guide_state(Arc::clone(&character));
        Self { character, guide }
    }

    pub fn character(&self) -> &CharacterState {
        &self.character
    }

    pub fn guide(&self) -> &GuideState {
        &self.guide
    }

    pub async fn execute(&self, command: &Command, out: &mut impl Write) -> anyhow::Result<()> {
        match command {
            Command::Status => {
                self.guide.sync().await;
                self.write_status(out)?;
            }
            Command::List => {
                let names = self.character.character_names();
                if names.is_empty() {
                    writeln!(out, "No saved characters")?;
                }
                let active = self.character.char_name();
                for name in names {
                    let marker = if active.as_deref() == Some(name.as_str()) {
                        '*'
                    } else {
                        ' '
                    };
                    writeln!(out, "{marker} {name}")?;
                }
            }
            Command::New { name, race, class } => {
                self.character.create_character(name, *race, *class)?;
                writeln!(out, "Created {} ({} {})", name.trim(), race.display_name(), class)?;
            }
            Command::Browse { race, class } => {
                self.character.start_browsing(*race, *class);
                writeln!(out, "Browsing as {} {}", race.display_name(), class)?;
            }
            Command::Save { name, index } => {
                self.guide.sync().await;
                // Browsing progress only lives in the guide until it is saved
                let index = index.or_else(|| {
                    (self.guide.status() == GuideStatus::Ready)
                        .then(|| self.guide.current_step_index())
                });
                self.character.save_character(name, index)?;
                writeln!(out, "Saved {}", name.trim())?;
            }
            Command::Load { name } => {
                self.character
                    .load_character(name)
                    .with_context(|| format!("No character named {name}"))?;
                writeln!(out, "Loaded {name}")?;
            }
            Command::Delete { name } => {
                self.character.delete_character(name);
                writeln!(out, "Deleted {name}")?;
            }
            Command::Clear => {
                self.character.clear_character();
                writeln!(out, "Cleared active character")?;
            }
            Command::Steps => {
                self.ready_guide().await?;
                let snapshot = self.guide.snapshot();
                for step in snapshot.steps.iter() {
                    let marker = if step.global_index == snapshot.current_step_index {
                        '>'
                    } else {
                        ' '
                    };
                    writeln!(out, "{marker} {}", format_step(step))?;
                }
            }
            Command::Complete => {
                self.ready_guide().await?;
                if self.guide.mark_current_step_completed() {
                    if let Some(step) = self.guide.current_step() {
                        writeln!(out, "Next: {}", format_step(&step))?;
                    }
                } else {
                    writeln!(out, "Already at the last step")?;
                }
            }
            Command::Jump { index } => {
                self.ready_guide().await?;
                if !self.guide.jump_to_step(*index) {
                    bail!(
                        "Step {index} is out of range (0-{})",
                        self.guide.total_steps().saturating_sub(1)
                    );
                }
                self.guide.request_recenter();
                if let Some(step) = self.guide.current_step() {
                    writeln!(out, "Now at: {}", format_step(&step))?;
                }
            }
            Command::Repl => bail!("Already in interactive mode"),
        }
        Ok(())
    }

    async fn ready_guide(&self) -> anyhow::Result<()> {
        self.guide.sync().await;
        match self.guide.status() {
            GuideStatus::Ready => Ok(()),
            GuideStatus::Idle => bail!("No character selected"),
            GuideStatus::Loading => bail!("Guide is still loading"),
            GuideStatus::Error(message) => bail!(message),
        }
    }

    fn write_status(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let session = self.character.session();
        let (Some(race), Some(class)) = (session.race, session.class) else {
            writeln!(out, "No character selected")?;
            return Ok(());
        };

        match (&session.char_name, session.is_browsing_mode) {
            (Some(name), false) => writeln!(out, "{name}: {} {class}", race.display_name())?,
            _ => writeln!(out, "Browsing: {} {class} (unsaved)", race.display_name())?,
        }

        match self.guide.status() {
            GuideStatus::Ready => {}
            GuideStatus::Error(message) => {
                writeln!(out, "{message}")?;
                return Ok(());
            }
            other => {
                writeln!(out, "Guide: {other:?}")?;
                return Ok(());
            }
        }

        let Some(step) = self.guide.current_step() else {
            writeln!(out, "This guide has no steps")?;
            return Ok(());
        };
        writeln!(
            out,
            "Step {}/{} ({:.0}%) in {} [{}]",
            step.global_index + 1,
            self.guide.total_steps(),
            self.guide.progress_percentage(),
            step.zone_name,
            step.level_range
        )?;
        writeln!(out, "  {}", format_step(&step))?;
        for tip in step.step.tips() {
            writeln!(out, "  - {}", tip.text())?;
        }
        if self.guide.is_last_step() {
            writeln!(out, "  Last step of the guide")?;
        }
        Ok(())
    }
}

fn format_step(step: &ProcessedStep) -> String {
    let mut line = format!(
        "{:>3}. [{}] {}",
        step.global_index,
        step.step.step_type.as_str(),
        step.description()
    );
    if let Some(coords) = &step.step.coords {
        line.push_str(&format!(" ({:.1}, {:.1})", coords.x(), coords.y()));
    }
    if step.step.is_dungeon() {
        line.push_str(" [dungeon]");
    }
    line
}

/// Run one command, or the interactive loop for `repl`
pub async fn run(cli: Cli, deps: RunnerDeps) -> anyhow::Result<()> {
    let session = Session::new(&deps.platform);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Status) {
        Command::Repl => {
            let stdin = std::io::stdin();
            repl(&session, stdin.lock(), &mut out).await
        }
        command => session.execute(&command, &mut out).await,
    }
}

/// Execute commands line by line until `quit`, `exit` or end of input.
///
/// Command errors are reported and the loop continues.
pub async fn repl(
    session: &Session,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(out, "Type a command, `help` for the list, `quit` to leave")?;
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.first() {
            None => continue,
            Some(&"quit") | Some(&"exit") => break,
            Some(_) => {}
        }

        match ReplLine::try_parse_from(words.iter().copied()) {
            Ok(parsed) => {
                if let Err(e) = session.execute(&parsed.command, out).await {
                    writeln!(out, "error: {e}")?;
                }
            }
            Err(e) => writeln!(out, "{}", e.render())?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStorageProvider;
    use crate::infrastructure::testing::sample_source;

    fn session() -> Session {
        Session::new(&Platform::new(
            MemoryStorageProvider::new(),
            MemoryStorageProvider::new(),
            sample_source(),
        ))
    }

    async fn run_line(session: &Session, args: &[&str]) -> anyhow::Result<String> {
        let parsed = ReplLine::try_parse_from(args.iter().copied())?;
        let mut out = Vec::new();
        session.execute(&parsed.command, &mut out).await?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["levelguide", "new", "Foo", "night elf", "druid"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::New {
                name: "Foo".into(),
                race: PlayerRace::NightElf,
                class: PlayerClass::Druid,
            })
        );

        let cli = Cli::try_parse_from(["levelguide", "save", "Bar", "--index", "3"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Save {
                name: "Bar".into(),
                index: Some(3),
            })
        );

        assert!(Cli::try_parse_from(["levelguide", "browse", "Murloc", "Mage"]).is_err());
    }

    #[test]
    fn flags_override_config() {
        let cli =
            Cli::try_parse_from(["levelguide", "--guides", "data", "--storage", "s.json"]).unwrap();
        let config = cli.config(PlayerConfig::from_lookup(|_| None));
        assert_eq!(config.guides_dir, PathBuf::from("data"));
        assert_eq!(config.storage_path, PathBuf::from("s.json"));
        assert_eq!(cli.command, None);
    }

    #[tokio::test]
    async fn status_without_character() {
        let session = session();
        let out = run_line(&session, &["status"]).await.unwrap();
        assert_eq!(out, "No character selected\n");
        assert!(run_line(&session, &["steps"]).await.is_err());
    }

    #[tokio::test]
    async fn create_complete_and_report() {
        let session = session();
        run_line(&session, &["new", "Foo", "human", "mage"])
            .await
            .unwrap();

        let out = run_line(&session, &["complete"]).await.unwrap();
        assert!(out.starts_with("Next:"));

        let out = run_line(&session, &["status"]).await.unwrap();
        assert!(out.starts_with("Foo: Human Mage"));
        assert!(out.contains("Step 2/6"));
        assert_eq!(session.character().current_step_index(), 1);
    }

    #[tokio::test]
    async fn jump_out_of_range_is_an_error() {
        let session = session();
        run_line(&session, &["new", "Foo", "dwarf", "warrior"])
            .await
            .unwrap();

        let err = run_line(&session, &["jump", "3"]).await.unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert_eq!(session.guide().current_step_index(), 0);
    }

    #[tokio::test]
    async fn saving_browsing_session_keeps_guide_position() {
        let session = session();
        run_line(&session, &["browse", "human", "warrior"])
            .await
            .unwrap();
        run_line(&session, &["jump", "4"]).await.unwrap();
        assert_eq!(session.character().current_step_index(), 0);

        run_line(&session, &["save", "Foo"]).await.unwrap();

        assert_eq!(session.character().current_step_index(), 4);
        assert!(!session.character().is_browsing_mode());
        let out = run_line(&session, &["list"]).await.unwrap();
        assert_eq!(out, "* Foo\n");
    }

    #[tokio::test]
    async fn unsupported_race_surfaces_message() {
        let session = session();
        run_line(&session, &["browse", "undead", "rogue"])
            .await
            .unwrap();

        let err = run_line(&session, &["steps"]).await.unwrap_err();
        assert_eq!(err.to_string(), "Undead guides are not supported yet");
    }

    #[tokio::test]
    async fn repl_reports_errors_and_continues() {
        let session = session();
        let input = "new Foo gnome mage\nload Nobody\n\nbogus\nstatus\nquit\nclear\n";
        let mut out = Vec::new();

        repl(&session, input.as_bytes(), &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Created Foo (Gnome Mage)"));
        assert!(out.contains("error: No character named Nobody"));
        assert!(out.contains("Foo: Gnome Mage"));
        // `clear` comes after `quit`
        assert_eq!(session.character().char_name().as_deref(), Some("Foo"));
    }
}
