//! Application flow: fetch a pool, play it through a shell, offer a replay.

use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::TriviaError;
use crate::provider::{QuestionSource, TriviaClient};
use crate::session::QuizSession;
use crate::shell::{MenuChoice, Shell, ShellLayout};
use crate::Result;

/// Message shown when the provider yields nothing.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch questions. Please try again later.";

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// Every question answered and no replay requested.
    Finished,
    /// The user quit mid-round.
    Quit,
}

/// Wires a question source to a shell.
pub struct App<S> {
    source: S,
    amount: u32,
    category: u32,
    layout: ShellLayout,
}

impl App<TriviaClient> {
    /// Build an app talking to the configured provider.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = TriviaClient::new(config.to_provider_config())?;
        Ok(Self::new(
            client,
            config.provider.amount,
            config.provider.category,
            config.shell.layout,
        ))
    }
}

impl<S: QuestionSource> App<S> {
    pub fn new(source: S, amount: u32, category: u32, layout: ShellLayout) -> Self {
        Self {
            source,
            amount,
            category,
            layout,
        }
    }

    /// Fetch a pool and build a session from it.
    ///
    /// An empty pool fails with [`TriviaError::EmptyPool`].
    pub async fn start_session(&self) -> Result<QuizSession> {
        info!(
            amount = self.amount,
            category = self.category,
            "loading questions"
        );
        let pool = self.source.fetch(self.amount, self.category).await;
        if pool.len() != self.amount as usize && !pool.is_empty() {
            warn!(
                requested = self.amount,
                received = pool.len(),
                "provider returned a short pool"
            );
        }
        QuizSession::new(pool)
    }

    /// Run until the user exits.
    ///
    /// In the menu layout a failed fetch returns to the menu; in the
    /// embedded layout it ends the run with [`TriviaError::EmptyPool`].
    pub async fn run<Sh: Shell>(&self, shell: &mut Sh) -> Result<()> {
        match self.layout {
            ShellLayout::Embedded => {
                let mut session = self.load(shell).await?;
                play(&mut session, shell)?;
                Ok(())
            }
            ShellLayout::Menu => {
                let mut current: Option<QuizSession> = None;
                loop {
                    match shell.menu()? {
                        MenuChoice::Quiz => {
                            if current.is_none() {
                                match self.load(shell).await {
                                    Ok(session) => current = Some(session),
                                    Err(TriviaError::EmptyPool) => continue,
                                    Err(e) => return Err(e),
                                }
                            }
                            let Some(session) = current.as_mut() else {
                                continue;
                            };
                            if session.is_complete() {
                                session.restart();
                            }
                            play(session, shell)?;
                        }
                        MenuChoice::About => shell.show_about()?,
                        MenuChoice::Exit => {
                            info!("exit requested");
                            return Ok(());
                        }
                    }
                }
            }
        }
    }

    async fn load<Sh: Shell>(&self, shell: &mut Sh) -> Result<QuizSession> {
        match self.start_session().await {
            Ok(session) => Ok(session),
            Err(e) => {
                error!(error = %e, "could not start quiz session");
                shell.show_error(FETCH_FAILED_MESSAGE)?;
                Err(e)
            }
        }
    }
}

/// Play `session` from its current question; replays reuse the same pool.
pub fn play<Sh: Shell>(session: &mut QuizSession, shell: &mut Sh) -> Result<RoundEnd> {
    loop {
        while let Some(question) = session.current_question() {
            shell.render_question(session.current_index(), session.len(), question)?;
            let Some(choice) = shell.read_choice(question.choice_count())? else {
                info!(index = session.current_index(), "round abandoned");
                return Ok(RoundEnd::Quit);
            };
            let outcome = session.submit_answer(choice)?;
            shell.show_result(&outcome)?;
        }

        let summary = session.summary();
        info!(correct = summary.correct, total = summary.total, "round finished");
        shell.show_complete(&summary)?;

        if !shell.ask_restart()? {
            return Ok(RoundEnd::Finished);
        }
        session.restart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{AnswerOutcome, Question, SessionSummary};

    /// Scripted shell recording what it was asked to show.
    #[derive(Default)]
    struct ScriptedShell {
        menu: Vec<MenuChoice>,
        choices: Vec<Option<usize>>,
        restarts: Vec<bool>,
        rendered: Vec<usize>,
        results: Vec<String>,
        completions: usize,
        errors: Vec<String>,
        abouts: usize,
    }

    impl Shell for ScriptedShell {
        fn menu(&mut self) -> Result<MenuChoice> {
            Ok(if self.menu.is_empty() {
                MenuChoice::Exit
            } else {
                self.menu.remove(0)
            })
        }

        fn show_about(&mut self) -> Result<()> {
            self.abouts += 1;
            Ok(())
        }

        fn render_question(&mut self, index: usize, _total: usize, _q: &Question) -> Result<()> {
            self.rendered.push(index);
            Ok(())
        }

        fn read_choice(&mut self, _count: usize) -> Result<Option<usize>> {
            Ok(if self.choices.is_empty() {
                None
            } else {
                self.choices.remove(0)
            })
        }

        fn show_result(&mut self, outcome: &AnswerOutcome) -> Result<()> {
            self.results.push(outcome.correct_answer.clone());
            Ok(())
        }

        fn show_complete(&mut self, _summary: &SessionSummary) -> Result<()> {
            self.completions += 1;
            Ok(())
        }

        fn ask_restart(&mut self) -> Result<bool> {
            Ok(!self.restarts.is_empty() && self.restarts.remove(0))
        }

        fn show_error(&mut self, message: &str) -> Result<()> {
            self.errors.push(message.to_string());
            Ok(())
        }
    }

    fn pool(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| {
                Question::new(
                    format!("Q{i}"),
                    format!("A{i} &amp; more"),
                    vec![format!("x{i}"), format!("y{i}"), format!("z{i}")],
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_embedded_full_round() {
        let app = App::new(pool(4), 4, 18, ShellLayout::Embedded);
        let mut shell = ScriptedShell {
            choices: vec![Some(0), Some(2), Some(1), Some(3)],
            ..Default::default()
        };

        app.run(&mut shell).await.unwrap();

        assert_eq!(shell.rendered, vec![0, 1, 2, 3]);
        assert_eq!(shell.results.len(), 4);
        assert_eq!(shell.results[0], "A0 & more");
        assert_eq!(shell.completions, 1);
    }

    #[tokio::test]
    async fn test_empty_pool_renders_nothing() {
        let app = App::new(Vec::<Question>::new(), 4, 18, ShellLayout::Embedded);
        let mut shell = ScriptedShell::default();

        let err = app.run(&mut shell).await.unwrap_err();

        assert!(matches!(err, TriviaError::EmptyPool));
        assert_eq!(shell.errors, vec![FETCH_FAILED_MESSAGE.to_string()]);
        assert!(shell.rendered.is_empty());
    }

    #[tokio::test]
    async fn test_menu_failed_fetch_returns_to_menu() {
        let app = App::new(Vec::<Question>::new(), 4, 18, ShellLayout::Menu);
        let mut shell = ScriptedShell {
            menu: vec![MenuChoice::Quiz, MenuChoice::About, MenuChoice::Exit],
            ..Default::default()
        };

        app.run(&mut shell).await.unwrap();

        assert_eq!(shell.errors.len(), 1);
        assert_eq!(shell.abouts, 1);
        assert!(shell.rendered.is_empty());
    }

    #[tokio::test]
    async fn test_restart_replays_from_first_question() {
        let app = App::new(pool(2), 2, 18, ShellLayout::Embedded);
        let mut shell = ScriptedShell {
            choices: vec![Some(0), Some(1), Some(2), Some(3)],
            restarts: vec![true, false],
            ..Default::default()
        };

        app.run(&mut shell).await.unwrap();

        assert_eq!(shell.rendered, vec![0, 1, 0, 1]);
        assert_eq!(shell.completions, 2);
    }

    #[tokio::test]
    async fn test_menu_quit_resumes_session() {
        let app = App::new(pool(3), 3, 18, ShellLayout::Menu);
        let mut shell = ScriptedShell {
            menu: vec![MenuChoice::Quiz, MenuChoice::Quiz, MenuChoice::Exit],
            // Answer one, quit; then answer the remaining two
            choices: vec![Some(0), None, Some(1), Some(2)],
            ..Default::default()
        };

        app.run(&mut shell).await.unwrap();

        assert_eq!(shell.rendered, vec![0, 1, 1, 2]);
        assert_eq!(shell.completions, 1);
    }

    #[tokio::test]
    async fn test_start_session_takes_requested_amount() {
        let app = App::new(pool(10), 4, 18, ShellLayout::Menu);
        let session = app.start_session().await.unwrap();
        assert_eq!(session.len(), 4);
    }
}
