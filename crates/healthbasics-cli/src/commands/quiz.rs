//! The `healthbasics quiz` command.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use healthbasics_core::catalog::ContentCatalog;
use healthbasics_core::quiz::QuizSession;

pub fn execute(content: Option<PathBuf>, answers: Option<String>) -> Result<()> {
    let catalog = ContentCatalog::load(content.as_deref())?;
    anyhow::ensure!(
        !catalog.questions.is_empty(),
        "the content catalog has no quiz questions"
    );

    let mut session = QuizSession::new(&catalog.questions);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match answers {
        Some(scripted) => {
            for (question_id, option_index) in parse_answers(&scripted)? {
                session.select(question_id, option_index)?;
            }
        }
        None => {
            writeln!(
                out,
                "{} ({} questions). Enter an option number, or leave blank to skip.",
                catalog.nutrition.quiz_title,
                session.total()
            )?;
            let stdin = std::io::stdin();
            ask_questions(&mut session, &mut stdin.lock(), &mut out)?;
        }
    }

    session.submit_for_scoring();
    print_results(&session, &mut out)?;
    Ok(())
}

/// Parse `"1=2,2=3"` into `(question id, option index)` pairs.
/// Option numbers are 1-based, as printed in the interactive menu.
fn parse_answers(answers: &str) -> Result<Vec<(u32, usize)>> {
    answers
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|pair| {
            let (qid, opt) = pair
                .split_once('=')
                .with_context(|| format!("invalid answer '{pair}', expected QUESTION=OPTION"))?;
            let qid: u32 = qid
                .trim()
                .parse()
                .with_context(|| format!("invalid question id in '{pair}'"))?;
            let opt: usize = opt
                .trim()
                .parse()
                .with_context(|| format!("invalid option number in '{pair}'"))?;
            anyhow::ensure!(opt >= 1, "option numbers start at 1 (got '{pair}')");
            Ok((qid, opt - 1))
        })
        .collect()
}

/// Walk the questions in order, reading one answer per question.
/// A blank line skips the question; end of input stops asking.
fn ask_questions<R: BufRead, W: Write>(
    session: &mut QuizSession<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let questions = session.questions();
    for q in questions {
        writeln!(out, "\n{}. {}", q.id, q.prompt)?;
        for (i, option) in q.options.iter().enumerate() {
            writeln!(out, "   {}) {}", i + 1, option)?;
        }

        loop {
            write!(out, "> ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            let line = line.trim();
            if line.is_empty() {
                break;
            }

            let picked = line
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .filter(|&i| q.has_option(i));
            match picked {
                Some(index) => {
                    session.select(q.id, index)?;
                    break;
                }
                None => writeln!(
                    out,
                    "Please enter a number between 1 and {}.",
                    q.options.len()
                )?,
            }
        }
    }
    Ok(())
}

fn print_results<W: Write>(session: &QuizSession<'_>, out: &mut W) -> Result<()> {
    writeln!(out)?;
    for (q, result) in session.questions().iter().zip(session.results()) {
        let picked = result
            .selected
            .and_then(|i| q.options.get(i))
            .map(String::as_str)
            .unwrap_or("(no answer)");
        if result.is_correct {
            writeln!(out, "  [ok] {}. {} -> {}", q.id, q.prompt, picked)?;
        } else {
            writeln!(
                out,
                "  [x]  {}. {} -> {}; correct: {}",
                q.id,
                q.prompt,
                picked,
                q.correct_text()
            )?;
        }
    }

    if let Some(score) = session.score() {
        writeln!(out, "Score: {score} / {}", session.total())?;
    }
    Ok(())
}
