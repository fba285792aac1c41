use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use timeblock_core::onboarding::{Questionnaire, Step};

use super::AppContext;

/// Typed instead of an answer to go back one question.
const BACK: &str = "<";

pub fn run() -> Result<()> {
    let mut ctx = AppContext::load()?;
    let mut questionnaire = Questionnaire::default();

    println!("{}", "Let's get to know you".bold());
    println!(
        "{}",
        format!("  Type \"{}\" to go back to the previous question.", BACK).dimmed()
    );

    loop {
        let Some(question) = questionnaire.current().cloned() else {
            break;
        };
        let (position, total) = questionnaire.progress();

        println!();
        println!("{} {}", format!("[{}/{}]", position, total).dimmed(), question.prompt.bold());
        println!("  {}", question.description);
        println!("  {}", question.placeholder.dimmed());

        let input: String = Input::new()
            .with_prompt(" ")
            .with_initial_text(questionnaire.current_answer())
            .allow_empty(true)
            .interact_text()?;

        if input.trim() == BACK {
            if !questionnaire.previous() {
                eprintln!("  {}", "Already at the first question".yellow());
            }
            continue;
        }

        match questionnaire.answer(&input) {
            Ok(Step::Next(_)) => {}
            Ok(Step::Complete(_)) => break,
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }

    ctx.profile = Some(questionnaire.profile());
    println!();
    println!("{}", "Profile saved.".green());

    ctx.save()
}
