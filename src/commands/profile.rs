use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use timeblock_core::conversation::{ProfileSection, UserProfile};

use super::AppContext;
use crate::render::render_profile;

/// Show the stored profile, or replace one section of it.
pub fn run(edit: Option<ProfileSection>, text: Option<String>) -> Result<()> {
    let mut ctx = AppContext::load()?;

    let Some(section) = edit else {
        match &ctx.profile {
            Some(profile) => println!("{}", render_profile(profile)),
            None => println!(
                "{}",
                "  No profile yet. Run `timeblock onboard` to create one.".dimmed()
            ),
        }
        return Ok(());
    };

    let profile = ctx.profile.get_or_insert_with(UserProfile::default);
    match text {
        Some(text) => profile.set_section(section, &text)?,
        None => prompt_section(profile, section)?,
    }

    println!("{}", format!("  Updated \"{}\"", section.title()).green());
    ctx.save()
}

/// Edit a section interactively, starting from its current text.
fn prompt_section(profile: &mut UserProfile, section: ProfileSection) -> Result<()> {
    println!("{}", section.title().bold());
    println!("  {}", section.description().dimmed());

    let mut initial = profile.section(section).unwrap_or("").to_string();
    loop {
        let input: String = Input::new()
            .with_prompt(" ")
            .with_initial_text(initial.as_str())
            .allow_empty(true)
            .interact_text()?;

        match profile.set_section(section, &input) {
            Ok(()) => return Ok(()),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
                initial = input;
            }
        }
    }
}
