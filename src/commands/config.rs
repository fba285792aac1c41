use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use timeblock_core::ViewMode;
use timeblock_core::config::TimeblockConfig;

pub struct ConfigArgs {
    pub view: Option<ViewMode>,
    pub show_suggestions: Option<bool>,
    pub duration: Option<String>,
    pub color: Option<String>,
}

impl ConfigArgs {
    fn is_empty(&self) -> bool {
        self.view.is_none()
            && self.show_suggestions.is_none()
            && self.duration.is_none()
            && self.color.is_none()
    }
}

/// Show the current configuration, or update the given keys.
pub fn run(args: ConfigArgs) -> Result<()> {
    let path = TimeblockConfig::config_path()?;
    let mut config = TimeblockConfig::load()?;

    if !args.is_empty() {
        apply(&mut config, args)?;
        config
            .save_to(&path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        println!("{}", format!("  Saved {}", path.display()).green());
    } else {
        println!("{}", path.display().to_string().dimmed());
    }

    println!("  data_file         {}", config.data_path().display());
    println!("  default_view      {}", config.default_view);
    println!("  show_suggestions  {}", config.show_suggestions);
    println!("  default_duration  {}", config.default_duration);
    println!(
        "  accepted_color    {}",
        config.accepted_color.as_deref().unwrap_or("none")
    );
    println!("  model             {}", config.model);

    Ok(())
}

fn apply(config: &mut TimeblockConfig, args: ConfigArgs) -> Result<()> {
    if let Some(view) = args.view {
        config.default_view = view;
    }
    if let Some(show) = args.show_suggestions {
        config.show_suggestions = show;
    }
    if let Some(duration) = args.duration {
        config.default_duration = duration;
    }
    if let Some(color) = args.color {
        config.accepted_color = Some(color);
    }

    // Refuse to write a duration the schedule can't use.
    config.settings()?;
    Ok(())
}
