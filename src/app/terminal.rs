use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{DefaultTerminal, backend::CrosstermBackend};

/// Install color-eyre's report and panic hooks, restoring the terminal
/// before a panic message is printed.
pub fn install_hooks() -> color_eyre::Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    let panic_hook = panic_hook.into_panic_hook();

    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        panic_hook(info);
    }));
    eyre_hook.install()?;
    Ok(())
}

/// Switch to the alternate screen in raw mode
pub fn init_terminal() -> color_eyre::Result<DefaultTerminal> {
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;

    let mut terminal = ratatui::Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    terminal.clear()?;
    Ok(terminal)
}

pub fn restore_terminal() -> color_eyre::Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
