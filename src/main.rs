use mimalloc::MiMalloc;
use overlay::ToolbarConfig;

mod app;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    let _ = env_logger::try_init();

    let config = ToolbarConfig::load();
    log::info!(
        target: "scrivener",
        "toolbar margin={} gap={} min_chars={} blur_grace={}ms",
        config.placement.margin,
        config.placement.gap,
        config.selection.min_selection_chars,
        config.selection.blur_grace_ms
    );

    if let Err(err) = platform::run(Box::new(app::WritingPad::new(config))) {
        log::error!(target: "scrivener", "{err}");
        std::process::exit(1);
    }
}
