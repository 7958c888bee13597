use anyhow::Result;
use env_logger::Env;

use mazegen::config::Params;
use mazegen::render;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let params = Params::from_env();
    log::info!(
        "Generating {0}x{0} maze, seed={1:?}",
        params.cells,
        params.seed
    );

    let (maze, timings) = mazegen::generate(&params)?;

    for t in &timings {
        log::info!("  {:20} {:8.3} ms", t.name, t.ms);
    }

    print!("{}", render::render_text(&maze)?);
    Ok(())
}
