use clap::Parser;
use log::info;
use mandelbrot_explorer::{Explorer, PpmFilePresenter, RenderArgs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = RenderArgs::parse();
    let config = args.session.to_config()?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut explorer = Explorer::new(config, PpmFilePresenter::new(&args.output));

    if args.steps.is_empty() {
        explorer.render()?;
        return Ok(());
    }

    let mut rendered = false;
    for step in &args.steps {
        for event in step.to_events(explorer.view()) {
            rendered |= explorer.handle(event)?;
        }
    }

    if !rendered {
        info!("no navigation step changed the view");
        explorer.render()?;
    }

    Ok(())
}
