use mandelbrot_spiral::{MandelbrotConfig, PixelsPresenterFactory, RunGuiCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let presenter_factory = PixelsPresenterFactory::new();
    let command = RunGuiCommand::new(presenter_factory, MandelbrotConfig::default());

    command.execute()
}
